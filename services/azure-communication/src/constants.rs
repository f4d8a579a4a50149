// Headers used in azure communication services.
pub const X_MS_DATE: &str = "x-ms-date";
pub const X_MS_CONTENT_SHA256: &str = "x-ms-content-sha256";

/// Authorization scheme tag.
pub const HMAC_SHA256: &str = "HMAC-SHA256";

/// Header names covered by the signature, in signing order.
pub const SIGNED_HEADERS: &str = "x-ms-date;host;x-ms-content-sha256";

// Env values used in azure communication services.
pub const AZURE_COMMUNICATION_CONNECTION_STRING: &str = "AZURE_COMMUNICATION_CONNECTION_STRING";
pub const AZURE_COMMUNICATION_ENDPOINT: &str = "AZURE_COMMUNICATION_ENDPOINT";
pub const AZURE_COMMUNICATION_ACCESS_KEY: &str = "AZURE_COMMUNICATION_ACCESS_KEY";
