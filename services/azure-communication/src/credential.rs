// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use hmacsign_core::utils::Redact;
use hmacsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential for Azure Communication Services HMAC authentication.
#[derive(Clone, Default)]
pub struct Credential {
    /// Base64 encoded access key of the communication resource.
    ///
    /// The key is decoded at signing time. An empty key decodes into a
    /// zero-length HMAC key, which is accepted.
    pub access_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    /// Access keys never expire on the client side, so a loaded key stays
    /// valid until the resource rotates it.
    fn is_valid(&self) -> bool {
        true
    }
}

impl Credential {
    /// Create a new credential from a base64 encoded access key.
    pub fn with_access_key(access_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
        }
    }
}
