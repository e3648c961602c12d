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

use connsign_core::utils::Redact;
use connsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential enum for the Event Hubs authentication methods.
#[derive(Clone)]
pub enum Credential {
    /// Shared access key, used to generate SAS tokens.
    SharedKey {
        /// Name of the shared access policy.
        key_name: String,
        /// Shared access key.
        key: String,
    },
    /// Pre-generated SAS token, sent verbatim.
    SasToken {
        /// SAS token like `SharedAccessSignature sr=..&sig=..&se=..&skn=..`.
        token: String,
    },
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::SharedKey { key_name, key } => f
                .debug_struct("Credential::SharedKey")
                .field("key_name", key_name)
                .field("key", &Redact::from(key))
                .finish(),
            Credential::SasToken { token } => f
                .debug_struct("Credential::SasToken")
                .field("token", &Redact::from(token))
                .finish(),
        }
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        match self {
            Credential::SharedKey { key_name, key } => !key_name.is_empty() && !key.is_empty(),
            Credential::SasToken { token } => !token.is_empty(),
        }
    }
}

impl Credential {
    /// Create a new credential with shared key authentication.
    pub fn with_shared_key(key_name: &str, key: &str) -> Self {
        Self::SharedKey {
            key_name: key_name.to_string(),
            key: key.to_string(),
        }
    }

    /// Create a new credential with SAS token authentication.
    pub fn with_sas_token(token: &str) -> Self {
        Self::SasToken {
            token: token.to_string(),
        }
    }
}
