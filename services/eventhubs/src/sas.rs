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

use std::fmt::{Debug, Formatter};

use connsign_core::hash::base64_hmac_sha256;
use connsign_core::time::DateTime;
use connsign_core::utils::Redact;

/// Shared access signature for an Event Hubs resource.
///
/// [Generate SAS token](https://learn.microsoft.com/en-us/rest/api/eventhub/generate-sas-token)
pub struct SharedAccessSignature {
    resource: String,
    key_name: String,
    key: String,
    expiry: DateTime,
}

impl Debug for SharedAccessSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAccessSignature")
            .field("resource", &self.resource)
            .field("key_name", &self.key_name)
            .field("key", &Redact::from(&self.key))
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl SharedAccessSignature {
    /// Create a SAS for `resource`, like `https://my-ns.servicebus.windows.net/my-hub`.
    pub fn new(resource: &str, key_name: &str, key: &str, expiry: DateTime) -> Self {
        Self {
            resource: resource.to_string(),
            key_name: key_name.to_string(),
            key: key.to_string(),
            expiry,
        }
    }

    // The key is used as raw utf-8 bytes, it's not base64 decoded.
    fn signature(&self) -> String {
        let string_to_sign = format!(
            "{}\n{}",
            urlencoded(&self.resource),
            self.expiry.timestamp()
        );

        base64_hmac_sha256(self.key.as_bytes(), string_to_sign.as_bytes())
    }

    /// Build the token sent in the `Authorization` header.
    pub fn token(&self) -> String {
        format!(
            "SharedAccessSignature sr={}&sig={}&se={}&skn={}",
            urlencoded(&self.resource),
            urlencoded(&self.signature()),
            self.expiry.timestamp(),
            urlencoded(&self.key_name)
        )
    }
}

fn urlencoded(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
