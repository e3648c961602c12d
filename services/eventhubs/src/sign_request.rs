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

use std::time::Duration;

use chrono::TimeDelta;
use connsign_core::time::{now, DateTime};
use connsign_core::{Error, Result, SignRequest, SigningRequest};
use http::header;
use http::request::Parts;
use log::debug;

use crate::constants::DEFAULT_TOKEN_LIFETIME;
use crate::sas::SharedAccessSignature;
use crate::Credential;

/// RequestSigner that authorizes Event Hubs requests with SAS tokens.
///
/// Shared key credentials get a fresh token for every request, SAS token
/// credentials are sent verbatim.
#[derive(Debug)]
pub struct RequestSigner {
    resource: String,
    token_lifetime: Duration,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer for `resource`, like `https://my-ns.servicebus.windows.net/my-hub`.
    pub fn new(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            token_lifetime: DEFAULT_TOKEN_LIFETIME,
            time: None,
        }
    }

    /// Set how long generated tokens stay valid.
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Resource uri covered by generated tokens.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    fn expiry(&self) -> Result<DateTime> {
        let lifetime = i64::try_from(self.token_lifetime.as_secs())
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| Error::signing("token lifetime is out of range"))?;

        self.time
            .unwrap_or_else(now)
            .checked_add_signed(lifetime)
            .ok_or_else(|| Error::signing("token expiry is out of range"))
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut Parts, _body: &[u8], cred: &Self::Credential) -> Result<()> {
        let token = match cred {
            Credential::SasToken { token } => token.clone(),
            Credential::SharedKey { key_name, key } => {
                let expiry = self.expiry()?;
                debug!(
                    "generating sas token for {} expiring at {}",
                    self.resource, expiry
                );
                SharedAccessSignature::new(&self.resource, key_name, key, expiry).token()
            }
        };

        let mut ctx = SigningRequest::build(req)?;
        ctx.header_insert_sensitive(header::AUTHORIZATION, &token)?;
        ctx.apply(req)
    }
}
