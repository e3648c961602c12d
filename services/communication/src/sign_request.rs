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

use crate::constants::*;
use crate::Credential;
use connsign_core::endpoint;
use connsign_core::hash::{base64_decode, base64_hmac_sha256, base64_sha256};
use connsign_core::time::{format_http_date, now, DateTime};
use connsign_core::{Error, Result, SignRequest, SigningRequest};
use http::header;
use http::request::Parts;
use log::debug;

/// RequestSigner that implements the Communication Services HMAC-SHA256 scheme.
///
/// Every request gets:
///
/// - `x-ms-date`: the signing time in http date format
/// - `x-ms-content-sha256`: base64 encoded sha256 of the body
/// - `Authorization`: `HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature=<sig>`
///
/// - [Sign an HTTP request](https://learn.microsoft.com/en-us/azure/communication-services/tutorials/hmac-header-tutorial)
#[derive(Debug)]
pub struct RequestSigner {
    host: String,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer bound to the host of `endpoint`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            host: endpoint::host(endpoint).to_string(),
            time: None,
        }
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

    /// Host that is covered by the signature.
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut Parts, body: &[u8], cred: &Self::Credential) -> Result<()> {
        // Decode first so a bad key leaves the request untouched.
        let key = base64_decode(&cred.access_key)
            .map_err(|e| Error::signing("access key is not valid base64").with_source(e))?;

        let mut ctx = SigningRequest::build(req)?;

        let date = format_http_date(self.time.unwrap_or_else(now));
        let content_hash = base64_sha256(body);
        let string_to_sign = string_to_sign(&ctx, &self.host, &date, &content_hash);
        let signature = base64_hmac_sha256(&key, string_to_sign.as_bytes());

        ctx.header_insert(X_MS_DATE, &date)?;
        ctx.header_insert(X_MS_CONTENT_SHA256, &content_hash)?;
        ctx.header_insert(X_MS_RETURN_CLIENT_REQUEST_ID, "true")?;
        ctx.header_insert_sensitive(
            header::AUTHORIZATION,
            &format!("HMAC-SHA256 SignedHeaders={SIGNED_HEADERS}&Signature={signature}"),
        )?;

        ctx.apply(req)
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// PathAndQuery + "\n" +
/// Date + ";" + Host + ";" + ContentHash
/// ```
fn string_to_sign(ctx: &SigningRequest, host: &str, date: &str, content_hash: &str) -> String {
    let s = format!(
        "{}\n{}\n{};{};{}",
        ctx.method.as_str().to_ascii_uppercase(),
        ctx.path_and_query(),
        date,
        host,
        content_hash
    );

    debug!("string to sign: {:?}", &s);

    s
}
