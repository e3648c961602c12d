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

use connsign_core::endpoint::normalize_scheme;
use connsign_core::{ConnectionString, Error, Result};

use crate::constants::{ACCESS_KEY, ENDPOINT};
use crate::Config;

/// Parses a Communication Services connection string.
///
/// ```txt
/// Endpoint=https://my-acs.communication.azure.com/;AccessKey=QWJjMTIz
/// ```
///
/// Both `Endpoint` and `AccessKey` are required. The endpoint is returned
/// scheme-qualified (`https://` is added when missing) and without trailing
/// slash, the access key is returned as-is.
pub fn parse_connection_str(conn_str: &str) -> Result<(String, String)> {
    let cs = ConnectionString::parse(conn_str)?;

    let endpoint = cs.require(ENDPOINT)?.trim_end_matches('/');
    if endpoint.is_empty() {
        return Err(Error::invalid_connection_string(format!(
            "{ENDPOINT} must not be empty"
        )));
    }
    let access_key = cs.require(ACCESS_KEY)?;

    Ok((normalize_scheme(endpoint), access_key.to_string()))
}

pub(crate) fn parse(conn_str: &str) -> Result<Config> {
    let (endpoint, access_key) = parse_connection_str(conn_str)?;

    Ok(Config {
        endpoint: Some(endpoint),
        access_key: Some(access_key),
    })
}
