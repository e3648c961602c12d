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

use connsign_core::{endpoint, ConnectionString, Error, Result};

use crate::constants::*;
use crate::Config;

/// Parses an Event Hubs connection string.
///
/// ```txt
/// Endpoint=sb://my-ns.servicebus.windows.net/;SharedAccessKeyName=RootManageSharedAccessKey;SharedAccessKey=<key>;EntityPath=my-hub
/// ```
///
/// `Endpoint` is required, and so is either the `SharedAccessKeyName` and
/// `SharedAccessKey` pair or a `SharedAccessSignature`. `EntityPath` is optional.
pub(crate) fn parse(conn_str: &str) -> Result<Config> {
    let cs = ConnectionString::parse(conn_str)?;

    let namespace = endpoint::host(cs.require(ENDPOINT)?);
    if namespace.is_empty() {
        return Err(Error::invalid_connection_string(format!(
            "{ENDPOINT} has no host"
        )));
    }

    let key_name = cs.get_non_empty(SHARED_ACCESS_KEY_NAME);
    let key = cs.get_non_empty(SHARED_ACCESS_KEY);
    let signature = cs.get_non_empty(SHARED_ACCESS_SIGNATURE);

    match (key_name, key, signature) {
        (_, Some(_), Some(_)) => {
            return Err(Error::invalid_connection_string(format!(
                "only one of {SHARED_ACCESS_KEY} or {SHARED_ACCESS_SIGNATURE} may be set"
            )));
        }
        (Some(_), Some(_), None) | (_, None, Some(_)) => {}
        _ => {
            return Err(Error::invalid_connection_string(format!(
                "{SHARED_ACCESS_KEY_NAME} and {SHARED_ACCESS_KEY}, or {SHARED_ACCESS_SIGNATURE} is required"
            )));
        }
    }

    Ok(Config {
        fully_qualified_namespace: Some(namespace.to_string()),
        entity_path: cs.get_non_empty(ENTITY_PATH).map(str::to_string),
        shared_access_key_name: key_name.map(str::to_string),
        shared_access_key: key.map(str::to_string),
        shared_access_signature: signature.map(str::to_string),
    })
}
