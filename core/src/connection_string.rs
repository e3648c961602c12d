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

//! Connection string parsing shared by all services.
//!
//! A connection string is a `;` separated list of `key=value` segments, for
//! example:
//!
//! ```txt
//! Endpoint=https://my-acs.communication.azure.com/;AccessKey=QWJjMTIz
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use crate::utils::Redact;
use crate::Error;
use crate::Result;

/// Parsed key-value view of a connection string.
///
/// Keys are case-sensitive. Unknown keys are kept but never required, so
/// services can ignore fields they don't understand.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    values: HashMap<String, String>,
}

impl std::fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys = self.values.keys().collect::<Vec<_>>();
        keys.sort_unstable();
        f.debug_struct("ConnectionString")
            .field("keys", &keys)
            .finish()
    }
}

impl ConnectionString {
    /// Parse a raw connection string.
    ///
    /// - Whitespace around segments, keys and values is trimmed.
    /// - Empty segments (leading or trailing `;`, line breaks) are skipped.
    /// - Only the first `=` splits a segment, values may contain `=`.
    /// - Repeating a key with the same value is accepted, with a different
    ///   value it's an error.
    pub fn parse(conn_str: &str) -> Result<Self> {
        let conn_str = conn_str.trim();
        if conn_str.is_empty() {
            return Err(Error::invalid_connection_string(
                "connection string is empty",
            ));
        }

        let mut values = HashMap::new();
        for segment in conn_str.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let (key, value) = segment.split_once('=').ok_or_else(|| {
                Error::invalid_connection_string(format!(
                    "expected '=' in segment {:?}",
                    Redact::from(segment)
                ))
            })?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() {
                return Err(Error::invalid_connection_string(
                    "segment has an empty key",
                ));
            }

            match values.get(key) {
                Some(existing) if existing != value => {
                    return Err(Error::invalid_connection_string(format!(
                        "key {key} is duplicated with conflicting values"
                    )));
                }
                Some(_) => {}
                None => {
                    values.insert(key.to_string(), value.to_string());
                }
            }
        }

        if values.is_empty() {
            return Err(Error::invalid_connection_string(
                "connection string has no key-value pairs",
            ));
        }

        Ok(Self { values })
    }

    /// Get the value of `key`, `None` if absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get the value of `key`, treating an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Get the non-empty value of a required `key`.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get_non_empty(key).ok_or_else(|| {
            Error::invalid_connection_string(format!("missing required key: {key}"))
        })
    }

    /// Check whether the connection string carries `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl FromStr for ConnectionString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
