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

use connsign_core::utils::{Redact, RedactConnectionString};
use connsign_core::{Context, Result};
use log::debug;

use crate::connection_string;
use crate::constants::*;

/// Config carries all the configuration for a Communication Services client.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_COMMUNICATION_ENDPOINT`]
    /// - the `Endpoint` of env value [`AZURE_COMMUNICATION_CONNECTION_STRING`]
    pub endpoint: Option<String>,
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_COMMUNICATION_ACCESS_KEY`]
    /// - the `AccessKey` of env value [`AZURE_COMMUNICATION_CONNECTION_STRING`]
    pub access_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_key", &Redact::from(&self.access_key))
            .finish()
    }
}

impl Config {
    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept. A malformed connection string in
    /// env is an error instead of being silently skipped.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(AZURE_COMMUNICATION_ENDPOINT);
        }
        if self.access_key.is_none() {
            self.access_key = ctx.env_var(AZURE_COMMUNICATION_ACCESS_KEY);
        }

        if self.endpoint.is_none() || self.access_key.is_none() {
            if let Some(conn_str) = ctx.env_var(AZURE_COMMUNICATION_CONNECTION_STRING) {
                debug!(
                    "loading connection string from env: {:?}",
                    RedactConnectionString::from(conn_str.as_str())
                );
                let parsed = connection_string::parse(&conn_str)?;
                self.endpoint = self.endpoint.or(parsed.endpoint);
                self.access_key = self.access_key.or(parsed.access_key);
            }
        }

        Ok(self)
    }

    /// Parses a connection string into a configuration object.
    ///
    /// ```txt
    /// Endpoint=https://my-acs.communication.azure.com/;AccessKey=QWJjMTIz
    /// ```
    pub fn try_from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::parse(conn_str)
    }
}
