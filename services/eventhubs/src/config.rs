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
use connsign_core::{Context, Error, Result};
use log::debug;

use crate::connection_string;
use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for an Event Hubs producer.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// Namespace host like `my-ns.servicebus.windows.net`.
    ///
    /// Loaded from the `Endpoint` of env value [`EVENT_HUB_CONNECTION_STR`]
    /// if not set.
    pub fully_qualified_namespace: Option<String>,
    /// Event hub name.
    ///
    /// `entity_path` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EVENT_HUB_NAME`]
    /// - the `EntityPath` of env value [`EVENT_HUB_CONNECTION_STR`]
    pub entity_path: Option<String>,
    /// Name of the shared access policy.
    pub shared_access_key_name: Option<String>,
    /// Shared access key of the policy.
    pub shared_access_key: Option<String>,
    /// Pre-generated SAS token. Takes precedence over the shared access key.
    pub shared_access_signature: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("fully_qualified_namespace", &self.fully_qualified_namespace)
            .field("entity_path", &self.entity_path)
            .field("shared_access_key_name", &self.shared_access_key_name)
            .field("shared_access_key", &Redact::from(&self.shared_access_key))
            .field(
                "shared_access_signature",
                &Redact::from(&self.shared_access_signature),
            )
            .finish()
    }
}

impl Config {
    /// Set the fully qualified namespace.
    pub fn with_fully_qualified_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.fully_qualified_namespace = Some(namespace.into());
        self
    }

    /// Set the event hub name.
    pub fn with_entity_path(mut self, entity_path: impl Into<String>) -> Self {
        self.entity_path = Some(entity_path.into());
        self
    }

    /// Set the shared access policy name and key.
    pub fn with_shared_access_key(
        mut self,
        key_name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.shared_access_key_name = Some(key_name.into());
        self.shared_access_key = Some(key.into());
        self
    }

    /// Set a pre-generated SAS token.
    pub fn with_shared_access_signature(mut self, token: impl Into<String>) -> Self {
        self.shared_access_signature = Some(token.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept. Credentials are taken from the
    /// connection string as a whole, never mixed with explicit ones.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if self.entity_path.is_none() {
            self.entity_path = ctx.env_var(EVENT_HUB_NAME);
        }

        if let Some(conn_str) = ctx.env_var(EVENT_HUB_CONNECTION_STR) {
            debug!(
                "loading connection string from env: {:?}",
                RedactConnectionString::from(conn_str.as_str())
            );
            let parsed = connection_string::parse(&conn_str)?;

            self.fully_qualified_namespace = self
                .fully_qualified_namespace
                .or(parsed.fully_qualified_namespace);
            self.entity_path = self.entity_path.or(parsed.entity_path);
            if !self.has_credential() {
                self.shared_access_key_name = parsed.shared_access_key_name;
                self.shared_access_key = parsed.shared_access_key;
                self.shared_access_signature = parsed.shared_access_signature;
            }
        }

        Ok(self)
    }

    /// Parses a connection string into a configuration object.
    ///
    /// ```txt
    /// Endpoint=sb://my-ns.servicebus.windows.net/;SharedAccessKeyName=RootManageSharedAccessKey;SharedAccessKey=<key>;EntityPath=my-hub
    /// ```
    pub fn try_from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::parse(conn_str)
    }

    fn has_credential(&self) -> bool {
        self.shared_access_key.is_some() || self.shared_access_signature.is_some()
    }

    /// Build the credential described by this config.
    pub(crate) fn credential(&self) -> Result<Credential> {
        if let Some(token) = &self.shared_access_signature {
            return Ok(Credential::with_sas_token(token));
        }

        match (&self.shared_access_key_name, &self.shared_access_key) {
            (Some(name), Some(key)) => Ok(Credential::with_shared_key(name, key)),
            (None, Some(_)) => Err(Error::invalid_argument(
                "shared access key name is required with shared access key",
            )),
            _ => Err(Error::invalid_argument(
                "shared access key or signature is required to authenticate",
            )),
        }
    }
}
