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

use connsign_core::{Error, Result};

/// Options forwarded verbatim to list operations.
///
/// Only `skip`, `take` and `locale` are recognized. They're sent as query
/// parameters and never interpreted by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// How many entries to skip, for pagination purposes.
    pub skip: Option<u32>,
    /// How many entries to return, must be greater than zero.
    pub take: Option<u32>,
    /// Language-locale pairing used to localise names, e.g. `en-US`.
    pub locale: Option<String>,
}

impl ListOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `skip`.
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set `take`.
    pub fn with_take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }

    /// Set `locale`.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Build options from loosely typed `(name, value)` pairs.
    ///
    /// Unknown names and values that don't parse are rejected with
    /// `InvalidArgument`.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut opts = Self::default();
        for (name, value) in pairs {
            match name {
                "skip" => opts.skip = Some(parse_u32(name, value)?),
                "take" => opts.take = Some(parse_u32(name, value)?),
                "locale" => opts.locale = Some(value.to_string()),
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "unrecognized option: {name}"
                    )))
                }
            }
        }

        opts.validate()?;
        Ok(opts)
    }

    /// Check the option values.
    pub fn validate(&self) -> Result<()> {
        if self.take == Some(0) {
            return Err(Error::invalid_argument("take must be greater than zero"));
        }
        if self.locale.as_deref() == Some("") {
            return Err(Error::invalid_argument("locale must not be empty"));
        }
        Ok(())
    }

    /// Query pairs in a stable order.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(locale) = &self.locale {
            pairs.push(("locale", locale.clone()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(take) = self.take {
            pairs.push(("take", take.to_string()));
        }
        pairs
    }
}

fn parse_u32(name: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|e| {
        Error::invalid_argument(format!(
            "option {name} must be a non-negative integer, got {value}"
        ))
        .with_source(e)
    })
}
