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

//! Azure Communication Services support with convenience APIs

pub use connsign_communication::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a phone number administration client from the environment.
///
/// Config is loaded with [`Config::from_env`], so either
/// `AZURE_COMMUNICATION_CONNECTION_STRING` or both
/// `AZURE_COMMUNICATION_ENDPOINT` and `AZURE_COMMUNICATION_ACCESS_KEY` must be set.
///
/// ```no_run
/// # async fn example() -> connsign::Result<()> {
/// use connsign::communication::{default_client, ListOptions};
///
/// let client = default_client()?;
/// let countries = client
///     .list_all_supported_countries(&ListOptions::new().with_locale("en-US"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<PhoneNumberAdministrationClient> {
    let ctx = default_context();
    let config = Config::default().from_env(&ctx)?;
    PhoneNumberAdministrationClient::from_config(ctx, config)
}
