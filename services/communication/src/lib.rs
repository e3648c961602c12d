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

//! Azure Communication Services signer and phone number administration client
//!
//! This crate provides:
//! - Connection string parsing (`Endpoint=...;AccessKey=...`)
//! - HMAC-SHA256 request signing with the resource access key
//! - A phone number administration client that signs and forwards every call
//!
//! # Example
//!
//! ```rust,no_run
//! use connsign_communication::{ListOptions, PhoneNumberAdministrationClient};
//! use connsign_core::{Context, OsEnv};
//! use connsign_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> connsign_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let client = PhoneNumberAdministrationClient::from_connection_string(
//!         ctx,
//!         "Endpoint=https://my-acs.communication.azure.com/;AccessKey=QWJjMTIz",
//!     )?;
//!
//!     let countries = client
//!         .list_all_supported_countries(&ListOptions::new().with_locale("en-US"))
//!         .await?;
//!     println!("{countries}");
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::{
    API_VERSION, AZURE_COMMUNICATION_ACCESS_KEY, AZURE_COMMUNICATION_CONNECTION_STRING,
    AZURE_COMMUNICATION_ENDPOINT,
};

mod config;
pub use config::Config;

mod connection_string;
pub use connection_string::parse_connection_str;

mod credential;
pub use credential::Credential;

mod options;
pub use options::ListOptions;

mod sign_request;
pub use sign_request::RequestSigner;

mod client;
pub use client::PhoneNumberAdministrationClient;
