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

//! Azure Event Hubs signer and producer client
//!
//! This crate provides:
//! - Connection string parsing (`Endpoint=sb://...;SharedAccessKeyName=...;SharedAccessKey=...`)
//! - SAS token generation from shared access keys
//! - A producer that signs and sends events over the Event Hubs REST API
//!
//! # Example
//!
//! ```rust,no_run
//! use connsign_core::{Context, OsEnv};
//! use connsign_eventhubs::{Config, EventData, EventHubProducerClient, SendOptions};
//! use connsign_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> connsign_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Reads EVENT_HUB_CONNECTION_STR and EVENT_HUB_NAME.
//!     let config = Config::default().from_env(&ctx)?;
//!     let producer = EventHubProducerClient::new(ctx, config)?;
//!
//!     producer
//!         .send(
//!             EventData::new("hello").with_property("source", "example"),
//!             &SendOptions::new().with_partition_key("device-1"),
//!         )
//!         .await?;
//!
//!     producer.close();
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::{
    API_VERSION, DEFAULT_MAX_BATCH_SIZE, DEFAULT_TOKEN_LIFETIME, EVENT_HUB_CONNECTION_STR,
    EVENT_HUB_NAME,
};

mod config;
pub use config::Config;

mod connection_string;

mod credential;
pub use credential::Credential;

mod sas;
pub use sas::SharedAccessSignature;

mod sign_request;
pub use sign_request::RequestSigner;

mod event;
pub use event::{EventData, EventDataBatch};

mod options;
pub use options::SendOptions;

mod producer;
pub use producer::EventHubProducerClient;
