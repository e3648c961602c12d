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

//! Core components for bootstrapping and signing Azure clients.
//!
//! This crate provides the foundational types and traits shared by every
//! connsign service crate.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **ConnectionString**: parsing of `Endpoint=...;AccessKey=...` style configuration blobs
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credentials (`SigningCredential`) and request signing (`SignRequest`)
//! - **Signer**: Binds a credential to a signing policy, once per client
//!
//! ## Example
//!
//! ```
//! use connsign_core::{ConnectionString, Result, SignRequest, Signer, SigningCredential};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyPolicy;
//!
//! impl SignRequest for MyPolicy {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(&self, req: &mut Parts, _body: &[u8], cred: &MyCredential) -> Result<()> {
//!         req.headers.insert("x-api-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let cs = ConnectionString::parse("Endpoint=https://example.com;ApiKey=secret")?;
//! let credential = MyCredential {
//!     key: cs.require("ApiKey")?.to_string(),
//! };
//! let signer = Signer::new(credential, MyPolicy)?;
//!
//! let mut parts = http::Request::get(cs.require("Endpoint")?)
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, b"")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`endpoint`]: Endpoint scheme normalization
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod endpoint;
pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod connection_string;
pub use connection_string::ConnectionString;

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
