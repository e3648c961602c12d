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

use crate::{Error, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer binds an immutable credential to a [`SignRequest`] policy.
///
/// Each client owns exactly one signer for its whole lifetime. It's cheap to
/// clone and safe to use from concurrent requests.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    credential: K,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    ///
    /// Returns `InvalidArgument` if the credential is not valid.
    pub fn new(credential: K, builder: impl SignRequest<Credential = K>) -> Result<Self> {
        if !credential.is_valid() {
            return Err(Error::invalid_argument(
                "credential is required and must not be empty",
            ));
        }

        Ok(Self {
            credential,
            builder: Arc::new(builder),
        })
    }

    /// Get the credential bound to this signer.
    pub fn credential(&self) -> &K {
        &self.credential
    }

    /// Sign the request in place.
    pub fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        self.builder.sign_request(req, body, &self.credential)
    }
}
