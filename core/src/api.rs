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

use crate::Result;
use std::fmt::Debug;

/// Key material a [`Signer`](crate::Signer) binds to its policy.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check whether the credential carries everything needed to sign.
    fn is_valid(&self) -> bool;
}

/// SignRequest is the authentication policy invoked on every outbound request.
///
/// Implementations mutate the request headers (or query) in place. Signing is
/// synchronous and must not keep mutable state: the same policy is shared by all
/// in-flight requests of a client.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request.
    ///
    /// ## Body
    ///
    /// The `body` is the exact payload that will be sent, services that hash the
    /// content use it. Pass an empty slice for requests without body.
    fn sign_request(
        &self,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()>;
}
