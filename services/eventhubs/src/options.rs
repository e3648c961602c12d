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

/// Routing options for a send.
///
/// At most one of `partition_id` and `partition_key` may be set. Without
/// either, the service picks the partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Partition to send to.
    pub partition_id: Option<String>,
    /// Key hashed by the service to pick a partition.
    pub partition_key: Option<String>,
}

impl SendOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send to the given partition.
    pub fn with_partition_id(mut self, partition_id: impl Into<String>) -> Self {
        self.partition_id = Some(partition_id.into());
        self
    }

    /// Send with the given partition key.
    pub fn with_partition_key(mut self, partition_key: impl Into<String>) -> Self {
        self.partition_key = Some(partition_key.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.partition_id.is_some() && self.partition_key.is_some() {
            return Err(Error::invalid_argument(
                "partition_id and partition_key can't be set at the same time",
            ));
        }
        if self.partition_id.as_deref() == Some("") {
            return Err(Error::invalid_argument("partition_id must not be empty"));
        }
        Ok(())
    }
}
