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

//! Azure Event Hubs support with convenience APIs

pub use connsign_eventhubs::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create an event hub producer from the environment.
///
/// Config is loaded with [`Config::from_env`] from `EVENT_HUB_CONNECTION_STR`
/// and `EVENT_HUB_NAME`.
///
/// ```no_run
/// # async fn example() -> connsign::Result<()> {
/// use connsign::eventhubs::{default_producer, EventData, SendOptions};
///
/// let producer = default_producer()?;
/// producer
///     .send(EventData::new("hello"), &SendOptions::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_producer() -> Result<EventHubProducerClient> {
    let ctx = default_context();
    let config = Config::default().from_env(&ctx)?;
    EventHubProducerClient::new(ctx, config)
}
