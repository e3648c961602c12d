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

use std::env;

use anyhow::Result;
use connsign_core::{Context, OsEnv};
use connsign_eventhubs::{Config, EventData, EventHubProducerClient, SendOptions};
use connsign_http_send_reqwest::ReqwestHttpSend;
use log::warn;

fn init_producer() -> Option<EventHubProducerClient> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("CONNSIGN_EVENTHUBS_TEST").is_err()
        || env::var("CONNSIGN_EVENTHUBS_TEST").unwrap() != "on"
    {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default()
        .from_env(&ctx)
        .expect("env EVENT_HUB_CONNECTION_STR must be valid");

    Some(EventHubProducerClient::new(ctx, config).expect("producer must build"))
}

#[tokio::test]
async fn test_live_send() -> Result<()> {
    let Some(producer) = init_producer() else {
        warn!("CONNSIGN_EVENTHUBS_TEST is not set, skipped");
        return Ok(());
    };

    producer
        .send(EventData::new("A single event"), &SendOptions::new())
        .await?;
    producer
        .send(
            EventData::new("Data").with_property("raw_prop", "raw_value"),
            &SendOptions::new().with_partition_id("0"),
        )
        .await?;
    producer
        .send(
            EventData::new("keyed"),
            &SendOptions::new().with_partition_key("test_partition_a"),
        )
        .await?;

    producer.close();
    Ok(())
}

#[tokio::test]
async fn test_live_send_batch() -> Result<()> {
    let Some(producer) = init_producer() else {
        warn!("CONNSIGN_EVENTHUBS_TEST is not set, skipped");
        return Ok(());
    };

    let mut batch = producer.create_batch(Some(100_000))?;
    while batch
        .try_add(EventData::new("A single event data").with_property("raw_prop", "raw_value"))
        .is_ok()
    {}
    assert!(batch.len() > 1);

    producer.send_batch(&batch, &SendOptions::new()).await?;
    producer.close();
    Ok(())
}
