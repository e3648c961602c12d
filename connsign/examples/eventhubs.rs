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

use anyhow::Result;
use connsign::eventhubs::{default_producer, EventData, SendOptions};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let producer = default_producer()?;
    println!(
        "Sending to {}/{}",
        producer.fully_qualified_namespace(),
        producer.event_hub_name()
    );

    producer
        .send(
            EventData::new("Single event").with_property("source", "connsign-example"),
            &SendOptions::new(),
        )
        .await?;

    let mut batch = producer.create_batch(None)?;
    for i in 0..10 {
        batch.try_add(EventData::new(format!("Event number {i}")))?;
    }
    producer
        .send_batch(&batch, &SendOptions::new().with_partition_key("example"))
        .await?;
    println!("Sent {} events in one batch", batch.len());

    producer.close();
    Ok(())
}
