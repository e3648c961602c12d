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

use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use connsign_core::{Context, Error, Result, Signer};
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{Method, Request};
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde_json::json;

use crate::constants::*;
use crate::{Config, Credential, EventData, EventDataBatch, RequestSigner, SendOptions};

/// Producer that publishes events to an event hub over HTTPS.
///
/// ```no_run
/// use connsign_core::Context;
/// use connsign_eventhubs::{EventData, EventHubProducerClient, SendOptions};
///
/// # async fn example(ctx: Context) -> connsign_core::Result<()> {
/// let producer = EventHubProducerClient::from_connection_string(
///     ctx,
///     "Endpoint=sb://my-ns.servicebus.windows.net/;SharedAccessKeyName=send;SharedAccessKey=<key>;EntityPath=my-hub",
/// )?;
///
/// producer
///     .send(EventData::new("hello"), &SendOptions::new().with_partition_id("0"))
///     .await?;
///
/// let mut batch = producer.create_batch(None)?;
/// batch.try_add(EventData::new("first"))?;
/// batch.try_add(EventData::new("second"))?;
/// producer.send_batch(&batch, &SendOptions::new()).await?;
///
/// producer.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventHubProducerClient {
    ctx: Context,
    namespace: String,
    event_hub_name: String,
    signer: Signer<Credential>,
    closed: AtomicBool,
}

impl EventHubProducerClient {
    /// Create a producer from config.
    ///
    /// The namespace, the event hub name and a credential are required.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        Self::with_signer(ctx, config, RequestSigner::new)
    }

    /// Create a producer from a connection string.
    ///
    /// The connection string must carry `EntityPath`, use [`Config`] to
    /// provide the event hub name separately.
    pub fn from_connection_string(ctx: Context, conn_str: &str) -> Result<Self> {
        Self::new(ctx, Config::try_from_connection_string(conn_str)?)
    }

    /// Build the producer with a custom signer factory.
    ///
    /// The factory receives the resource uri of the event hub.
    pub fn with_signer(
        ctx: Context,
        config: Config,
        make_signer: impl FnOnce(&str) -> RequestSigner,
    ) -> Result<Self> {
        let namespace = config
            .fully_qualified_namespace
            .clone()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::invalid_argument("fully qualified namespace is required"))?;
        let event_hub_name = config
            .entity_path
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::invalid_argument("event hub name is required"))?;
        let credential = config.credential()?;

        let resource = format!("https://{namespace}/{event_hub_name}");
        let signer = Signer::new(credential, make_signer(&resource))?;

        Ok(Self {
            ctx,
            namespace,
            event_hub_name,
            signer,
            closed: AtomicBool::new(false),
        })
    }

    /// Namespace host of this producer.
    pub fn fully_qualified_namespace(&self) -> &str {
        &self.namespace
    }

    /// Name of the event hub this producer sends to.
    pub fn event_hub_name(&self) -> &str {
        &self.event_hub_name
    }

    /// Close the producer.
    ///
    /// Closing twice is a no-op. Sends issued after close fail with
    /// `ClientClosed`.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!("event hub producer for {} closed", self.event_hub_name);
        }
    }

    /// Check whether the producer has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Create an empty batch.
    ///
    /// `max_size` defaults to and can't exceed [`DEFAULT_MAX_BATCH_SIZE`].
    pub fn create_batch(&self, max_size: Option<usize>) -> Result<EventDataBatch> {
        let max_size = max_size.unwrap_or(DEFAULT_MAX_BATCH_SIZE);
        if max_size == 0 || max_size > DEFAULT_MAX_BATCH_SIZE {
            return Err(Error::invalid_argument(format!(
                "max_size must be between 1 and {DEFAULT_MAX_BATCH_SIZE}, got {max_size}"
            )));
        }
        Ok(EventDataBatch::new(max_size))
    }

    /// Send a single event.
    ///
    /// Application properties are sent as headers, so names taken by the
    /// request itself (`authorization`, `content-type`, `brokerproperties`
    /// and the like) are rejected.
    pub async fn send(&self, event: EventData, options: &SendOptions) -> Result<()> {
        self.check_open()?;
        options.validate()?;

        if event.body().len() > DEFAULT_MAX_BATCH_SIZE {
            return Err(Error::request_invalid(format!(
                "event of {} bytes exceeds the limit of {DEFAULT_MAX_BATCH_SIZE} bytes",
                event.body().len()
            )));
        }

        let mut headers = Vec::with_capacity(event.properties().len());
        for (k, v) in event.properties() {
            let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                Error::request_invalid(format!("invalid property name: {k}")).with_source(e)
            })?;
            if RESERVED_PROPERTY_HEADERS.contains(&name) {
                return Err(Error::request_invalid(format!("property name {k} is reserved")));
            }
            headers.push((name, header_value(v)?));
        }

        self.post(
            options,
            SINGLE_EVENT_CONTENT_TYPE,
            headers,
            event.body().clone(),
        )
        .await
    }

    /// Send all events of `batch` in one request.
    ///
    /// Sending an empty batch does nothing.
    pub async fn send_batch(&self, batch: &EventDataBatch, options: &SendOptions) -> Result<()> {
        self.check_open()?;
        options.validate()?;

        if batch.is_empty() {
            debug!("batch is empty, nothing to send");
            return Ok(());
        }

        self.post(options, BATCH_CONTENT_TYPE, Vec::new(), batch.to_body())
            .await
    }

    fn check_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::client_closed("event hub producer has been closed"));
        }
        Ok(())
    }

    fn messages_url(&self, partition_id: Option<&str>) -> String {
        let hub = utf8_percent_encode(&self.event_hub_name, &PATH_SEGMENT_ENCODE_SET);
        match partition_id {
            Some(id) => format!(
                "https://{}/{}/partitions/{}/messages?api-version={API_VERSION}",
                self.namespace,
                hub,
                utf8_percent_encode(id, &PATH_SEGMENT_ENCODE_SET)
            ),
            None => format!(
                "https://{}/{}/messages?api-version={API_VERSION}",
                self.namespace, hub
            ),
        }
    }

    async fn post(
        &self,
        options: &SendOptions,
        content_type: &str,
        headers: Vec<(HeaderName, HeaderValue)>,
        body: Bytes,
    ) -> Result<()> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(self.messages_url(options.partition_id.as_deref()))
            .header(CONTENT_TYPE, content_type);
        if let Some(key) = &options.partition_key {
            let props = json!({ "PartitionKey": key }).to_string();
            builder = builder.header(BROKER_PROPERTIES, header_value(&props)?);
        }
        for (k, v) in headers {
            builder = builder.header(k, v);
        }
        let (mut parts, _) = builder.body(())?.into_parts();

        self.signer.sign(&mut parts, &body)?;
        debug!("sending request: {} {}", parts.method, parts.uri);

        let resp = self.ctx.http_send(Request::from_parts(parts, body)).await?;

        let (parts, body) = resp.into_parts();
        if !parts.status.is_success() {
            return Err(Error::unexpected(format!(
                "service responded with {}: {}",
                parts.status,
                String::from_utf8_lossy(&body)
            )));
        }
        debug!("got response: {}", parts.status);

        Ok(())
    }
}

fn header_value(v: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(|e| {
        Error::request_invalid(format!("value can't be sent as header: {v}")).with_source(e)
    })
}
