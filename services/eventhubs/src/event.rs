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

use std::collections::BTreeMap;

use bytes::Bytes;
use connsign_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A single event: an opaque body plus application properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventData {
    body: Bytes,
    properties: BTreeMap<String, String>,
}

impl EventData {
    /// Create an event with `body`.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set an application property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Raw body of the event.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as utf-8.
    pub fn body_as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| Error::request_invalid("event body is not valid utf-8").with_source(e))
    }

    /// Body deserialized from json.
    pub fn body_as_json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Application properties of the event.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    #[serde(rename = "Body")]
    body: &'a str,
    #[serde(rename = "UserProperties", skip_serializing_if = "no_properties")]
    user_properties: &'a BTreeMap<String, String>,
}

fn no_properties(properties: &&BTreeMap<String, String>) -> bool {
    properties.is_empty()
}

// Size of `[]`.
const EMPTY_BATCH_SIZE: usize = 2;

/// A bounded batch of events sent in a single request.
///
/// Events are serialized when added, so `size_in_bytes` is exactly the size
/// of the request body.
#[derive(Debug, Clone)]
pub struct EventDataBatch {
    max_size: usize,
    size: usize,
    entries: Vec<String>,
}

impl EventDataBatch {
    /// Create an empty batch that holds at most `max_size` bytes.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            size: EMPTY_BATCH_SIZE,
            entries: Vec::new(),
        }
    }

    /// Add an event to the batch.
    ///
    /// Returns `RequestInvalid` and leaves the batch untouched if the body
    /// is not utf-8 or the event doesn't fit.
    pub fn try_add(&mut self, event: EventData) -> Result<()> {
        let entry = serde_json::to_string(&BatchEntry {
            body: event.body_as_str()?,
            user_properties: &event.properties,
        })?;

        let separator = usize::from(!self.entries.is_empty());
        let size = self.size + separator + entry.len();
        if size > self.max_size {
            return Err(Error::request_invalid(format!(
                "event of {} bytes doesn't fit in batch: {} of {} bytes used",
                entry.len(),
                self.size,
                self.max_size
            )));
        }

        self.size = size;
        self.entries.push(entry);
        Ok(())
    }

    /// Number of events in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the batch holds no event.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialized size of the batch.
    pub fn size_in_bytes(&self) -> usize {
        self.size
    }

    /// Maximum serialized size of the batch.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub(crate) fn to_body(&self) -> Bytes {
        let mut body = String::with_capacity(self.size);
        body.push('[');
        body.push_str(&self.entries.join(","));
        body.push(']');
        Bytes::from(body)
    }
}
