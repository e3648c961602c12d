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

use std::time::Duration;

use http::HeaderName;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Header carrying broker properties such as the partition key.
pub const BROKER_PROPERTIES: HeaderName = HeaderName::from_static("brokerproperties");

/// Headers set by the producer or the signer, not usable as property names.
pub const RESERVED_PROPERTY_HEADERS: [HeaderName; 5] = [
    http::header::AUTHORIZATION,
    http::header::CONTENT_LENGTH,
    http::header::CONTENT_TYPE,
    http::header::HOST,
    BROKER_PROPERTIES,
];

/// Event Hubs REST API version.
pub const API_VERSION: &str = "2014-01";

pub const SINGLE_EVENT_CONTENT_TYPE: &str = "application/atom+xml;type=entry;charset=utf-8";
pub const BATCH_CONTENT_TYPE: &str = "application/vnd.microsoft.servicebus.json";

/// Largest payload accepted by a single send, in bytes.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1024 * 1024;

/// Lifetime of generated SAS tokens.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

// Connection string keys.
pub const ENDPOINT: &str = "Endpoint";
pub const SHARED_ACCESS_KEY_NAME: &str = "SharedAccessKeyName";
pub const SHARED_ACCESS_KEY: &str = "SharedAccessKey";
pub const SHARED_ACCESS_SIGNATURE: &str = "SharedAccessSignature";
pub const ENTITY_PATH: &str = "EntityPath";

// Env values used in event hubs.
pub const EVENT_HUB_CONNECTION_STR: &str = "EVENT_HUB_CONNECTION_STR";
pub const EVENT_HUB_NAME: &str = "EVENT_HUB_NAME";

pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
