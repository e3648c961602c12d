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

use http::HeaderName;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Headers used in HMAC signing.
pub const X_MS_DATE: HeaderName = HeaderName::from_static("x-ms-date");
pub const X_MS_CONTENT_SHA256: HeaderName = HeaderName::from_static("x-ms-content-sha256");
pub const X_MS_RETURN_CLIENT_REQUEST_ID: HeaderName =
    HeaderName::from_static("x-ms-return-client-request-id");

/// Headers covered by the signature, in signing order.
pub const SIGNED_HEADERS: &str = "x-ms-date;host;x-ms-content-sha256";

/// Phone number administration REST API version.
pub const API_VERSION: &str = "2020-07-20-preview1";

// Connection string keys.
pub const ENDPOINT: &str = "Endpoint";
pub const ACCESS_KEY: &str = "AccessKey";

// Env values used in communication services.
pub const AZURE_COMMUNICATION_CONNECTION_STRING: &str = "AZURE_COMMUNICATION_CONNECTION_STRING";
pub const AZURE_COMMUNICATION_ENDPOINT: &str = "AZURE_COMMUNICATION_ENDPOINT";
pub const AZURE_COMMUNICATION_ACCESS_KEY: &str = "AZURE_COMMUNICATION_ACCESS_KEY";

/// Path segments are encoded like RFC 3986 unreserved characters.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
