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

//! Endpoint normalization.

/// Check whether `endpoint` starts with `http://` or `https://`, ignoring case.
pub fn has_http_scheme(endpoint: &str) -> bool {
    let lower = endpoint
        .get(..8)
        .unwrap_or(endpoint)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Prepend `https://` to `endpoint` unless it already carries an http(s) scheme.
///
/// Applying this twice gives the same result as applying it once.
pub fn normalize_scheme(endpoint: &str) -> String {
    if has_http_scheme(endpoint) {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    }
}

/// Extract the host (authority) part of an endpoint.
///
/// Any `scheme://` prefix is dropped, and so is everything from the first `/`.
pub fn host(endpoint: &str) -> &str {
    let rest = match endpoint.find("://") {
        Some(idx) => &endpoint[idx + 3..],
        None => endpoint,
    };
    match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}
