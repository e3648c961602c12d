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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a string by replacing all but the first and last three characters with asterisks.
///
/// - If the input string has fewer than 12 characters, it should be entirely redacted.
/// - If the input string has 12 or more characters, only the first three and the last three.
///
/// Users can tell different keys apart in logs without leaking them.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.0.is_char_boundary(3) || !self.0.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

/// Keys whose values are secrets inside a connection string.
const SECRET_KEYS: &[&str] = &["AccessKey", "SharedAccessKey", "SharedAccessSignature"];

/// Debug view of a raw connection string with every secret value redacted.
///
/// Segments are printed as-is except the values of `AccessKey`,
/// `SharedAccessKey` and `SharedAccessSignature`.
pub struct RedactConnectionString<'a>(&'a str);

impl<'a> From<&'a str> for RedactConnectionString<'a> {
    fn from(value: &'a str) -> Self {
        RedactConnectionString(value)
    }
}

impl Debug for RedactConnectionString<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.0.split(';').enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            match segment.split_once('=') {
                Some((k, v)) if SECRET_KEYS.contains(&k.trim()) => {
                    write!(f, "{k}={:?}", Redact(v))?;
                }
                _ => f.write_str(segment)?,
            }
        }
        Ok(())
    }
}
