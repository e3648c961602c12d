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
use connsign::communication::{ListOptions, PhoneNumberAdministrationClient};
use connsign::default_context;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let conn_str = std::env::var("AZURE_COMMUNICATION_CONNECTION_STRING")?;

    // The client signs every request with the access key of the connection string.
    let client = PhoneNumberAdministrationClient::from_connection_string(
        default_context(),
        &conn_str,
    )?;
    println!("Using endpoint {}", client.endpoint());

    let countries = client
        .list_all_supported_countries(&ListOptions::new().with_locale("en-US"))
        .await?;
    println!("Supported countries: {countries:#}");

    let numbers = client
        .list_all_phone_numbers(&ListOptions::new().with_skip(0).with_take(10))
        .await?;
    println!("Acquired phone numbers: {numbers:#}");

    client.close();
    Ok(())
}
