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
use connsign_core::endpoint::normalize_scheme;
use connsign_core::{Context, Error, Result, Signer};
use http::{header, Method, Request, Uri};
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde_json::{json, Value};

use crate::constants::{API_VERSION, PATH_SEGMENT_ENCODE_SET};
use crate::{Config, Credential, ListOptions, RequestSigner};

const BASE_PATH: &str = "/administration/phonenumbers";

/// Communication Services phone number administration client.
///
/// Every method builds the scoped REST request, signs it with the client's
/// [`RequestSigner`] and hands it to the [`Context`] transport. Responses are
/// returned as raw JSON.
///
/// ```no_run
/// use connsign_communication::{ListOptions, PhoneNumberAdministrationClient};
/// use connsign_core::Context;
///
/// # async fn example(ctx: Context) -> connsign_core::Result<()> {
/// let client = PhoneNumberAdministrationClient::from_connection_string(
///     ctx,
///     "Endpoint=my-acs.communication.azure.com;AccessKey=QWJjMTIz",
/// )?;
///
/// let numbers = client
///     .list_all_phone_numbers(&ListOptions::new().with_take(10))
///     .await?;
/// println!("{numbers}");
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PhoneNumberAdministrationClient {
    ctx: Context,
    endpoint: String,
    signer: Signer<Credential>,
    closed: AtomicBool,
}

impl PhoneNumberAdministrationClient {
    /// Create a client from an endpoint and a base64 encoded access key.
    ///
    /// `https://` is prepended to endpoints without an http(s) scheme.
    pub fn new(ctx: Context, endpoint: &str, credential: &str) -> Result<Self> {
        Self::with_signer(ctx, endpoint, credential, RequestSigner::new)
    }

    /// Create a client from config.
    ///
    /// Both `endpoint` and `access_key` must be set.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let endpoint = config
            .endpoint
            .ok_or_else(|| Error::invalid_argument("endpoint is required"))?;
        let access_key = config.access_key.ok_or_else(|| {
            Error::invalid_argument("access key is required to authenticate")
        })?;

        Self::new(ctx, &endpoint, &access_key)
    }

    /// Create a client from a connection string like
    /// `Endpoint=https://my-acs.communication.azure.com/;AccessKey=QWJjMTIz`.
    pub fn from_connection_string(ctx: Context, conn_str: &str) -> Result<Self> {
        Self::from_config(ctx, Config::try_from_connection_string(conn_str)?)
    }

    /// Build the client with a custom signing policy factory.
    ///
    /// The factory receives the normalized endpoint.
    pub fn with_signer(
        ctx: Context,
        endpoint: &str,
        credential: &str,
        make_signer: impl FnOnce(&str) -> RequestSigner,
    ) -> Result<Self> {
        if endpoint.trim().is_empty() {
            return Err(Error::invalid_argument("endpoint must not be empty"));
        }
        if credential.is_empty() {
            return Err(Error::invalid_argument(
                "access key is required to authenticate",
            ));
        }

        let endpoint = normalize_scheme(endpoint);
        let uri = endpoint.parse::<Uri>().map_err(|e| {
            Error::invalid_argument(format!("endpoint is not a valid url: {endpoint}"))
                .with_source(e)
        })?;
        if uri.authority().is_none() {
            return Err(Error::invalid_argument(format!(
                "endpoint has no host: {endpoint}"
            )));
        }

        let signer = Signer::new(Credential::new(credential), make_signer(&endpoint))?;

        Ok(Self {
            ctx,
            endpoint,
            signer,
            closed: AtomicBool::new(false),
        })
    }

    /// The scheme-qualified endpoint of this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Close the client.
    ///
    /// Closing twice is a no-op. Requests issued after close fail with
    /// `ClientClosed`.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!("phone number administration client for {} closed", self.endpoint);
        }
    }

    /// Check whether the client has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Gets the list of the acquired phone numbers.
    pub async fn list_all_phone_numbers(&self, options: &ListOptions) -> Result<Value> {
        self.list("/phonenumbers", options, Vec::new()).await
    }

    /// Gets a list of the supported area codes.
    pub async fn get_all_area_codes(
        &self,
        location_type: &str,
        country_code: &str,
        phone_plan_id: &str,
        location_options: Vec<Value>,
    ) -> Result<Value> {
        let path = format!("/countries/{}/areacodes", encode(country_code));
        let query = vec![
            ("locationType", location_type.to_string()),
            ("phonePlanId", phone_plan_id.to_string()),
        ];
        let body = json!({ "locationOptions": location_options });

        self.send_json(Method::POST, &path, query, Some(body)).await
    }

    /// Get capabilities by capabilities update id.
    pub async fn get_capabilities_update(&self, capabilities_update_id: &str) -> Result<Value> {
        let path = format!("/capabilities/{}", encode(capabilities_update_id));
        self.send_json(Method::GET, &path, Vec::new(), None).await
    }

    /// Adds or removes phone number capabilities.
    ///
    /// `phone_number_capabilities_update` maps phone numbers to the capabilities update.
    pub async fn update_capabilities(
        &self,
        phone_number_capabilities_update: Value,
    ) -> Result<Value> {
        let body = json!({ "phoneNumberCapabilitiesUpdate": phone_number_capabilities_update });
        self.send_json(Method::POST, "/capabilities", Vec::new(), Some(body))
            .await
    }

    /// Gets a list of supported countries.
    pub async fn list_all_supported_countries(&self, options: &ListOptions) -> Result<Value> {
        self.list("/countries", options, Vec::new()).await
    }

    /// Endpoint for getting number configurations.
    ///
    /// `phone_number` is in the E.164 format.
    pub async fn get_number_configuration(&self, phone_number: &str) -> Result<Value> {
        let body = json!({ "phoneNumber": phone_number });
        self.send_json(Method::POST, "/numberconfiguration", Vec::new(), Some(body))
            .await
    }

    /// Endpoint for configuring a pstn number.
    pub async fn configure_number(
        &self,
        pstn_configuration: Value,
        phone_number: &str,
    ) -> Result<()> {
        let body = json!({
            "pstnConfiguration": pstn_configuration,
            "phoneNumber": phone_number,
        });
        self.send(
            Method::PATCH,
            "/numberconfiguration/configure",
            Vec::new(),
            Some(body),
        )
        .await
        .map(|_| ())
    }

    /// Endpoint for unconfiguring a pstn number by removing the configuration.
    pub async fn unconfigure_number(&self, phone_number: &str) -> Result<()> {
        let body = json!({ "phoneNumber": phone_number });
        self.send(
            Method::PATCH,
            "/numberconfiguration/unconfigure",
            Vec::new(),
            Some(body),
        )
        .await
        .map(|_| ())
    }

    /// Gets a list of phone plan groups for the given country.
    pub async fn list_phone_plan_groups(
        &self,
        country_code: &str,
        include_rate_information: Option<bool>,
        options: &ListOptions,
    ) -> Result<Value> {
        let path = format!("/countries/{}/phoneplangroups", encode(country_code));
        let extra = include_rate_information
            .map(|v| vec![("includeRateInformation", v.to_string())])
            .unwrap_or_default();
        self.list(&path, options, extra).await
    }

    /// Gets a list of phone plans for a phone plan group.
    pub async fn list_phone_plans(
        &self,
        country_code: &str,
        phone_plan_group_id: &str,
        options: &ListOptions,
    ) -> Result<Value> {
        let path = format!(
            "/countries/{}/phoneplangroups/{}/phoneplans",
            encode(country_code),
            encode(phone_plan_group_id)
        );
        self.list(&path, options, Vec::new()).await
    }

    /// Gets a list of location options for a phone plan.
    pub async fn get_phone_plan_location_options(
        &self,
        country_code: &str,
        phone_plan_group_id: &str,
        phone_plan_id: &str,
        options: &ListOptions,
    ) -> Result<Value> {
        let path = format!(
            "/countries/{}/phoneplangroups/{}/phoneplans/{}/locationoptions",
            encode(country_code),
            encode(phone_plan_group_id),
            encode(phone_plan_id)
        );
        self.list(&path, options, Vec::new()).await
    }

    /// Gets a release by a release id.
    pub async fn get_release_by_id(&self, release_id: &str) -> Result<Value> {
        let path = format!("/releases/{}", encode(release_id));
        self.send_json(Method::GET, &path, Vec::new(), None).await
    }

    /// Creates a release for the given phone numbers.
    pub async fn release_phone_numbers(&self, phone_numbers: &[&str]) -> Result<Value> {
        let body = json!({ "phoneNumbers": phone_numbers });
        self.send_json(Method::POST, "/releases", Vec::new(), Some(body))
            .await
    }

    /// Gets a list of all releases.
    ///
    /// Only `skip` and `take` apply, a `locale` is rejected.
    pub async fn list_all_releases(&self, options: &ListOptions) -> Result<Value> {
        self.list_unlocalized("/releases", options).await
    }

    /// Get search by search id.
    pub async fn get_search_by_id(&self, search_id: &str) -> Result<Value> {
        let path = format!("/searches/{}", encode(search_id));
        self.send_json(Method::GET, &path, Vec::new(), None).await
    }

    /// Creates a phone number search.
    ///
    /// `body` is forwarded as the search options.
    pub async fn create_search(&self, body: Value) -> Result<Value> {
        self.send_json(Method::POST, "/searches", Vec::new(), Some(body))
            .await
    }

    /// Gets a list of all searches.
    ///
    /// Only `skip` and `take` apply, a `locale` is rejected.
    pub async fn list_all_searches(&self, options: &ListOptions) -> Result<Value> {
        self.list_unlocalized("/searches", options).await
    }

    /// Cancels the search. This means existing numbers in the search will be made available.
    pub async fn cancel_search(&self, search_id: &str) -> Result<()> {
        let path = format!("/searches/{}/cancel", encode(search_id));
        self.send(Method::POST, &path, Vec::new(), None)
            .await
            .map(|_| ())
    }

    /// Purchases the phone number search.
    pub async fn purchase_search(&self, search_id: &str) -> Result<()> {
        let path = format!("/searches/{}/purchase", encode(search_id));
        self.send(Method::POST, &path, Vec::new(), None)
            .await
            .map(|_| ())
    }

    async fn list(
        &self,
        path: &str,
        options: &ListOptions,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<Value> {
        options.validate()?;
        query.extend(options.query_pairs());

        self.send_json(Method::GET, path, query, None).await
    }

    async fn list_unlocalized(&self, path: &str, options: &ListOptions) -> Result<Value> {
        if options.locale.is_some() {
            return Err(Error::invalid_argument(format!(
                "locale is not supported when listing {path}"
            )));
        }
        self.list(path, options, Vec::new()).await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        query: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> Result<Value> {
        self.send(method, path, query, body)
            .await?
            .ok_or_else(|| Error::unexpected("service returned an empty body"))
    }

    /// Build, sign and send one request.
    ///
    /// Returns `None` when the service responds without body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(&'static str, String)>,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        if self.is_closed() {
            return Err(Error::client_closed(
                "phone number administration client has been closed",
            ));
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &query {
            serializer.append_pair(k, v);
        }
        serializer.append_pair("api-version", API_VERSION);
        let url = format!(
            "{}{}{}?{}",
            self.endpoint.trim_end_matches('/'),
            BASE_PATH,
            path,
            serializer.finish()
        );

        let mut builder = Request::builder()
            .method(method)
            .uri(url)
            .header(header::ACCEPT, "application/json");
        let content = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                serde_json::to_vec(&body)?
            }
            None => Vec::new(),
        };
        let (mut parts, _) = builder.body(())?.into_parts();

        self.signer.sign(&mut parts, &content)?;
        debug!("sending request: {} {}", parts.method, parts.uri);

        let resp = self
            .ctx
            .http_send(Request::from_parts(parts, Bytes::from(content)))
            .await?;

        let (parts, body) = resp.into_parts();
        if !parts.status.is_success() {
            return Err(Error::unexpected(format!(
                "service responded with {}: {}",
                parts.status,
                String::from_utf8_lossy(&body)
            )));
        }
        debug!("got response: {}", parts.status);

        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, &PATH_SEGMENT_ENCODE_SET).to_string()
}
