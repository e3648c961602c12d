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

use chrono::{TimeZone, Utc};
use connsign_communication::{ListOptions, PhoneNumberAdministrationClient, RequestSigner};
use connsign_core::{Context, ErrorKind};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mock::MockHttpSend;

const ENDPOINT: &str = "my-acs.communication.azure.com";
const ACCESS_KEY: &str = "QWJjMTIz";
const EMPTY_CONTENT_SHA256: &str = "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=";

fn init_client(mock: &MockHttpSend) -> PhoneNumberAdministrationClient {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    let time = Utc.with_ymd_and_hms(2022, 3, 1, 8, 12, 34).unwrap();
    PhoneNumberAdministrationClient::with_signer(ctx, ENDPOINT, ACCESS_KEY, |endpoint| {
        RequestSigner::new(endpoint).with_time(time)
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_all_phone_numbers() {
    let mock = MockHttpSend::new().with_response(
        200,
        r#"{"phoneNumbers":[{"phoneNumber":"+14255550123"}],"nextLink":null}"#,
    );
    let client = init_client(&mock);

    let resp = client
        .list_all_phone_numbers(
            &ListOptions::new()
                .with_locale("en-US")
                .with_skip(0)
                .with_take(10),
        )
        .await
        .unwrap();
    assert_eq!(resp["phoneNumbers"][0]["phoneNumber"], "+14255550123");

    let req = mock.last_request();
    assert_eq!(req.method, http::Method::GET);
    assert_eq!(
        req.uri,
        "https://my-acs.communication.azure.com/administration/phonenumbers/phonenumbers?locale=en-US&skip=0&take=10&api-version=2020-07-20-preview1"
    );
    assert_eq!(req.headers["accept"], "application/json");
    assert_eq!(req.headers["x-ms-date"], "Tue, 01 Mar 2022 08:12:34 GMT");
    assert_eq!(req.headers["x-ms-content-sha256"], EMPTY_CONTENT_SHA256);
    assert!(req.headers["authorization"]
        .to_str()
        .unwrap()
        .starts_with("HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature="));
    assert!(req.headers.get("content-type").is_none());
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn test_release_phone_numbers_signs_body() {
    let mock = MockHttpSend::new().with_response(200, r#"{"releaseId":"r-1"}"#);
    let client = init_client(&mock);

    let resp = client
        .release_phone_numbers(&["+14255550123"])
        .await
        .unwrap();
    assert_eq!(resp, json!({"releaseId": "r-1"}));

    let req = mock.last_request();
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(
        req.uri,
        "https://my-acs.communication.azure.com/administration/phonenumbers/releases?api-version=2020-07-20-preview1"
    );
    assert_eq!(&req.body[..], br#"{"phoneNumbers":["+14255550123"]}"#);
    assert_eq!(req.headers["content-type"], "application/json");
    assert_eq!(
        req.headers["x-ms-content-sha256"],
        "vPCacUCng3e72pf88iSlyESJsnxBn+pjy1QKo2zWqTI="
    );
    assert_eq!(
        req.headers["authorization"],
        "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature=St1rSKVyzS0SBLYk+DXF3aasNph7ufhVKUDF2ImLT5M="
    );
}

#[tokio::test]
async fn test_get_all_area_codes() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);

    client
        .get_all_area_codes("NotRequired", "US", "plan 1", vec![])
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(
        req.uri,
        "https://my-acs.communication.azure.com/administration/phonenumbers/countries/US/areacodes?locationType=NotRequired&phonePlanId=plan+1&api-version=2020-07-20-preview1"
    );
    assert_eq!(&req.body[..], br#"{"locationOptions":[]}"#);
}

#[tokio::test]
async fn test_list_phone_plan_groups() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);

    client
        .list_phone_plan_groups("US", Some(true), &ListOptions::new().with_locale("en-US"))
        .await
        .unwrap();

    assert_eq!(
        mock.last_request().uri,
        "https://my-acs.communication.azure.com/administration/phonenumbers/countries/US/phoneplangroups?includeRateInformation=true&locale=en-US&api-version=2020-07-20-preview1"
    );
}

#[tokio::test]
async fn test_paths_of_get_operations() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);
    let opts = ListOptions::new();

    client.list_all_supported_countries(&opts).await.unwrap();
    client.list_phone_plans("US", "group/1", &opts).await.unwrap();
    client
        .get_phone_plan_location_options("US", "g1", "p1", &opts)
        .await
        .unwrap();
    client.get_capabilities_update("cap-1").await.unwrap();
    client.get_release_by_id("rel-1").await.unwrap();
    client.list_all_releases(&opts).await.unwrap();
    client.get_search_by_id("search-1").await.unwrap();
    client.list_all_searches(&opts).await.unwrap();

    let paths = mock
        .requests()
        .into_iter()
        .map(|r| {
            assert_eq!(r.method, http::Method::GET);
            r.uri
                .trim_start_matches("https://my-acs.communication.azure.com/administration/phonenumbers")
                .trim_end_matches("?api-version=2020-07-20-preview1")
                .to_string()
        })
        .collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec![
            "/countries",
            "/countries/US/phoneplangroups/group%2F1/phoneplans",
            "/countries/US/phoneplangroups/g1/phoneplans/p1/locationoptions",
            "/capabilities/cap-1",
            "/releases/rel-1",
            "/releases",
            "/searches/search-1",
            "/searches",
        ]
    );
}

#[tokio::test]
async fn test_number_configuration() {
    let mock = MockHttpSend::new()
        .with_response(200, r#"{"pstnConfiguration":{"callbackUrl":"https://cb"}}"#)
        .with_response(202, "")
        .with_response(202, "");
    let client = init_client(&mock);

    let config = client
        .get_number_configuration("+14255550123")
        .await
        .unwrap();
    assert_eq!(config["pstnConfiguration"]["callbackUrl"], "https://cb");

    client
        .configure_number(json!({"callbackUrl": "https://cb"}), "+14255550123")
        .await
        .unwrap();
    client.unconfigure_number("+14255550123").await.unwrap();

    let reqs = mock.requests();
    assert_eq!(reqs[0].method, http::Method::POST);
    assert_eq!(&reqs[0].body[..], br#"{"phoneNumber":"+14255550123"}"#);
    assert_eq!(reqs[1].method, http::Method::PATCH);
    assert!(reqs[1]
        .uri
        .contains("/administration/phonenumbers/numberconfiguration/configure?"));
    assert_eq!(
        &reqs[1].body[..],
        br#"{"phoneNumber":"+14255550123","pstnConfiguration":{"callbackUrl":"https://cb"}}"#
    );
    assert_eq!(reqs[2].method, http::Method::PATCH);
    assert!(reqs[2]
        .uri
        .contains("/administration/phonenumbers/numberconfiguration/unconfigure?"));
}

#[tokio::test]
async fn test_search_lifecycle() {
    let mock = MockHttpSend::new()
        .with_response(201, r#"{"searchId":"s-1"}"#)
        .with_response(202, "")
        .with_response(202, "");
    let client = init_client(&mock);

    let search = client
        .create_search(json!({"displayName": "test", "quantity": 1}))
        .await
        .unwrap();
    assert_eq!(search["searchId"], "s-1");
    client.purchase_search("s-1").await.unwrap();
    client.cancel_search("s-1").await.unwrap();

    let reqs = mock.requests();
    assert!(reqs[1]
        .uri
        .contains("/administration/phonenumbers/searches/s-1/purchase?"));
    assert!(reqs[2]
        .uri
        .contains("/administration/phonenumbers/searches/s-1/cancel?"));
    for req in &reqs[1..] {
        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.headers["x-ms-content-sha256"], EMPTY_CONTENT_SHA256);
        assert!(req.body.is_empty());
    }
}

#[tokio::test]
async fn test_update_capabilities() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);

    client
        .update_capabilities(json!({"+14255550123": {"add": ["Calling"]}}))
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(
        &req.body[..],
        br#"{"phoneNumberCapabilitiesUpdate":{"+14255550123":{"add":["Calling"]}}}"#
    );
}

#[tokio::test]
async fn test_service_error() {
    let mock = MockHttpSend::new().with_response(404, r#"{"error":{"code":"NotFound"}}"#);
    let client = init_client(&mock);

    let err = client.get_search_by_id("missing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_empty_body_where_json_expected() {
    let mock = MockHttpSend::new().with_response(200, "");
    let client = init_client(&mock);

    let err = client.get_release_by_id("rel-1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_invalid_options_are_rejected_before_sending() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);

    let err = client
        .list_all_releases(&ListOptions::new().with_take(0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_locale_is_rejected_for_releases_and_searches() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);
    let opts = ListOptions::new().with_take(5).with_locale("en-US");

    let err = client.list_all_releases(&opts).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = client.list_all_searches(&opts).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(mock.requests().is_empty());

    client
        .list_all_releases(&ListOptions::new().with_skip(2).with_take(5))
        .await
        .unwrap();
    assert_eq!(
        mock.last_request().uri,
        "https://my-acs.communication.azure.com/administration/phonenumbers/releases?skip=2&take=5&api-version=2020-07-20-preview1"
    );
}

#[tokio::test]
async fn test_closed_client() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);

    client.close();
    client.close();

    let err = client
        .list_all_searches(&ListOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ClientClosed);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_malformed_key_fails_at_first_request() {
    let mock = MockHttpSend::new();
    let ctx = Context::new().with_http_send(mock.clone());

    // Construction doesn't decode the key.
    let client = PhoneNumberAdministrationClient::new(ctx, ENDPOINT, "not base64!").unwrap();

    let err = client
        .list_all_phone_numbers(&ListOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SigningError);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_concurrent_requests() {
    let mock = MockHttpSend::new();
    let client = init_client(&mock);

    let opts = ListOptions::new();
    let (a, b) = tokio::join!(
        client.list_all_releases(&opts),
        client.list_all_searches(&opts)
    );
    a.unwrap();
    b.unwrap();

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 2);
    for req in reqs {
        assert_eq!(req.headers["x-ms-date"], "Tue, 01 Mar 2022 08:12:34 GMT");
    }
}
