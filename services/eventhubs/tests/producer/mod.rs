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
use connsign_core::{Context, ErrorKind};
use connsign_eventhubs::{
    Config, EventData, EventHubProducerClient, RequestSigner, SendOptions,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_case::test_case;

use crate::mock::MockHttpSend;

const CONN_STR: &str = "Endpoint=sb://my-ns.servicebus.windows.net/;SharedAccessKeyName=RootManageSharedAccessKey;SharedAccessKey=Zm9vYmFyYmF6cXV4PQ==;EntityPath=my-hub";
const TOKEN: &str = "SharedAccessSignature sr=https%3A%2F%2Fmy-ns.servicebus.windows.net%2Fmy-hub&sig=tndWxMZu03QO8gPvcVDaQo1QNAuIUneF3Wj8eFZ9WRI%3D&se=1646125954&skn=RootManageSharedAccessKey";

fn init_producer(mock: &MockHttpSend) -> EventHubProducerClient {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    let time = Utc.with_ymd_and_hms(2022, 3, 1, 8, 12, 34).unwrap();
    EventHubProducerClient::with_signer(
        ctx,
        Config::try_from_connection_string(CONN_STR).unwrap(),
        |resource| RequestSigner::new(resource).with_time(time),
    )
    .unwrap()
}

#[tokio::test]
async fn test_send_single_event() {
    let mock = MockHttpSend::new().with_response(201, "");
    let producer = init_producer(&mock);

    producer
        .send(EventData::new("A single event"), &SendOptions::new())
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(
        req.uri,
        "https://my-ns.servicebus.windows.net/my-hub/messages?api-version=2014-01"
    );
    assert_eq!(req.headers["authorization"], TOKEN);
    assert_eq!(
        req.headers["content-type"],
        "application/atom+xml;type=entry;charset=utf-8"
    );
    assert!(req.headers.get("brokerproperties").is_none());
    assert_eq!(&req.body[..], b"A single event");
}

#[tokio::test]
async fn test_send_empty_body() {
    let mock = MockHttpSend::new().with_response(201, "");
    let producer = init_producer(&mock);

    producer
        .send(EventData::new(""), &SendOptions::new())
        .await
        .unwrap();
    assert!(mock.last_request().body.is_empty());
}

#[tokio::test]
async fn test_send_to_partition_with_properties() {
    let mock = MockHttpSend::new().with_response(201, "");
    let producer = init_producer(&mock);

    producer
        .send(
            EventData::new("Message 1").with_property("raw_prop", "raw_value"),
            &SendOptions::new().with_partition_id("1"),
        )
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(
        req.uri,
        "https://my-ns.servicebus.windows.net/my-hub/partitions/1/messages?api-version=2014-01"
    );
    assert_eq!(req.headers["raw_prop"], "raw_value");
    // The token covers the hub, not the partition.
    assert_eq!(req.headers["authorization"], TOKEN);
}

#[tokio::test]
async fn test_send_with_partition_key() {
    let mock = MockHttpSend::new().with_response(201, "");
    let producer = init_producer(&mock);

    producer
        .send(
            EventData::new("0"),
            &SendOptions::new().with_partition_key("test_partition_a"),
        )
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(
        req.uri,
        "https://my-ns.servicebus.windows.net/my-hub/messages?api-version=2014-01"
    );
    let props: Value =
        serde_json::from_slice(req.headers["brokerproperties"].as_bytes()).unwrap();
    assert_eq!(props, serde_json::json!({"PartitionKey": "test_partition_a"}));
}

#[tokio::test]
async fn test_send_invalid_requests() {
    let mock = MockHttpSend::new();
    let producer = init_producer(&mock);

    let err = producer
        .send(
            EventData::new("x"),
            &SendOptions::new()
                .with_partition_id("0")
                .with_partition_key("k"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = producer
        .send(
            EventData::new("x").with_property("bad name", "v"),
            &SendOptions::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    let err = producer
        .send(
            EventData::new(vec![b'A'; 1024 * 1024 + 1]),
            &SendOptions::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    assert!(mock.requests().is_empty());
}

#[test_case("Content-Type" ; "content type")]
#[test_case("authorization" ; "authorization")]
#[test_case("BrokerProperties" ; "broker properties")]
#[test_case("host" ; "host")]
#[tokio::test]
async fn test_send_reserved_property_name(name: &str) {
    let mock = MockHttpSend::new();
    let producer = init_producer(&mock);

    let err = producer
        .send(
            EventData::new("x").with_property(name, "v"),
            &SendOptions::new().with_partition_key("k"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(err.to_string().contains("reserved"));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_send_large_body() {
    let mock = MockHttpSend::new().with_response(201, "");
    let producer = init_producer(&mock);

    producer
        .send(EventData::new(vec![b'A'; 250 * 1024]), &SendOptions::new())
        .await
        .unwrap();
    assert_eq!(mock.last_request().body.len(), 250 * 1024);
}

#[tokio::test]
async fn test_send_batch() {
    let mock = MockHttpSend::new().with_response(201, "");
    let producer = init_producer(&mock);

    let mut batch = producer.create_batch(Some(100_000)).unwrap();
    batch.try_add(EventData::new("é,è,à")).unwrap();
    batch
        .try_add(EventData::new("Message 1").with_property("raw_prop", "raw_value"))
        .unwrap();

    producer
        .send_batch(&batch, &SendOptions::new().with_partition_id("0"))
        .await
        .unwrap();

    let req = mock.last_request();
    assert_eq!(
        req.uri,
        "https://my-ns.servicebus.windows.net/my-hub/partitions/0/messages?api-version=2014-01"
    );
    assert_eq!(
        req.headers["content-type"],
        "application/vnd.microsoft.servicebus.json"
    );
    assert_eq!(req.headers["authorization"], TOKEN);

    let body: Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"Body": "é,è,à"},
            {"Body": "Message 1", "UserProperties": {"raw_prop": "raw_value"}},
        ])
    );
}

#[tokio::test]
async fn test_send_empty_batch_is_noop() {
    let mock = MockHttpSend::new();
    let producer = init_producer(&mock);

    let batch = producer.create_batch(None).unwrap();
    producer
        .send_batch(&batch, &SendOptions::new())
        .await
        .unwrap();
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_service_error() {
    let mock = MockHttpSend::new().with_response(401, "ExpiredToken");
    let producer = init_producer(&mock);

    let err = producer
        .send(EventData::new("x"), &SendOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("401"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_closed_producer() {
    let mock = MockHttpSend::new();
    let producer = init_producer(&mock);
    producer.close();

    let err = producer
        .send(EventData::new("x"), &SendOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ClientClosed);

    let batch = producer.create_batch(None).unwrap();
    let err = producer
        .send_batch(&batch, &SendOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ClientClosed);

    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_sas_token_credential_is_sent_verbatim() {
    let mock = MockHttpSend::new().with_response(201, "");
    let ctx = Context::new().with_http_send(mock.clone());
    let producer = EventHubProducerClient::from_connection_string(
        ctx,
        "Endpoint=sb://my-ns.servicebus.windows.net/;SharedAccessSignature=SharedAccessSignature sr=a&sig=b&se=1&skn=c;EntityPath=my-hub",
    )
    .unwrap();

    producer
        .send(EventData::new("x"), &SendOptions::new())
        .await
        .unwrap();
    assert_eq!(
        mock.last_request().headers["authorization"],
        "SharedAccessSignature sr=a&sig=b&se=1&skn=c"
    );
}
