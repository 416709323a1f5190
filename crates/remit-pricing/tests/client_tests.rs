//! # Integration tests for the pricing client
//!
//! Drives `PricingClient` against a wiremock server: happy path, path
//! shape, schema tolerance, and error mapping.

use remit_pricing::{PricingClient, PricingConfig, PricingError, RetryPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PricingClient {
    let mut config = PricingConfig::new(server.uri());
    config.retry = RetryPolicy::none();
    PricingClient::new(config).unwrap()
}

#[tokio::test]
async fn corridors_decodes_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/transfer/corridors/HKG/PHL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "source": { "type": "bank", "partner": "" },
                "dest": { "type": "cash_pickup", "partner": "cebuana", "currency": "PHP" },
                "dest_key": "phl-cebuana-php",
                "rate": 6.312
            },
            {
                "source": { "type": "jetco", "partner": "" },
                "dest": { "type": "bank_account", "partner": "", "currency": "PHP" },
                "dest_key": "phl-bank-php",
                "rate": 6.345
            }
        ])))
        .mount(&server)
        .await;

    let records = client_for(&server).corridors("HKG", "PHL").await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].dest_key, "phl-cebuana-php");
    assert_eq!(records[0].rate, Some(6.312));
    assert_eq!(records[1].dest.method_type, "bank_account");
}

#[tokio::test]
async fn corridors_uppercases_country_codes_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/transfer/corridors/HKG/VNM"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server).corridors("hkg", "vnm").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn corridors_tolerates_unknown_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/transfer/corridors/HKG/IDN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "dest_key": "idn-finnet-idr",
                "rate": 1887.4,
                "dest": { "type": "cash_pickup", "partner": "finnet", "currency": "IDR" },
                "source": { "type": "bank" },
                "fee": { "flat": 20 },
                "expires_at": "2026-09-01T00:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let records = client_for(&server).corridors("HKG", "IDN").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].dest.partner, "finnet");
    assert_eq!(records[0].source.partner, "");
}

#[tokio::test]
async fn non_2xx_maps_to_api_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/transfer/corridors/HKG/PHL"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream sad"))
        .mount(&server)
        .await;

    let err = client_for(&server).corridors("HKG", "PHL").await.unwrap_err();
    match err {
        PricingError::Api { status, body, .. } => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream sad");
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/transfer/corridors/HKG/PHL"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let err = client_for(&server).corridors("HKG", "PHL").await.unwrap_err();
    assert!(matches!(err, PricingError::Decode { .. }), "got: {err}");
}
