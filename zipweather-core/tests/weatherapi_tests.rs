//! Integration tests for the upstream client using wiremock.
//!
//! These verify the exact wire shape of the provider call and that the body
//! comes back untouched, ready for verbatim relay.

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};
use zipweather_core::{WeatherApiClient, WeatherApiConfig, WeatherApiError};

fn sample_provider_body() -> serde_json::Value {
    json!({
        "location": {
            "name": "Beverly Hills",
            "region": "California",
            "country": "USA",
            "lat": 34.09,
            "lon": -118.41,
            "tz_id": "America/Los_Angeles",
            "localtime_epoch": 1754000000i64,
            "localtime": "2025-07-31 15:13"
        },
        "current": {
            "last_updated_epoch": 1753999200i64,
            "last_updated": "2025-07-31 15:00",
            "temp_c": 20.0,
            "temp_f": 68.0,
            "is_day": 1,
            "condition": {
                "text": "Sunny",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png",
                "code": 1000
            },
            "wind_mph": 5.6,
            "wind_kph": 9.0,
            "wind_degree": 230,
            "wind_dir": "SW",
            "pressure_mb": 1015.0,
            "pressure_in": 29.97,
            "precip_mm": 0.0,
            "precip_in": 0.0,
            "humidity": 43,
            "cloud": 0,
            "feelslike_c": 20.0,
            "feelslike_f": 68.0,
            "vis_km": 16.0,
            "vis_miles": 9.0,
            "uv": 6.0,
            "gust_mph": 7.8,
            "gust_kph": 12.6
        }
    })
}

fn client_for(mock_server: &MockServer) -> WeatherApiClient {
    WeatherApiClient::with_config(
        "TESTKEY".to_string(),
        WeatherApiConfig { base_url: mock_server.uri() },
    )
}

#[tokio::test]
async fn current_forwards_key_and_query_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "TESTKEY"))
        .and(query_param("q", "90210"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_provider_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client_for(&mock_server).current("90210").await.expect("lookup must succeed");

    assert_eq!(body, sample_provider_body());
}

#[tokio::test]
async fn current_passes_unvalidated_queries_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "not-a-zip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_provider_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).current("not-a-zip").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn current_maps_error_status_to_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string("{\"error\":{\"message\":\"bad key\"}}"),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).current("90210").await.unwrap_err();

    match err {
        WeatherApiError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("bad key"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn current_maps_invalid_json_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).current("90210").await.unwrap_err();
    assert!(matches!(err, WeatherApiError::Parse(_)));
}

#[tokio::test]
async fn current_maps_unreachable_host_to_request_error() {
    let client = WeatherApiClient::with_config(
        "TESTKEY".to_string(),
        WeatherApiConfig { base_url: "http://127.0.0.1:9".to_string() },
    );

    let err = client.current("90210").await.unwrap_err();
    assert!(matches!(err, WeatherApiError::Request(_)));
}
