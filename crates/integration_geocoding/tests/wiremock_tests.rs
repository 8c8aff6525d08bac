//! Integration tests for the Nominatim client (wiremock-based)

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};

const ADDRESS: &str = "Rua das Gaivotas, 120, Mariluz, Imbé, RS, Brazil";

const fn sample_search_json() -> &'static str {
    r#"[
        {
            "place_id": 214733410,
            "lat": "-29.9751123",
            "lon": "-50.1298877",
            "display_name": "Rua das Gaivotas, Mariluz, Imbé, Rio Grande do Sul, Brasil"
        }
    ]"#
}

fn client_for(server: &MockServer) -> NominatimGeocodingClient {
    NominatimGeocodingClient::new(&NominatimConfig::for_testing(server.uri())).unwrap()
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", ADDRESS))
        .and(query_param("format", "jsonv2"))
        .and(query_param("limit", "1"))
        .and(query_param("countrycodes", "br"))
        .and(header("user-agent", "SchoolPassSystem/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let location = client_for(&server).geocode(ADDRESS).await.unwrap();

    assert!((location.latitude() - -29.975_112_3).abs() < 1e-9);
    assert!((location.longitude() - -50.129_887_7).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let err = client_for(&server).geocode(ADDRESS).await.unwrap_err();
    assert!(matches!(err, GeocodingError::AddressNotFound(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).geocode(ADDRESS).await.unwrap_err();
    assert!(matches!(err, GeocodingError::RequestFailed(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_geocode_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).geocode(ADDRESS).await.unwrap_err();
    assert!(matches!(err, GeocodingError::RateLimitExceeded));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_geocode_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).geocode(ADDRESS).await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn test_geocode_out_of_range_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"lat": "123.0", "lon": "-50.1"}]"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).geocode(ADDRESS).await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn test_geocode_uses_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        cache_ttl_hours: 1,
        ..NominatimConfig::for_testing(server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let first = client.geocode(ADDRESS).await.unwrap();
    // Same address, different case and padding
    let second = client.geocode(&format!("  {}  ", ADDRESS.to_uppercase())).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_geocode_without_country_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .mount(&server)
        .await;

    let config = NominatimConfig {
        country_filter: String::new(),
        ..NominatimConfig::for_testing(server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();
    client.geocode(ADDRESS).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0]
            .url
            .query_pairs()
            .any(|(key, _)| key == "countrycodes")
    );
}
