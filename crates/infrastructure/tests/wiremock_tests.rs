//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Catalog file loading into a working resolver
//! - Geocoding adapter against a mock Nominatim server
//! - End-to-end route resolution with geocoded addresses

use std::io::Write;
use std::sync::Arc;

use application::{GeoMatcherSettings, RouteResolver, StrategySelection, StudentRouteRequest};
use application::ports::GeocodingPort;
use domain::{AddressQuery, StrategyKind};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infrastructure::{GeocodingAdapter, GeocodingAppConfig, load_catalog};

const CATALOG: &str = r#"
[[routes]]
name = "Rota 14"
itinerary = ["Nordeste", "Mariluz", "EMEF Rui Barbosa"]

[[routes]]
name = "Rota 15"
stops = [
    { latitude = -29.9600, longitude = -50.1200 },
    { latitude = -29.9700, longitude = -50.1250 },
    { latitude = -29.9800, longitude = -50.1300 },
]

[schools]
"EMEF Rui Barbosa" = { latitude = -29.9801, longitude = -50.1301 }
"#;

fn catalog_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

fn geocoding_config(server: &MockServer) -> GeocodingAppConfig {
    GeocodingAppConfig {
        base_url: server.uri(),
        cache_ttl_hours: 0,
        ..GeocodingAppConfig::default()
    }
}

fn student() -> StudentRouteRequest {
    StudentRouteRequest::new(
        AddressQuery::new("Rua das Gaivotas", "120", "Mariluz"),
        "EMEF Rui Barbosa",
    )
}

async fn mount_search(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param(
            "q",
            "Rua das Gaivotas, 120, Mariluz, Imbé, RS, Brazil",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

mod geocoding_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn adapter_geocodes_with_default_city() {
        let server = MockServer::start().await;
        mount_search(&server, r#"[{"lat": "-29.9601", "lon": "-50.1201"}]"#).await;

        let adapter = GeocodingAdapter::from_config(&geocoding_config(&server)).unwrap();
        let location = adapter.geocode(&student().address).await.unwrap();

        assert!((location.latitude() - -29.9601).abs() < 1e-9);
    }

    #[tokio::test]
    async fn adapter_swallows_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let adapter = GeocodingAdapter::from_config(&geocoding_config(&server)).unwrap();
        assert!(adapter.geocode(&student().address).await.is_none());
    }
}

mod resolution_tests {
    use super::*;

    fn resolver(server: &MockServer) -> RouteResolver {
        let file = catalog_file();
        let catalog = load_catalog(file.path()).unwrap();
        let adapter = GeocodingAdapter::from_config(&geocoding_config(server)).unwrap();

        RouteResolver::new(Arc::new(catalog), GeoMatcherSettings::default())
            .with_geocoder(Arc::new(adapter))
    }

    #[tokio::test]
    async fn geocoded_student_gets_geo_match() {
        let server = MockServer::start().await;
        // About 11 m from the first stop of Rota 15
        mount_search(&server, r#"[{"lat": "-29.9601", "lon": "-50.1200"}]"#).await;

        let found = resolver(&server).resolve_route(&student()).await.unwrap();

        assert_eq!(found.route_name, "Rota 15");
        assert_eq!(found.strategy, StrategyKind::Geo);
        assert!(found.justification.starts_with("Boarding at 11m from home"));
        assert!(found.justification.ends_with("Correct direction to EMEF Rui Barbosa."));
    }

    #[tokio::test]
    async fn ungeocodable_student_falls_back_to_itinerary() {
        let server = MockServer::start().await;
        mount_search(&server, "[]").await;

        let found = resolver(&server).resolve_route(&student()).await.unwrap();

        assert_eq!(found.route_name, "Rota 14");
        assert_eq!(found.strategy, StrategyKind::Itinerary);
    }

    #[tokio::test]
    async fn forced_geo_without_location_reports_it() {
        let server = MockServer::start().await;
        mount_search(&server, "[]").await;

        let err = resolver(&server)
            .with_strategy(StrategySelection::Geo)
            .resolve_route(&student())
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "LOCATION_UNAVAILABLE");
    }
}
