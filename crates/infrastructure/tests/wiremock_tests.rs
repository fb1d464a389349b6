//! Integration tests for infrastructure adapters
//!
//! Runs the full lookup chain against wiremock servers standing in for
//! Zippopotam, BigDataCloud, NWS and Unsplash, then renders the result.

use std::sync::Arc;

use application::{ApplicationError, LocationImageService, WeatherLookupService};
use infrastructure::{
    GeocodingAdapter, ImageSearchAdapter, ReverseGeocodingAdapter, TemplateEngine, WeatherAdapter,
};
use integration_geocoding::{GeocodingConfig, ReverseGeocodingConfig};
use integration_imagesearch::ImageSearchConfig;
use integration_weather::WeatherConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn postal_body() -> serde_json::Value {
    serde_json::json!({
        "post code": "90210",
        "country": "United States",
        "country abbreviation": "US",
        "places": [{
            "place name": "Beverly Hills",
            "longitude": "-118.4065",
            "state": "California",
            "state abbreviation": "CA",
            "latitude": "34.0901"
        }]
    })
}

fn points_body(server: &MockServer) -> serde_json::Value {
    serde_json::json!({
        "properties": {
            "gridId": "LOX",
            "gridX": 149,
            "gridY": 48,
            "forecast": format!("{}/gridpoints/LOX/149,48/forecast", server.uri()),
            "relativeLocation": {
                "properties": { "city": "Beverly Hills", "state": "CA" }
            }
        }
    })
}

fn forecast_body(temperature: i32) -> serde_json::Value {
    serde_json::json!({
        "properties": {
            "updated": "2024-06-01T14:00:00+00:00",
            "periods": [{
                "number": 1,
                "name": "This Afternoon",
                "startTime": "2024-06-01T14:00:00-07:00",
                "endTime": "2024-06-01T18:00:00-07:00",
                "isDaytime": true,
                "temperature": temperature,
                "temperatureUnit": "F",
                "windSpeed": "10 mph",
                "windDirection": "SW",
                "shortForecast": "Sunny",
                "detailedForecast": "Sunny, with a high near 82."
            }]
        }
    })
}

/// Build a lookup service whose adapters all point at `server`
///
/// # Panics
///
/// Panics if an adapter cannot be created.
#[allow(clippy::expect_used)]
fn create_test_service(server: &MockServer, with_images: bool) -> WeatherLookupService {
    let geocoding = GeocodingAdapter::with_config(&GeocodingConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("geocoding adapter");
    let reverse = ReverseGeocodingAdapter::with_config(&ReverseGeocodingConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("reverse geocoding adapter");
    let weather = WeatherAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("weather adapter");

    let service = WeatherLookupService::new(Arc::new(geocoding), Arc::new(weather))
        .with_reverse_geocoding(Arc::new(reverse));

    if with_images {
        let images = ImageSearchAdapter::new(&ImageSearchConfig {
            access_key: Some("test-access-key".to_string()),
            base_url: server.uri(),
            ..Default::default()
        })
        .expect("image adapter");
        service.with_images(LocationImageService::new(Arc::new(images)))
    } else {
        service
    }
}

async fn mount_geocoding(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/us/90210"))
        .respond_with(ResponseTemplate::new(200).set_body_json(postal_body()))
        .mount(server)
        .await;
}

async fn mount_weather(server: &MockServer, temperature: i32) {
    Mock::given(method("GET"))
        .and(path("/points/34.0901,-118.4065"))
        .respond_with(ResponseTemplate::new(200).set_body_json(points_body(server)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/LOX/149,48/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(temperature)))
        .mount(server)
        .await;
}

async fn mount_reverse_geocoding(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/data/reverse-geocode-client"))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "city": "Los Angeles",
            "principalSubdivision": "California",
            "countryCode": "US"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_chain_renders_weather_card() {
    let server = MockServer::start().await;
    mount_geocoding(&server).await;
    mount_reverse_geocoding(&server, 200).await;
    mount_weather(&server, 82).await;

    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .and(query_param("query", "Los Angeles, California landmark"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "abc",
            "urls": {
                "regular": "https://images.unsplash.com/photo-abc?w=1080",
                "small": "https://images.unsplash.com/photo-abc?w=400"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = create_test_service(&server, true);
    let report = service.lookup("90210").await.unwrap();

    assert_eq!(report.place.display_name(), "Los Angeles, California");
    assert_eq!(report.forecast.periods.len(), 1);
    assert!(report.image_url.is_some());

    let engine = TemplateEngine::new().unwrap();
    let fragment = engine.render_weather(&report).unwrap();
    assert!(fragment.html.contains("Los Angeles, California"));
    assert!(!fragment.html.contains("Beverly Hills"));
    assert!(fragment.html.contains("82°F"));
    assert!(fragment.html.contains("10 mph SW"));
    assert!(fragment.html.contains("<img"));
    assert!(fragment.html.contains("data-band=\"hot\""));
}

#[tokio::test]
async fn unknown_postal_code_is_invalid_location() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/00000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/points/34.0901,-118.4065"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = create_test_service(&server, false);
    let err = service.lookup("00000").await.unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidLocation(_)));
    assert_eq!(err.user_message(), "Invalid zipcode");
}

#[tokio::test]
async fn geocoding_outage_is_upstream_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/90210"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = create_test_service(&server, false);
    let err = service.lookup("90210").await.unwrap_err();

    assert!(matches!(err, ApplicationError::LocationServiceUnavailable(_)));
    assert!(err.is_upstream());
    assert_eq!(err.user_message(), "Invalid zipcode");
}

#[tokio::test]
async fn reverse_geocoding_failure_keeps_default_place() {
    let server = MockServer::start().await;
    mount_geocoding(&server).await;
    mount_reverse_geocoding(&server, 500).await;
    mount_weather(&server, 60).await;

    let service = create_test_service(&server, false);
    let report = service.lookup("90210").await.unwrap();

    assert_eq!(report.place.display_name(), "Beverly Hills, California");
    assert!(report.image_url.is_none());
}

#[tokio::test]
async fn points_failure_is_weather_unavailable() {
    let server = MockServer::start().await;
    mount_geocoding(&server).await;
    mount_reverse_geocoding(&server, 200).await;

    Mock::given(method("GET"))
        .and(path("/points/34.0901,-118.4065"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = create_test_service(&server, false);
    let err = service.lookup("90210").await.unwrap_err();

    assert!(matches!(err, ApplicationError::WeatherUnavailable(_)));
    assert_eq!(err.user_message(), "Unable to fetch weather data");
}

#[tokio::test]
async fn forecast_failure_is_forecast_unavailable() {
    let server = MockServer::start().await;
    mount_geocoding(&server).await;
    mount_reverse_geocoding(&server, 200).await;

    Mock::given(method("GET"))
        .and(path("/points/34.0901,-118.4065"))
        .respond_with(ResponseTemplate::new(200).set_body_json(points_body(&server)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/LOX/149,48/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = create_test_service(&server, false);
    let err = service.lookup("90210").await.unwrap_err();

    assert!(matches!(err, ApplicationError::ForecastUnavailable(_)));
    assert_eq!(err.user_message(), "Unable to fetch forecast data");
}

#[tokio::test]
async fn image_failure_still_renders_card() {
    let server = MockServer::start().await;
    mount_geocoding(&server).await;
    mount_reverse_geocoding(&server, 200).await;
    mount_weather(&server, 50).await;

    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let service = create_test_service(&server, true);
    let report = service.lookup("90210").await.unwrap();
    assert!(report.image_url.is_none());

    let engine = TemplateEngine::new().unwrap();
    let fragment = engine.render_weather(&report).unwrap();
    assert!(!fragment.html.contains("<img"));
    assert!(fragment.html.contains("Sunny"));
    assert!(fragment.html.contains("data-band=\"cold\""));
}

#[tokio::test]
async fn empty_periods_render_data_shape_error() {
    let server = MockServer::start().await;
    mount_geocoding(&server).await;
    mount_reverse_geocoding(&server, 200).await;

    Mock::given(method("GET"))
        .and(path("/points/34.0901,-118.4065"))
        .respond_with(ResponseTemplate::new(200).set_body_json(points_body(&server)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/LOX/149,48/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": { "periods": [] }
        })))
        .mount(&server)
        .await;

    let service = create_test_service(&server, false);
    let report = service.lookup("90210").await.unwrap();

    let engine = TemplateEngine::new().unwrap();
    let fragment = engine.render_weather(&report).unwrap();
    assert!(fragment.is_error());
    assert!(fragment.html.contains("Error: Unable to process weather data"));
}
