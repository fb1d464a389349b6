//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    LocationImageService, WeatherLookupService,
    error::ApplicationError,
    ports::{GeocodeResult, GeocodingPort, ImageSearchPort, WeatherPoint, WeatherPort},
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::{
    entities::{Forecast, ForecastPeriod},
    value_objects::{GeoLocation, PostalCode},
};
use infrastructure::TemplateEngine;
use presentation_http::{error::ErrorResponse, routes::create_router, state::AppState};

/// Geocoder that only knows 90210 and cannot be reached for 99999
struct StubGeocoding;

#[async_trait]
impl GeocodingPort for StubGeocoding {
    async fn geocode(&self, postal_code: &PostalCode) -> Result<GeocodeResult, ApplicationError> {
        if postal_code.as_str() == "90210" {
            Ok(GeocodeResult {
                location: GeoLocation::new(34.0901, -118.4065).expect("valid coordinates"),
                place_name: "Beverly Hills".to_string(),
                state: Some("California".to_string()),
            })
        } else if postal_code.as_str() == "99999" {
            Err(ApplicationError::LocationServiceUnavailable(
                "Connection failed: connection refused".to_string(),
            ))
        } else {
            Err(ApplicationError::InvalidLocation("HTTP 404".to_string()))
        }
    }
}

/// Weather provider with a fixed outcome
enum StubWeather {
    Periods(Vec<ForecastPeriod>),
    PointFails,
    ForecastFails,
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn get_point(&self, _location: &GeoLocation) -> Result<WeatherPoint, ApplicationError> {
        if matches!(self, Self::PointFails) {
            return Err(ApplicationError::WeatherUnavailable("HTTP 503".to_string()));
        }
        Ok(WeatherPoint {
            forecast_url: "https://api.weather.gov/gridpoints/LOX/149,48/forecast".to_string(),
            forecast_hourly_url: None,
            grid_id: Some("LOX".to_string()),
            city: None,
            state: None,
        })
    }

    async fn get_forecast(&self, _point: &WeatherPoint) -> Result<Forecast, ApplicationError> {
        match self {
            Self::Periods(periods) => Ok(Forecast {
                updated: None,
                periods: periods.clone(),
            }),
            Self::ForecastFails => Err(ApplicationError::ForecastUnavailable(
                "HTTP 500".to_string(),
            )),
            Self::PointFails => unreachable!("point lookup fails first"),
        }
    }
}

/// Image search that counts calls and returns a fixed URL or fails
struct StubImages {
    url: Option<String>,
    calls: AtomicUsize,
}

#[async_trait]
impl ImageSearchPort for StubImages {
    async fn random_photo(&self, _query: &str) -> Result<String, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.url
            .clone()
            .ok_or_else(|| ApplicationError::Internal("HTTP 401".to_string()))
    }
}

fn period(temperature: i32) -> ForecastPeriod {
    ForecastPeriod {
        number: 1,
        name: "This Afternoon".to_string(),
        start_time: None,
        end_time: None,
        is_daytime: true,
        temperature,
        temperature_unit: "F".to_string(),
        wind_speed: "10 mph".to_string(),
        wind_direction: "SW".to_string(),
        short_forecast: "Sunny".to_string(),
        detailed_forecast: "Sunny, with a high near 82.".to_string(),
        icon: None,
    }
}

fn create_test_server(weather: StubWeather, images: Option<Arc<StubImages>>) -> TestServer {
    let mut lookup = WeatherLookupService::new(Arc::new(StubGeocoding), Arc::new(weather));
    if let Some(images) = images {
        lookup = lookup.with_images(LocationImageService::new(images));
    }

    let templates = TemplateEngine::new().expect("templates compile");
    let router = create_router(AppState::new(lookup, templates));
    TestServer::new(router).expect("Failed to create test server")
}

fn images(url: Option<&str>) -> Arc<StubImages> {
    Arc::new(StubImages {
        url: url.map(String::from),
        calls: AtomicUsize::new(0),
    })
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn index_serves_page() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("id=\"zipcode\""));
    assert!(html.contains("id=\"weather-info\""));
}

#[tokio::test]
async fn fragment_renders_weather_card() {
    let photos = images(Some("https://images.unsplash.com/photo-1"));
    let server = create_test_server(
        StubWeather::Periods(vec![period(82)]),
        Some(Arc::clone(&photos)),
    );

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "90210")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Beverly Hills, California"));
    assert!(html.contains("82°F"));
    assert!(html.contains("Sunny"));
    assert!(html.contains("10 mph SW"));
    assert!(html.contains("Sunny, with a high near 82."));
    assert!(html.contains("<img"));
    assert!(html.contains("data-band=\"hot\""));
    assert!(!html.contains("class=\"error\""));
    assert_eq!(photos.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fragment_for_unknown_zipcode_shows_error() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "00000")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(html.trim(), "<p class=\"error\">Error: Invalid zipcode</p>");
    assert!(!html.contains("weather-container"));
}

#[tokio::test]
async fn fragment_without_zipcode_shows_error() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server.get("/weather").await;

    response.assert_status_ok();
    assert!(response.text().contains("Error: Invalid zipcode"));
}

#[tokio::test]
async fn fragment_reports_weather_failure() {
    let server = create_test_server(StubWeather::PointFails, None);

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "90210")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Error: Unable to fetch weather data"));
}

#[tokio::test]
async fn fragment_reports_forecast_failure() {
    let server = create_test_server(StubWeather::ForecastFails, None);

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "90210")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Error: Unable to fetch forecast data"));
}

#[tokio::test]
async fn fragment_with_empty_forecast_shows_data_error() {
    let server = create_test_server(StubWeather::Periods(Vec::new()), None);

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "90210")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Error: Unable to process weather data"));
}

#[tokio::test]
async fn fragment_without_image_omits_img() {
    let photos = images(None);
    let server = create_test_server(
        StubWeather::Periods(vec![period(60)]),
        Some(Arc::clone(&photos)),
    );

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "90210")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("<img"));
    assert!(html.contains("Sunny"));
    assert!(html.contains("data-band=\"mild\""));
    assert_eq!(photos.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn success_after_failure_has_no_error_text() {
    let server = create_test_server(StubWeather::Periods(vec![period(40)]), None);

    let failed = server
        .get("/weather")
        .add_query_param("zipcode", "00000")
        .await;
    assert!(failed.text().contains("Error:"));

    let ok = server
        .get("/weather")
        .add_query_param("zipcode", "90210")
        .await;
    let html = ok.text();
    assert!(!html.contains("Error:"));
    assert!(html.contains("data-band=\"cold\""));
}

#[tokio::test]
async fn json_lookup_returns_report() {
    let server = create_test_server(StubWeather::Periods(vec![period(75)]), None);

    let response = server.get("/v1/weather/90210").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["display_name"], "Beverly Hills, California");
    assert_eq!(body["band"], "mild");
    assert_eq!(body["postal_code"], "90210");
    assert_eq!(body["forecast"]["periods"][0]["temperature"], 75);
    assert!(body.get("image_url").is_none());
}

#[tokio::test]
async fn json_unknown_zipcode_is_bad_request() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server.get("/v1/weather/00000").await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "invalid_location");
    assert_eq!(body.error, "Invalid zipcode");
}

#[tokio::test]
async fn json_upstream_failure_is_bad_gateway() {
    let server = create_test_server(StubWeather::PointFails, None);

    let response = server.get("/v1/weather/90210").await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "upstream_unavailable");
    assert_eq!(body.error, "Unable to fetch weather data");
}

#[tokio::test]
async fn json_geocoding_outage_is_bad_gateway() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server.get("/v1/weather/99999").await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "upstream_unavailable");
}

#[tokio::test]
async fn fragment_for_geocoding_outage_shows_invalid_zipcode() {
    let server = create_test_server(StubWeather::Periods(vec![period(70)]), None);

    let response = server
        .get("/weather")
        .add_query_param("zipcode", "99999")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Error: Invalid zipcode"));
}
