//! Weather lookup handlers
//!
//! `/weather` answers the page with an HTML fragment and always returns
//! 200 so the page can swap the result in. `/v1/weather/{zipcode}` is the
//! JSON equivalent and uses HTTP status codes for failures.

use application::WeatherReport;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use domain::value_objects::TemperatureBand;
use infrastructure::Fragment;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Fallback when even the error template cannot be rendered
const RENDER_FAILURE_HTML: &str = "<p class=\"error\">Error: Something went wrong</p>";

/// Query parameters for the fragment endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub zipcode: String,
}

/// JSON lookup response
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    /// Location heading, e.g. "Beverly Hills, California"
    pub display_name: String,
    /// Band of the current period, absent when there are no periods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<TemperatureBand>,
    #[serde(flatten)]
    pub report: WeatherReport,
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            display_name: report.place.display_name(),
            band: report.forecast.current().map(|p| p.band()),
            report,
        }
    }
}

/// Look up weather and render the card or error fragment
#[instrument(skip_all, fields(zipcode = %query.zipcode))]
pub async fn weather_fragment(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Html<String> {
    let rendered = match state.lookup.lookup(&query.zipcode).await {
        Ok(report) => state.templates.render_weather(&report),
        Err(e) => {
            warn!(error = %e, "Weather lookup failed");
            state.templates.render_error(e.user_message())
        },
    };

    match rendered {
        Ok(Fragment { html, band }) => {
            info!(band = ?band, "Rendered weather fragment");
            Html(html)
        },
        Err(e) => {
            error!(error = %e, "Failed to render weather fragment");
            Html(RENDER_FAILURE_HTML.to_string())
        },
    }
}

/// Look up weather as JSON
#[instrument(skip(state))]
pub async fn weather_json(
    State(state): State<AppState>,
    Path(zipcode): Path<String>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let report = state.lookup.lookup(&zipcode).await?;
    Ok(Json(report.into()))
}
