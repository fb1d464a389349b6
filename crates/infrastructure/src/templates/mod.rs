//! HTML templates for the weather page and its fragments
//!
//! Uses the Tera templating engine. Templates are embedded at compile time
//! and auto-escaped, so nothing from an upstream API reaches the page as
//! markup.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let fragment = engine.render_weather(&report)?;
//! println!("{}", fragment.html);
//! ```

use std::sync::Arc;

use application::services::WeatherReport;
use domain::value_objects::TemperatureBand;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Message shown when the forecast has no usable period
pub const MALFORMED_FORECAST_MESSAGE: &str = "Unable to process weather data";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }

    /// Get the inner Tera context
    #[must_use]
    pub fn into_inner(self) -> Context {
        self.inner
    }
}

/// Rendered HTML for the page's output region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    /// Band of the current temperature; `None` for error fragments
    pub band: Option<TemperatureBand>,
}

impl Fragment {
    /// Whether this fragment reports an error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.band.is_none()
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const WEATHER_CARD: &str = r#"<div class="weather-container" data-band="{{ band }}" data-background="{{ background }}">
    <h2 class="city-name">{{ location }}</h2>
    {% if image_url %}<img src="{{ image_url }}" alt="{{ location }} landmark" class="city-image">{% endif %}
    <div class="weather-details">
        <div class="weather-item temperature">
            <span>{{ temperature }}°{{ unit }}</span>
        </div>
        <div class="weather-item conditions">
            <span>{{ short_forecast }}</span>
        </div>
        <div class="weather-item wind">
            <span>{{ wind }}</span>
        </div>
    </div>
    <p class="forecast">{{ detailed_forecast }}</p>
</div>
"#;

    pub const ERROR: &str = r#"<p class="error">Error: {{ message }}</p>
"#;

    pub const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; padding: 2em; transition: background-color 0.5s; }
        .container { max-width: 480px; margin: 0 auto; text-align: center; }
        #weather-info { display: none; margin-top: 1.5em; }
        .city-image { max-width: 100%; border-radius: 8px; }
        .weather-details { display: flex; justify-content: space-around; margin: 1em 0; }
        .temperature span { font-weight: bold; font-size: 1.2em; }
        .error { color: #c0392b; }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{ title }}</h1>
        <input type="text" id="zipcode" placeholder="Enter a US zipcode">
        <button id="lookup" type="button">Get Weather</button>
        <div id="weather-info"></div>
    </div>
    <script>
        async function getWeather() {
            const zipcode = document.getElementById('zipcode').value;
            const output = document.getElementById('weather-info');
            let html;
            try {
                const response = await fetch('/weather?zipcode=' + encodeURIComponent(zipcode));
                html = await response.text();
            } catch (e) {
                html = '<p class="error">Error: Something went wrong</p>';
            }
            output.innerHTML = html;
            output.style.display = 'block';
            const card = output.querySelector('[data-background]');
            if (card) {
                document.body.style.backgroundColor = card.dataset.background;
            }
        }
        document.getElementById('lookup').addEventListener('click', getWeather);
        document.getElementById('zipcode').addEventListener('keydown', (e) => {
            if (e.key === 'Enter') { getWeather(); }
        });
    </script>
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_template("weather/card.html", embedded::WEATHER_CARD)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("weather/error.html", embedded::ERROR)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("page/index.html", embedded::INDEX)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the weather card for the first forecast period
    ///
    /// A forecast without periods yields the error fragment instead.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_weather(&self, report: &WeatherReport) -> Result<Fragment, TemplateError> {
        let Some(period) = report.forecast.current() else {
            debug!(postal_code = %report.postal_code, "Forecast has no periods");
            return self.render_error(MALFORMED_FORECAST_MESSAGE);
        };

        let band = period.band();
        let mut ctx = TemplateContext::new();
        ctx.insert("band", band.as_str());
        ctx.insert("background", band.background_color());
        ctx.insert("location", &report.place.display_name());
        ctx.insert("image_url", &report.image_url);
        ctx.insert("temperature", &period.temperature);
        ctx.insert("unit", &period.temperature_unit);
        ctx.insert("short_forecast", &period.short_forecast);
        ctx.insert("wind", &period.wind());
        ctx.insert("detailed_forecast", &period.detailed_forecast);

        Ok(Fragment {
            html: self.render("weather/card.html", &ctx)?,
            band: Some(band),
        })
    }

    /// Render an error fragment: `<p class="error">Error: {message}</p>`
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_error(&self, message: &str) -> Result<Fragment, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("message", message);

        Ok(Fragment {
            html: self.render("weather/error.html", &ctx)?,
            band: None,
        })
    }

    /// Render the lookup page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_page(&self) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("title", "ZipWeather");
        self.render("page/index.html", &ctx)
    }
}
