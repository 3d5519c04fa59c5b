//! The application configuration bundle.

use super::environment::DeploymentMode;

const API_BASE_URL_DEV: &str = "http://localhost:8000";
const API_BASE_URL_PROD: &str = "https://api.your-travel-record.com";

// Mapbox public token. Hard-coded upstream with no deploy-time override;
// kept that way on purpose (see DESIGN.md) rather than silently "fixed".
const MAPBOX_ACCESS_TOKEN: &str =
    "pk.eyJ1IjoieXVhbmNoZW5nY2hlbiIsImEiOiJjbHJhZGY2MjQwMnBnMmtueXE2NmZwMmZ5In0.YxjpIXCG-nVcuuGrGj_Jrw";

/// Geocoding parameters for the map provider's place search.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GeocodingConfig {
    pub endpoint: String,
    /// Feature types requested from the geocoder.
    pub place_types: Vec<String>,
    /// ISO 3166-1 country filter.
    pub country: String,
    /// Maximum number of results per query.
    pub limit: u32,
}

/// Map provider settings (Mapbox).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MapConfig {
    pub access_token: String,
    /// Initial viewport center as (longitude, latitude). Taipei city center.
    pub default_center: (f64, f64),
    pub default_zoom: f64,
    /// Style identifier understood by the provider.
    pub style: String,
    /// Label language for map tiles and geocoding results.
    pub language: String,
    pub geocoding: GeocodingConfig,
}

/// Limits applied to travel record uploads and listing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RecordConfig {
    /// Maximum accepted photo size in bytes.
    pub max_photo_bytes: u64,
    /// MIME types accepted for photo uploads.
    pub allowed_photo_types: Vec<String>,
    pub records_per_page: u32,
}

/// Presentation constants shared by the views.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UiConfig {
    pub date_format: String,
    pub map_popup_width: u32,
    pub map_popup_height: u32,
}

/// The frozen configuration bundle for one process lifetime.
///
/// Built exactly once at startup from a snapshot of the environment and
/// handed to every consumer (views, the API client, the map component, the
/// upload handler). Only [`api_base_url`](Self::api_base_url) depends on the
/// environment; everything else is a fixed literal.
///
/// | `NODE_ENV` | `api_base_url` |
/// |------------|----------------|
/// | `development` | `http://localhost:8000` |
/// | anything else (or unset) | `https://api.your-travel-record.com` |
///
/// # Example
///
/// ```rust
/// use travel_record_core::AppConfig;
///
/// let config = AppConfig::from_env();
/// let places_url = format!(
///     "{}?limit={}",
///     config.map.geocoding.endpoint, config.map.geocoding.limit,
/// );
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AppConfig {
    pub mode: DeploymentMode,
    /// Backend API origin. The only environment-dependent field.
    pub api_base_url: String,
    pub map: MapConfig,
    pub record: RecordConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Build the bundle from a snapshot of the process environment.
    ///
    /// Changing `NODE_ENV` afterwards has no effect on an existing bundle;
    /// a different endpoint requires a process restart.
    pub fn from_env() -> Self {
        Self::for_mode(DeploymentMode::from_env())
    }

    /// Build the bundle for an explicit deployment mode.
    ///
    /// Deterministic: the same mode always yields the same bundle. If the
    /// map access token is empty a diagnostic is logged and the bundle is
    /// returned anyway; map features fail at their own call sites.
    pub fn for_mode(mode: DeploymentMode) -> Self {
        let config = Self {
            mode,
            api_base_url: match mode {
                DeploymentMode::Development => API_BASE_URL_DEV.to_string(),
                DeploymentMode::Production => API_BASE_URL_PROD.to_string(),
            },
            map: MapConfig {
                access_token: MAPBOX_ACCESS_TOKEN.to_string(),
                default_center: (121.5654, 25.0330),
                default_zoom: 13.0,
                style: "mapbox://styles/mapbox/streets-v12".to_string(),
                language: "zh-TW".to_string(),
                geocoding: GeocodingConfig {
                    endpoint: "https://api.mapbox.com/geocoding/v5/mapbox.places".to_string(),
                    place_types: vec![
                        "place".to_string(),
                        "address".to_string(),
                        "poi".to_string(),
                    ],
                    country: "TW".to_string(),
                    limit: 5,
                },
            },
            record: RecordConfig {
                max_photo_bytes: 5 * 1024 * 1024,
                allowed_photo_types: vec![
                    "image/jpeg".to_string(),
                    "image/png".to_string(),
                    "image/webp".to_string(),
                ],
                records_per_page: 10,
            },
            ui: UiConfig {
                date_format: "YYYY-MM-DD HH:mm".to_string(),
                map_popup_width: 300,
                map_popup_height: 200,
            },
        };
        config.warn_on_missing_token();
        config
    }

    /// Check whether the process runs against the local backend.
    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    // Advisory only: startup continues without a token, the map component
    // reports its own failures when it tries to use one.
    fn warn_on_missing_token(&self) {
        if self.map.access_token.is_empty() {
            tracing::error!("Mapbox access token is not set");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_mode_uses_local_api() {
        let config = AppConfig::for_mode(DeploymentMode::Development);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.is_development());
    }

    #[test]
    fn production_mode_uses_public_api() {
        let config = AppConfig::for_mode(DeploymentMode::Production);
        assert_eq!(config.api_base_url, "https://api.your-travel-record.com");
        assert!(!config.is_development());
    }

    // The only test in this binary that touches the environment. Tests run
    // in parallel threads, so any future test reading NODE_ENV (e.g. via
    // from_env) must be folded into this one or serialized with it.
    #[test]
    fn non_development_env_values_fall_back_to_production() {
        for value in ["Development", "dev", "DEVELOPMENT", "production", ""] {
            std::env::set_var("NODE_ENV", value);
            assert_eq!(DeploymentMode::from_env(), DeploymentMode::Production);
        }
        std::env::remove_var("NODE_ENV");
        assert_eq!(DeploymentMode::from_env(), DeploymentMode::Production);

        std::env::set_var("NODE_ENV", "development");
        assert_eq!(DeploymentMode::from_env(), DeploymentMode::Development);
        std::env::remove_var("NODE_ENV");
    }

    #[test]
    fn constants_do_not_depend_on_mode() {
        let dev = AppConfig::for_mode(DeploymentMode::Development);
        let prod = AppConfig::for_mode(DeploymentMode::Production);
        assert_eq!(dev.map, prod.map);
        assert_eq!(dev.record, prod.record);
        assert_eq!(dev.ui, prod.ui);
    }

    #[test]
    fn map_constants() {
        let config = AppConfig::for_mode(DeploymentMode::Production);
        assert_eq!(config.map.default_center, (121.5654, 25.0330));
        assert_eq!(config.map.default_zoom, 13.0);
        assert_eq!(config.map.style, "mapbox://styles/mapbox/streets-v12");
        assert_eq!(config.map.language, "zh-TW");
        assert_eq!(
            config.map.geocoding.endpoint,
            "https://api.mapbox.com/geocoding/v5/mapbox.places"
        );
        assert_eq!(config.map.geocoding.place_types, ["place", "address", "poi"]);
        assert_eq!(config.map.geocoding.country, "TW");
        assert_eq!(config.map.geocoding.limit, 5);
    }

    #[test]
    fn record_and_ui_constants() {
        let config = AppConfig::for_mode(DeploymentMode::Production);
        assert_eq!(config.record.max_photo_bytes, 5 * 1024 * 1024);
        assert_eq!(
            config.record.allowed_photo_types,
            ["image/jpeg", "image/png", "image/webp"]
        );
        assert_eq!(config.record.records_per_page, 10);
        assert_eq!(config.ui.date_format, "YYYY-MM-DD HH:mm");
        assert_eq!(config.ui.map_popup_width, 300);
        assert_eq!(config.ui.map_popup_height, 200);
    }

    #[test]
    fn empty_token_emits_diagnostic_but_stays_advisory() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
            type Writer = Capture;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();

        let mut config = AppConfig::for_mode(DeploymentMode::Production);
        config.map.access_token.clear();
        tracing::subscriber::with_default(subscriber, || {
            config.warn_on_missing_token();
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Mapbox access token is not set"));
        // Advisory only: the bundle stays usable.
        assert_eq!(config.map.default_zoom, 13.0);
    }

    #[test]
    fn serializes_to_json_for_downstream_consumers() {
        let config = AppConfig::for_mode(DeploymentMode::Development);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["mode"], "development");
        assert_eq!(value["api_base_url"], "http://localhost:8000");
        assert_eq!(value["map"]["geocoding"]["limit"], 5);
        assert_eq!(value["record"]["records_per_page"], 10);
    }
}
