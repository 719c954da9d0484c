// Configuration loading - runtime settings and the monitored location list
use serde::Deserialize;

/// A monitored location. Field contents are opaque to the rest of the
/// program; they are only embedded into provider URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
    pub name: String,
    #[serde(rename = "cityID")]
    pub city_id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationsConfig {
    locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub notify: NotifySettings,
}

/// Retry and deadline settings. Defaults match the reference behavior:
/// 2 retries, 1s initial backoff doubling up to 10s, jitter under 1s,
/// and a 15s deadline over the whole batch.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
    #[serde(default = "default_run_deadline_secs")]
    pub run_deadline_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifySettings {
    #[serde(default = "default_app_id")]
    pub app_id: String,
    #[serde(default = "default_icon_dir")]
    pub icon_dir: String,
}

fn default_max_retries() -> u32 {
    2
}

fn default_initial_backoff_ms() -> u64 {
    1_000
}

fn default_max_backoff_ms() -> u64 {
    10_000
}

fn default_jitter_ms() -> u64 {
    1_000
}

fn default_run_deadline_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_app_id() -> String {
    "rain-alert".to_string()
}

fn default_icon_dir() -> String {
    "assets/icons".to_string()
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            jitter_ms: default_jitter_ms(),
            run_deadline_secs: default_run_deadline_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            icon_dir: default_icon_dir(),
        }
    }
}

/// Load settings overrides. The file is optional; every field has a default.
pub fn load_settings() -> anyhow::Result<AppSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/settings").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load the monitored location list. A missing or unparseable locations
/// file is a setup failure and aborts the run.
pub fn load_locations() -> anyhow::Result<Vec<Location>> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/locations"))
        .build()?;

    let parsed: LocationsConfig = settings.try_deserialize()?;
    Ok(parsed.locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_to_reference_values() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings.fetch.max_retries, 2);
        assert_eq!(settings.fetch.initial_backoff_ms, 1_000);
        assert_eq!(settings.fetch.max_backoff_ms, 10_000);
        assert_eq!(settings.fetch.jitter_ms, 1_000);
        assert_eq!(settings.fetch.run_deadline_secs, 15);
        assert_eq!(settings.notify.app_id, "rain-alert");
    }

    #[test]
    fn test_partial_settings_keep_remaining_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"fetch": {"max_retries": 5}}"#).unwrap();

        assert_eq!(settings.fetch.max_retries, 5);
        assert_eq!(settings.fetch.run_deadline_secs, 15);
    }

    #[test]
    fn test_location_uses_provider_field_names() {
        let location: Location = serde_json::from_str(
            r#"{"latitude": "40.64", "longitude": "22.94", "name": "thessaloniki", "cityID": "182349"}"#,
        )
        .unwrap();

        assert_eq!(location.city_id, "182349");
        assert_eq!(location.name, "thessaloniki");
    }
}
