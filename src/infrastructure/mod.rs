// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod desktop_notifier;
pub mod http_fetcher;
pub mod open_meteo;
