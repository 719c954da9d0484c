// Application layer - Use cases and the seams between domain and infrastructure
pub mod fetcher;
pub mod notifier;
pub mod retry;
pub mod weather_service;
