/// Network adapters for the scoring API
mod api_client;

pub use api_client::{ApiReportClient, DEFAULT_API_URL};
