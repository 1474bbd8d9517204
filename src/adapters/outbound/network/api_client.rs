use crate::adapters::outbound::wire_format::parse_package_report;
use crate::package_scoring::domain::{Package, PackageReport};
use crate::ports::outbound::ReportProvider;
use crate::shared::error::ScoreError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Default base URL of the dependency observatory API
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// ApiReportClient adapter for fetching a package report over HTTP
///
/// Issues exactly one `GET /api/v1/package` request per load.
///
/// # Status handling
/// - 200: report body is parsed
/// - 202: a scan is still running, reported as [`ScoreError::ReportPending`]
/// - 404: [`ScoreError::ReportNotFound`]
/// - anything else: [`ScoreError::ApiError`]
pub struct ApiReportClient {
    client: Client,
    api_url: String,
    package: Package,
}

impl ApiReportClient {
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new(api_url: impl Into<String>, package: Package) -> Result<Self> {
        let user_agent = format!("depscore/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            package,
        })
    }

    /// Builds the report URL; scoped names are percent-encoded (`@` and `/`)
    pub fn report_url(api_url: &str, package: &Package) -> String {
        format!(
            "{}/api/v1/package?package_name={}&package_version={}",
            api_url.trim_end_matches('/'),
            urlencoding::encode(package.name()),
            urlencoding::encode(package.version())
        )
    }

    fn status_error(&self, status: StatusCode, body: String) -> ScoreError {
        match status {
            StatusCode::ACCEPTED => ScoreError::ReportPending {
                package: self.package.name().to_string(),
                version: self.package.version().to_string(),
            },
            StatusCode::NOT_FOUND => ScoreError::ReportNotFound {
                package: self.package.name().to_string(),
                version: self.package.version().to_string(),
            },
            other => ScoreError::ApiError {
                status: other.as_u16(),
                details: body,
            },
        }
    }
}

impl ReportProvider for ApiReportClient {
    fn source_description(&self) -> String {
        Self::report_url(&self.api_url, &self.package)
    }

    fn load_report(&self) -> Result<PackageReport> {
        let url = self.source_description();
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach scoring API at {}", url))?;

        let status = response.status();
        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if status != StatusCode::OK {
            return Err(self.status_error(status, body).into());
        }

        parse_package_report(&body, &url)
    }
}
