use depscore::prelude::*;

/// Mock ReportProvider serving a JSON document through the real wire parser,
/// or failing with a fixed error
pub struct MockReportProvider {
    json: Option<String>,
    error: Option<fn() -> ScoreError>,
}

impl MockReportProvider {
    pub fn from_json(json: &str) -> Self {
        Self {
            json: Some(json.to_string()),
            error: None,
        }
    }

    pub fn failing(error: fn() -> ScoreError) -> Self {
        Self {
            json: None,
            error: Some(error),
        }
    }
}

impl ReportProvider for MockReportProvider {
    fn source_description(&self) -> String {
        "mock://package-report".to_string()
    }

    fn load_report(&self) -> Result<PackageReport> {
        if let Some(error) = self.error {
            return Err(error().into());
        }
        parse_package_report(self.json.as_deref().unwrap_or("{}"), &self.source_description())
    }
}
