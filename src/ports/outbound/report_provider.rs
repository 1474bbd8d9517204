use crate::package_scoring::domain::PackageReport;
use crate::shared::Result;

/// ReportProvider port for obtaining a package report
///
/// Implementations own the wire format: whatever key spellings the backend
/// emits are normalized into a [`PackageReport`] before it reaches the core.
pub trait ReportProvider {
    /// Human-readable description of where the report comes from
    /// (a file path or an API URL), used in progress messages
    fn source_description(&self) -> String;

    /// Loads and normalizes the package report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report cannot be read or fetched
    /// - The report is not valid JSON or lacks package/version
    /// - A vulnerability or dependency count is negative
    fn load_report(&self) -> Result<PackageReport>;
}
