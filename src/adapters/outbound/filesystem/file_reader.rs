use crate::adapters::outbound::wire_format::parse_package_report;
use crate::package_scoring::domain::PackageReport;
use crate::ports::outbound::ReportProvider;
use crate::shared::error::ScoreError;
use crate::shared::security::{validate_report_file, MAX_REPORT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// FileSystemReader adapter for loading a saved package report
///
/// Reads the JSON previously returned by `/api/v1/package`, e.g. one stored
/// with `curl ... > report.json`.
pub struct FileSystemReader {
    path: PathBuf,
}

impl FileSystemReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_report_file(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(ScoreError::FileReadError {
                path: self.path.clone(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        validate_report_file(&self.path, MAX_REPORT_FILE_SIZE).map_err(|e| {
            ScoreError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        fs::read_to_string(&self.path).map_err(|e| {
            ScoreError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ReportProvider for FileSystemReader {
    fn source_description(&self) -> String {
        self.path.display().to_string()
    }

    fn load_report(&self) -> Result<PackageReport> {
        let content = self.read_report_file()?;
        parse_package_report(&content, &self.source_description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_report_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::write(
            &path,
            r#"{"package":"lodash","version":"4.17.21","npmsio_score":0.9,"all_deps":0}"#,
        )
        .unwrap();

        let reader = FileSystemReader::new(path);
        let report = reader.load_report().unwrap();
        assert_eq!(report.package().to_string(), "lodash@4.17.21");
        assert_eq!(report.score_input().freshness_score(), 0.9);
    }

    #[test]
    fn test_load_report_missing_file() {
        let reader = FileSystemReader::new(PathBuf::from("/nonexistent/report.json"));
        let err = reader.load_report().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScoreError>(),
            Some(ScoreError::FileReadError { .. })
        ));
        assert!(err.to_string().contains("File does not exist"));
    }

    #[test]
    fn test_load_report_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new(temp_dir.path().to_path_buf());
        let err = reader.load_report().unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_load_report_invalid_json_names_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = FileSystemReader::new(path).load_report().unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_report_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, r#"{"package":"a","version":"1.0.0"}"#).unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new(link).load_report().unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
