use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for a package report file (16 MB).
/// Reports for very deep dependency trees stay far below this.
pub const MAX_REPORT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a report path is a regular file no larger than `max_size`
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size` bytes
pub fn validate_report_file(path: &Path, max_size: u64) -> Result<()> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read report metadata: {}", e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/report.json");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("report.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "read").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_report_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_report_file(&file_path, MAX_REPORT_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_report_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_report_file(temp_dir.path(), MAX_REPORT_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_report_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_report_file(&file_path, 5);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
