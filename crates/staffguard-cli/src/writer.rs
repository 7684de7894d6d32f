use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Where to write a JSON report. A directory (existing, or given with a
/// trailing separator) gets `pipeline_<timestamp>.json`; anything else is used
/// as the file path, creating missing parents.
pub fn resolve_file_path(path: Option<&str>, timestamp: &str) -> Result<PathBuf> {
    let base_path = path.unwrap_or(".");
    let path = Path::new(base_path);
    let filename = format!("pipeline_{}.json", timestamp);

    if path.is_dir() {
        return Ok(path.join(filename));
    }
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if base_path.ends_with('/') || base_path.ends_with('\\') {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        return Ok(path.join(filename));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(path.to_path_buf())
}

pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_file_path_no_argument_uses_current_dir() {
        let result = resolve_file_path(None, "20251214-153045").unwrap();
        assert_eq!(result.file_name().unwrap(), "pipeline_20251214-153045.json");
        assert!(result.starts_with("."));
    }

    #[test]
    fn test_resolve_file_path_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path_str = temp_dir.path().to_str().unwrap();

        let result = resolve_file_path(Some(path_str), "20251214-153045").unwrap();

        assert_eq!(result.file_name().unwrap(), "pipeline_20251214-153045.json");
        assert!(result.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_resolve_file_path_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("existing.json");
        fs::write(&file_path, "{}").unwrap();

        let result = resolve_file_path(file_path.to_str(), "20251214-153045").unwrap();

        assert_eq!(result, file_path);
    }

    #[test]
    fn test_resolve_file_path_new_directory_with_trailing_slash() {
        let temp_dir = TempDir::new().unwrap();
        let new_dir = temp_dir.path().join("reports/");
        let path_str = new_dir.to_str().unwrap();

        let result = resolve_file_path(Some(path_str), "20251214-153045").unwrap();

        assert!(new_dir.is_dir());
        assert_eq!(result.file_name().unwrap(), "pipeline_20251214-153045.json");
    }

    #[test]
    fn test_resolve_file_path_new_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("subdir/report.json");

        let result = resolve_file_path(file_path.to_str(), "20251214-153045").unwrap();

        assert!(file_path.parent().unwrap().exists());
        assert_eq!(result, file_path);
    }

    #[test]
    fn test_write_report() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");

        write_report(&file_path, "{\"ok\": true}").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{\"ok\": true}");
    }
}
