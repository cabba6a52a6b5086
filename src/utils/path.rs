//! Path utilities: expand ~ and resolve where report files are written.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output directory: CLI override first, then the configured one.
pub fn output_dir(cli_dir: Option<&str>, configured: &str) -> PathBuf {
    expand_tilde(cli_dir.unwrap_or(configured))
}

pub fn output_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
