//! File system utility functions

use anyhow::{Context, Result};
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it if necessary
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_exists_nested_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("level1").join("level2").join("file.json");

        ensure_parent_exists(&file).unwrap();
        assert!(temp_dir.path().join("level1").join("level2").is_dir());
        assert!(!file.exists());
    }

    #[test]
    fn test_ensure_parent_exists_bare_file_name() {
        // No parent component: nothing to create
        ensure_parent_exists(Path::new("file.json")).unwrap();
    }
}
