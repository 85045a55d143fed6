use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const MANIFEST: &str = "package.json";

#[derive(Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// First directory, depth-first from `start`, whose listing contains a
/// package.json. The root is visited before any descent, so a manifest in
/// `start` wins immediately. Walk errors (unreadable entries) fail the whole
/// search instead of being skipped.
pub fn find_project_dir(start: &Path) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(start) {
        let entry = entry.with_context(|| format!("walk {}", start.display()))?;
        if entry.file_type().is_dir() && entry.path().join(MANIFEST).is_file() {
            return Ok(Some(entry.path().to_path_buf()));
        }
    }
    Ok(None)
}

/// Best-effort read of the manifest's `name` field, for log output only.
pub fn project_name(dir: &Path) -> Option<String> {
    let b = fs::read(dir.join(MANIFEST)).ok()?;
    let pkg: PackageJson = serde_json::from_slice(&b).ok()?;
    pkg.name
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn manifest_in_start_dir_wins_immediately() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join("package.json"), "{}").unwrap();

        // A nested manifest must not shadow the root one.
        let nested = td.path().join("packages").join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("package.json"), "{}").unwrap();

        let found = find_project_dir(td.path()).unwrap().unwrap();
        assert_eq!(found, td.path());
    }

    #[test]
    fn descends_to_first_nested_manifest() {
        let td = TempDir::new().unwrap();
        let nested = td.path().join("app").join("web");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("package.json"), "{}").unwrap();

        let found = find_project_dir(td.path()).unwrap().unwrap();
        assert_eq!(found, nested);
    }

    #[test]
    fn empty_subtree_yields_none() {
        let td = TempDir::new().unwrap();
        fs::create_dir_all(td.path().join("src").join("deep")).unwrap();

        assert!(find_project_dir(td.path()).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_entry_fails_the_search() {
        use std::os::unix::fs::PermissionsExt;

        let td = TempDir::new().unwrap();
        let locked = td.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Running with privileges that ignore permission bits (root).
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let res = find_project_dir(td.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(res.is_err());
    }

    #[test]
    fn project_name_reads_manifest_name() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join("package.json"), r#"{"name":"demo-app"}"#).unwrap();
        assert_eq!(project_name(td.path()).as_deref(), Some("demo-app"));

        let td = TempDir::new().unwrap();
        fs::write(td.path().join("package.json"), "not json").unwrap();
        assert_eq!(project_name(td.path()), None);
    }
}
