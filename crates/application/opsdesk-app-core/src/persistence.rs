use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Local UI preferences. Nothing here is authoritative; the backend owns
/// all business data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiPrefs {
    pub remember_email: bool,
    pub remembered_email: String,
}

pub struct FilePersistence {
    /// Overrides the platform config dir; used by tests.
    base_dir: Option<PathBuf>,
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new()
    }
}

const QUALIFIER: &str = "com";
const ORG: &str = "opsdesk";
const APP: &str = "desk";

impl FilePersistence {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn with_base_dir(dir: PathBuf) -> Self {
        Self {
            base_dir: Some(dir),
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        let dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from(QUALIFIER, ORG, APP)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .config_dir()
                .to_path_buf(),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    fn prefs_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("prefs.json"))
    }

    pub fn load_prefs(&self) -> Result<UiPrefs> {
        let path = self.prefs_path()?;
        if !path.exists() {
            return Ok(UiPrefs::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read preferences")?;
        let prefs: UiPrefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    pub fn save_prefs(&self, prefs: &UiPrefs) -> Result<()> {
        let path = self.prefs_path()?;
        let json = serde_json::to_string_pretty(prefs)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write preferences")?;
        Ok(())
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.to_string_lossy()))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file {}", tmp_path.to_string_lossy()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {}", tmp_path.to_string_lossy()))?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path).with_context(|| {
                format!(
                    "Failed to replace destination file {}",
                    path.to_string_lossy()
                )
            })?;
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Failed to rename temp file {} to {}",
                    tmp_path.to_string_lossy(),
                    path.to_string_lossy()
                )
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::with_base_dir(dir.path().to_path_buf());

        let prefs = UiPrefs {
            remember_email: true,
            remembered_email: "ops@example.com".into(),
        };
        persistence.save_prefs(&prefs).unwrap();

        let loaded = persistence.load_prefs().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn missing_prefs_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::with_base_dir(dir.path().to_path_buf());
        assert_eq!(persistence.load_prefs().unwrap(), UiPrefs::default());
    }
}
