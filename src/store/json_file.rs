//! JSON file profile store.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{UserProfile, validate_user_id};

use super::ProfileStore;

/// Stores each profile as `<dir>/<user_id>.json`.
///
/// Writes go to a temporary file that is renamed over the target, so a
/// reader never sees a half-written profile. Profiles read back are
/// validated before they are handed out.
///
/// All I/O is blocking. The HTTP layer runs planner calls on tokio's
/// blocking pool, so the store is never driven from an async worker.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| EngineError::Storage {
            message: format!("cannot create {}: {}", dir.display(), e),
        })?;
        Ok(Self { dir })
    }

    /// The directory profiles are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, user_id: &str) -> EngineResult<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self.dir.join(format!("{}.json", user_id)))
    }
}

fn encode(profile: &UserProfile) -> EngineResult<Vec<u8>> {
    serde_json::to_vec_pretty(profile).map_err(|e| EngineError::Storage {
        message: format!("cannot serialize profile '{}': {}", profile.id, e),
    })
}

impl ProfileStore for JsonFileStore {
    fn load(&self, user_id: &str) -> EngineResult<Option<UserProfile>> {
        let path = self.path_for(user_id)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(EngineError::Storage {
                    message: format!("cannot read {}: {}", path.display(), e),
                });
            }
        };

        let profile: UserProfile =
            serde_json::from_str(&content).map_err(|e| EngineError::Storage {
                message: format!("cannot parse {}: {}", path.display(), e),
            })?;
        profile.validate()?;
        Ok(Some(profile))
    }

    fn save(&self, profile: &UserProfile) -> EngineResult<()> {
        let path = self.path_for(&profile.id)?;
        let tmp = path.with_extension("json.tmp");

        let body = encode(profile)?;
        fs::write(&tmp, body).map_err(|e| EngineError::Storage {
            message: format!("cannot write {}: {}", tmp.display(), e),
        })?;
        fs::rename(&tmp, &path).map_err(|e| EngineError::Storage {
            message: format!("cannot replace {}: {}", path.display(), e),
        })?;

        debug!(user_id = %profile.id, path = %path.display(), "Profile saved");
        Ok(())
    }

    fn insert_new(&self, profile: &UserProfile) -> EngineResult<()> {
        let path = self.path_for(&profile.id)?;
        let body = encode(profile)?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(EngineError::ProfileExists {
                    user_id: profile.id.clone(),
                });
            }
            Err(e) => {
                return Err(EngineError::Storage {
                    message: format!("cannot create {}: {}", path.display(), e),
                });
            }
        };
        file.write_all(&body)
            .and_then(|_| file.sync_all())
            .map_err(|e| EngineError::Storage {
                message: format!("cannot write {}: {}", path.display(), e),
            })?;

        debug!(user_id = %profile.id, path = %path.display(), "Profile created");
        Ok(())
    }
}
