//! In-memory profile store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::UserProfile;

use super::ProfileStore;

/// Keeps profiles in a map for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        message: "profile map lock poisoned".to_string(),
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, user_id: &str) -> EngineResult<Option<UserProfile>> {
        let profiles = self.profiles.read().map_err(|_| poisoned())?;
        Ok(profiles.get(user_id).cloned())
    }

    fn save(&self, profile: &UserProfile) -> EngineResult<()> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    fn insert_new(&self, profile: &UserProfile) -> EngineResult<()> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        match profiles.entry(profile.id.clone()) {
            Entry::Occupied(_) => Err(EngineError::ProfileExists {
                user_id: profile.id.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("nobody").unwrap(), None);
        assert!(!store.exists("nobody").unwrap());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let profile = UserProfile::new("alice", "Canada", 15);
        store.save(&profile).unwrap();
        assert_eq!(store.load("alice").unwrap(), Some(profile));
        assert!(store.exists("alice").unwrap());
    }

    #[test]
    fn test_insert_new_refuses_taken_id() {
        let store = MemoryStore::new();
        store.insert_new(&UserProfile::new("alice", "Canada", 15)).unwrap();
        assert!(matches!(
            store.insert_new(&UserProfile::new("alice", "France", 30)),
            Err(EngineError::ProfileExists { .. })
        ));
        assert_eq!(store.load("alice").unwrap().unwrap().country, "Canada");
    }

    #[test]
    fn test_concurrent_inserts_admit_one() {
        let store = MemoryStore::new();
        let successes = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = &store;
                    scope.spawn(move || {
                        store
                            .insert_new(&UserProfile::new("alice", "Canada", i))
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or(false))
                .filter(|inserted| *inserted)
                .count()
        });
        assert_eq!(successes, 1);
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.save(&UserProfile::new("alice", "Canada", 15)).unwrap();
        store.save(&UserProfile::new("alice", "France", 30)).unwrap();
        let loaded = store.load("alice").unwrap().unwrap();
        assert_eq!(loaded.country, "France");
        assert_eq!(loaded.total_pto_days, 30);
    }
}
