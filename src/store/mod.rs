//! Profile persistence.
//!
//! The planner loads a profile, runs the accounting engine over it, and
//! saves it back after every accepted mutation. Stores only need keyed
//! load/save; concurrent writers to the same profile are last-write-wins.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::UserProfile;

/// Keyed storage for [`UserProfile`] records.
pub trait ProfileStore: Send + Sync {
    /// Loads the profile stored under `user_id`, if any.
    fn load(&self, user_id: &str) -> EngineResult<Option<UserProfile>>;

    /// Stores `profile` under its id, replacing any previous record.
    fn save(&self, profile: &UserProfile) -> EngineResult<()>;

    /// Stores `profile` only if its id is free.
    ///
    /// The check and the write happen as one step, so of two concurrent
    /// inserts under the same id exactly one succeeds; the other fails with
    /// `ProfileExists`.
    fn insert_new(&self, profile: &UserProfile) -> EngineResult<()>;

    /// Checks whether a profile is stored under `user_id`.
    fn exists(&self, user_id: &str) -> EngineResult<bool> {
        Ok(self.load(user_id)?.is_some())
    }
}
