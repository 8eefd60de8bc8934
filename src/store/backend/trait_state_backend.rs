use std::fmt::Debug;

use crate::error::Result;

/// Raw storage for the single state document.
///
/// `read` returns `Ok(None)` when nothing has been stored yet. `write`
/// replaces the whole document in one call.
pub trait StateBackend: Send + Sync + Debug {
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, contents: &str) -> Result<()>;
}
