use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{QuizMemeError, Result};
use super::StateBackend;

/// In-process document holder. Clones share the same document, which lets a
/// test keep a handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    contents: Arc<Mutex<Option<String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        let backend = Self::default();
        if let Ok(mut slot) = backend.contents.lock() {
            *slot = Some(contents.to_string());
        }
        backend
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(QuizMemeError::StorageError("memory backend read refused".to_string()));
        }
        let slot = self.contents.lock().map_err(|_| QuizMemeError::from("memory backend poisoned"))?;
        Ok(slot.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(QuizMemeError::StorageError("memory backend write refused".to_string()));
        }
        let mut slot = self.contents.lock().map_err(|_| QuizMemeError::from("memory backend poisoned"))?;
        *slot = Some(contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
