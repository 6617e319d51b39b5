//! Thread-safe handle for embedding a casebook in a concurrent service.

use std::sync::{Arc, PoisonError, RwLock};

use case_rules::{Casebook, CasebookSnapshot};

/// A cloneable handle to one casebook behind a reader-writer lock.
///
/// Each closure passed to [`SharedCasebook::write`] runs under one exclusive
/// lock scope, so a compound operation (create then link, delete with its
/// cascade) is never observed half applied. Reads share the lock with each
/// other.
#[derive(Debug, Clone, Default)]
pub struct SharedCasebook {
    inner: Arc<RwLock<Casebook>>,
}

impl SharedCasebook {
    pub fn new(book: Casebook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Casebook) -> R) -> R {
        // Every casebook writer applies fully or not at all, so a poisoned
        // lock still holds a consistent casebook.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Casebook) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn export(&self) -> CasebookSnapshot {
        self.read(Casebook::export)
    }
}

impl From<Casebook> for SharedCasebook {
    fn from(book: Casebook) -> Self {
        Self::new(book)
    }
}
