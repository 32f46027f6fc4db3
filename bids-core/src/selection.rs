use crate::vendor::Vendor;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Contract violation: a consumer touched the selection outside an
/// initialized scope. Not a recoverable runtime condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    OutOfScope,
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::OutOfScope => {
                write!(f, "selection accessed outside an initialized bids scope")
            }
        }
    }
}

impl std::error::Error for ScopeError {}

type Subscriber = Box<dyn Fn(Option<&Vendor>) + Send>;

#[derive(Default)]
struct Store {
    selected: Option<Vendor>,
    subscribers: Vec<Subscriber>,
}

/// Owns the selected-vendor slot for one UI scope. Dropping the scope is
/// teardown: every handle still held by consumers starts failing with
/// `ScopeError::OutOfScope`.
pub struct SelectionScope {
    store: Arc<Mutex<Store>>,
}

impl SelectionScope {
    /// Establishes the scope with no selection held.
    pub fn initialize() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
        }
    }

    /// Hands out the accessor nested consumers hold.
    pub fn handle(&self) -> SelectionHandle {
        SelectionHandle {
            store: Arc::downgrade(&self.store),
        }
    }
}

#[derive(Clone)]
pub struct SelectionHandle {
    store: Weak<Mutex<Store>>,
}

impl SelectionHandle {
    /// A handle backed by no scope at all, as seen by a consumer that was
    /// never nested under a provider.
    pub fn detached() -> Self {
        Self { store: Weak::new() }
    }

    /// Current selection, absent or one complete record.
    pub fn read(&self) -> Result<Option<Vendor>, ScopeError> {
        let store = self.upgrade()?;
        let guard = lock(&store);
        Ok(guard.selected.clone())
    }

    /// Replaces the held value with a record or explicit `None` and notifies
    /// every subscriber with the new value. Records are stored as-is.
    pub fn replace(&self, selection: Option<Vendor>) -> Result<(), ScopeError> {
        let store = self.upgrade()?;
        let mut guard = lock(&store);
        guard.selected = selection;
        // Subscribers run under the store lock and get the new value as an
        // argument; re-entering the handle from a subscriber is unsupported.
        let Store {
            selected,
            subscribers,
        } = &*guard;
        for subscriber in subscribers {
            subscriber(selected.as_ref());
        }
        Ok(())
    }

    /// Registers an observer invoked on every replacement.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(Option<&Vendor>) + Send + 'static,
    ) -> Result<(), ScopeError> {
        let store = self.upgrade()?;
        lock(&store).subscribers.push(Box::new(subscriber));
        Ok(())
    }

    fn upgrade(&self) -> Result<Arc<Mutex<Store>>, ScopeError> {
        self.store.upgrade().ok_or(ScopeError::OutOfScope)
    }
}

fn lock(store: &Mutex<Store>) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
