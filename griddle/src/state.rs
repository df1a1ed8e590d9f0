use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` provides thread-safe state management. It uses `Arc<RwLock<T>>`
/// internally, making it cheap to clone and safe to hand to callbacks.
///
/// This is the reference owner for table sort state: the host keeps a
/// `State<Option<SortStatus>>`, passes a snapshot to each header cell per
/// render, and commits proposals from the `on_sort_status_change` callback
/// back into it. The dirty flag tells the host's event loop whether a
/// committed proposal warrants a redraw.
///
/// # Example
///
/// ```ignore
/// let sort = State::new(None::<SortStatus>);
///
/// let cell = HeaderCell::new(Column::new("created_at").sortable())
///     .sort_status(sort.get())
///     .on_sort_status_change({
///         let sort = sort.clone();
///         move |status| sort.set(Some(status))
///     });
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
