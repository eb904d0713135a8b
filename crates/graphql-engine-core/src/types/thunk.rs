use parking_lot::Mutex;
use std::fmt;
use std::sync::OnceLock;

type Initializer<T> = Box<dyn FnOnce() -> T + Send>;

/// A single-assignment cell whose value is produced on first access and
/// memoized from then on.
///
/// Type members (fields, union members, input fields) are stored in thunks
/// so a definition can be assembled lazily, after the types it mentions
/// exist. Reads are safe from any number of threads and the initializer runs
/// at most once.
pub struct Thunk<T> {
    value: OnceLock<T>,
    init: Mutex<Option<Initializer<T>>>,
}

impl<T> Thunk<T> {
    /// A thunk that is already resolved.
    pub fn ready(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            init: Mutex::new(None),
        }
    }

    /// A thunk resolved by calling `init` on first access.
    pub fn lazy(init: impl FnOnce() -> T + Send + 'static) -> Self {
        Self {
            value: OnceLock::new(),
            init: Mutex::new(Some(Box::new(init))),
        }
    }

    /// Resolves the thunk if needed and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panicked during an earlier access.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| {
            let init = self.init.lock().take();
            match init {
                Some(init) => init(),
                None => panic!("thunk initializer panicked during an earlier access"),
            }
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T> From<T> for Thunk<T> {
    fn from(value: T) -> Self {
        Self::ready(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Thunk").field(value).finish(),
            None => f.write_str("Thunk(<unresolved>)"),
        }
    }
}
