use qrcodes_core::{FetchPhase, FetchStatus};

/// Phase bookkeeping for a collection that is fetched repeatedly.
///
/// The first fetch reports `Loading`; once any fetch has succeeded, later
/// fetches report `Refetching` with the previous items so the page keeps
/// showing them. A failed fetch rolls back to what was known before it.
#[derive(Debug, Clone)]
pub struct StatusTracker<T> {
    status: FetchStatus<T>,
    last_items: Option<Vec<T>>,
}

impl<T> Default for StatusTracker<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::idle(),
            last_items: None,
        }
    }
}

impl<T: Clone> StatusTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FetchPhase {
        self.status.phase()
    }

    pub fn current(&self) -> FetchStatus<T> {
        self.status.clone()
    }

    /// A fetch was issued.
    pub fn begin(&mut self) -> FetchStatus<T> {
        self.status = match &self.last_items {
            Some(items) => FetchStatus::refetching(items.clone()),
            None => FetchStatus::loading(),
        };
        self.current()
    }

    /// The in-flight fetch returned `items`.
    pub fn complete(&mut self, items: Vec<T>) -> FetchStatus<T> {
        self.last_items = Some(items.clone());
        self.status = FetchStatus::settled(items);
        self.current()
    }

    /// The in-flight fetch gave up.
    pub fn fail(&mut self) -> FetchStatus<T> {
        self.status = match &self.last_items {
            Some(items) => FetchStatus::settled(items.clone()),
            None => FetchStatus::idle(),
        };
        self.current()
    }
}
