use std::fmt;

use thiserror::Error;

/// Lifecycle stage of an asynchronous collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// First fetch in flight, no prior data.
    Loading,
    /// A later fetch in flight while prior data exists.
    Refetching,
    /// The last fetch completed.
    Settled,
}

impl FetchPhase {
    pub const ALL: [FetchPhase; 4] = [
        FetchPhase::Idle,
        FetchPhase::Loading,
        FetchPhase::Refetching,
        FetchPhase::Settled,
    ];

    /// True for the phases that guarantee a completed fetch, and so items.
    pub fn has_completed(self) -> bool {
        matches!(self, FetchPhase::Refetching | FetchPhase::Settled)
    }

    /// True while a request is on the wire.
    pub fn in_flight(self) -> bool {
        matches!(self, FetchPhase::Loading | FetchPhase::Refetching)
    }
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchPhase::Idle => "idle",
            FetchPhase::Loading => "loading",
            FetchPhase::Refetching => "refetching",
            FetchPhase::Settled => "settled",
        };
        f.write_str(label)
    }
}

/// The data source broke its contract while handing over a status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("fetch phase `{phase}` requires items but none were provided")]
    MissingItems { phase: FetchPhase },
}

/// Immutable snapshot of a collection fetch.
///
/// `items` is present whenever the phase says a fetch has completed; the
/// constructors make the other combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchStatus<T> {
    phase: FetchPhase,
    items: Option<Vec<T>>,
}

impl<T> Default for FetchStatus<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> FetchStatus<T> {
    pub fn idle() -> Self {
        Self {
            phase: FetchPhase::Idle,
            items: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            phase: FetchPhase::Loading,
            items: None,
        }
    }

    pub fn refetching(items: Vec<T>) -> Self {
        Self {
            phase: FetchPhase::Refetching,
            items: Some(items),
        }
    }

    pub fn settled(items: Vec<T>) -> Self {
        Self {
            phase: FetchPhase::Settled,
            items: Some(items),
        }
    }

    /// Builds a snapshot from loose parts, failing fast when a completed
    /// phase arrives without items instead of treating it as empty.
    pub fn from_parts(phase: FetchPhase, items: Option<Vec<T>>) -> Result<Self, ContractViolation> {
        if phase.has_completed() && items.is_none() {
            return Err(ContractViolation::MissingItems { phase });
        }
        Ok(Self { phase, items })
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    /// Converts the item type, keeping the phase.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> FetchStatus<U> {
        FetchStatus {
            phase: self.phase,
            items: self.items.map(|items| items.into_iter().map(f).collect()),
        }
    }
}
