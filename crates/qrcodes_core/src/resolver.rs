use std::fmt;

use crate::{FetchPhase, FetchStatus};

/// Route of the creation flow used when none is configured.
pub const DEFAULT_CREATE_ROUTE: &str = "/qrcodes/new";

/// Opaque navigation target understood by the host shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(DEFAULT_CREATE_ROUTE)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The one visual state the page is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState<T> {
    Loading,
    Empty { target: Route },
    /// `items` is never empty. `stale` is set while a refetch is in flight.
    Populated { items: Vec<T>, stale: bool },
}

impl<T> RenderState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderState::Empty { .. })
    }

    pub fn items(&self) -> &[T] {
        match self {
            RenderState::Populated { items, .. } => items,
            RenderState::Loading | RenderState::Empty { .. } => &[],
        }
    }
}

/// Maps fetch status onto a [`RenderState`].
///
/// Rules, first match wins:
/// - `Idle` / `Loading` give `Loading` without looking at items, so the empty
///   state never flashes during the first fetch.
/// - A completed phase with no items gives `Empty`.
/// - A completed phase with items gives `Populated`, stale while refetching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageStateResolver {
    create_target: Route,
}

impl PageStateResolver {
    pub fn new(create_target: Route) -> Self {
        Self { create_target }
    }

    pub fn create_target(&self) -> &Route {
        &self.create_target
    }

    pub fn resolve<T: Clone>(&self, status: &FetchStatus<T>) -> RenderState<T> {
        match status.phase() {
            FetchPhase::Idle | FetchPhase::Loading => RenderState::Loading,
            phase @ (FetchPhase::Refetching | FetchPhase::Settled) => {
                // FetchStatus construction guarantees items for completed phases.
                let items = status.items().unwrap_or_default();
                if items.is_empty() {
                    RenderState::Empty {
                        target: self.create_target.clone(),
                    }
                } else {
                    RenderState::Populated {
                        items: items.to_vec(),
                        stale: phase == FetchPhase::Refetching,
                    }
                }
            }
        }
    }
}
