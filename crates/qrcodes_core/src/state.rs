use crate::view_model::{ActionView, PageViewModel, CREATE_ACTION_LABEL, PAGE_TITLE};
use crate::{CodeId, FetchPhase, FetchStatus, PageStateResolver, QrCode, Route};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    resolver: PageStateResolver,
    status: FetchStatus<QrCode>,
    notice: Option<String>,
    dirty: bool,
}

impl PageState {
    pub fn new(create_route: Route) -> Self {
        Self {
            resolver: PageStateResolver::new(create_route),
            ..Self::default()
        }
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            title: PAGE_TITLE.to_string(),
            primary_action: ActionView {
                label: CREATE_ACTION_LABEL.to_string(),
                target: self.create_route().clone(),
            },
            body: self.resolver.resolve(&self.status),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.status.phase()
    }

    pub fn create_route(&self) -> &Route {
        self.resolver.create_target()
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_status(&mut self, status: FetchStatus<QrCode>) {
        if status.phase() == FetchPhase::Settled {
            self.notice = None;
        }
        self.status = status;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.notice = Some(message);
        self.dirty = true;
    }

    pub(crate) fn find_code(&self, id: CodeId) -> Option<&QrCode> {
        self.status
            .items()
            .and_then(|items| items.iter().find(|code| code.id == id))
    }
}
