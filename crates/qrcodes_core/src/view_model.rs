use crate::{QrCode, RenderState, Route};

pub const PAGE_TITLE: &str = "QR codes";
pub const CREATE_ACTION_LABEL: &str = "Create QR code";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub label: String,
    pub target: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub title: String,
    /// Title bar action, offered in every render state.
    pub primary_action: ActionView,
    pub body: RenderState<QrCode>,
    /// Last fetch failure, shown alongside the body.
    pub notice: Option<String>,
    pub dirty: bool,
}
