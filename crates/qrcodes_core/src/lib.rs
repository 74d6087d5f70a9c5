//! QR codes admin core: fetch-status resolution and the pure page state machine.
mod code;
mod effect;
mod msg;
mod resolver;
mod state;
mod status;
mod update;
mod view_model;

pub use code::{CodeId, Destination, QrCode};
pub use effect::Effect;
pub use msg::Msg;
pub use resolver::{PageStateResolver, RenderState, Route, DEFAULT_CREATE_ROUTE};
pub use state::PageState;
pub use status::{ContractViolation, FetchPhase, FetchStatus};
pub use update::update;
pub use view_model::{ActionView, PageViewModel, CREATE_ACTION_LABEL, PAGE_TITLE};
