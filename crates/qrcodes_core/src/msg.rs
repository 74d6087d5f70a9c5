use crate::{CodeId, FetchStatus, QrCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The data source published a new status snapshot.
    StatusChanged(FetchStatus<QrCode>),
    /// The data source gave up on a fetch.
    FetchFailed { message: String },
    /// User chose "Create QR code" (title bar or empty state).
    CreateClicked,
    /// User opened a row of the list.
    RowSelected { id: CodeId },
    /// User or ticker asked for fresh data.
    RefreshRequested,
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
