use crate::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the host shell to move to another page.
    Navigate { target: Route },
    /// Ask the data source for a fresh copy of the collection.
    Refetch,
}
