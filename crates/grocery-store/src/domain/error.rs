use thiserror::Error;

/// Recoverable input conditions surfaced to the caller for user messaging.
///
/// Neither variant changes store state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("item text is empty")]
    Empty,
    #[error("the list has no items")]
    EmptyList,
}
