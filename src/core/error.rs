use thiserror::Error;

/// Errors crossing the host boundary
///
/// Host implementations of the `host` traits return these; selection
/// itself never fails (no candidate is an ordinary outcome, not an error).
#[derive(Error, Debug)]
pub enum WardenError {
    #[error("Item not found: {0:?}")]
    ItemNotFound(crate::core::types::ItemId),

    #[error("Container-to-hand transfer failed for {0:?}")]
    TransferFailed(crate::core::types::ItemId),
}

pub type Result<T> = std::result::Result<T, WardenError>;
