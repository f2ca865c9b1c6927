/// Errors reported by the component storage layer.
///
/// Every variant is recoverable; nothing in this crate aborts the process on caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("entity id {id} is outside the identifier range [0, {limit})")]
    OutOfRange { id: u32, limit: usize },

    #[error("storage is full ({capacity} live entries)")]
    CapacityExhausted { capacity: usize },

    #[error("entity id {0} is already present")]
    AlreadyPresent(u32),
}
