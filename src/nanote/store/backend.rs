use crate::error::Result;

/// Abstract interface for raw keyed text slots.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while SlotStore handles the "what" (serialization, recovery, logging).
pub trait SlotBackend {
    /// Read the raw text stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the text under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) so a reader never sees half a record.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Drop the slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
