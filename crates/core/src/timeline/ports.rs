//! Port interfaces for master-data resolution

/// Trait for resolving master-data ids into display names
///
/// Implementations return `None` for unknown ids; callers fall back to the
/// raw id so a missing reference never hides a block.
pub trait MasterDataLookup: Send + Sync {
    /// Title of a designation (e.g. "Civil Judge")
    fn designation_title(&self, id: &str) -> Option<&str>;

    /// Name of a posting unit (court or office)
    fn unit_name(&self, id: &str) -> Option<&str>;

    /// Name of a tehsil
    fn tehsil_name(&self, id: &str) -> Option<&str>;

    /// Name of an academic or professional qualification
    fn qualification_name(&self, id: &str) -> Option<&str>;
}

/// Lookup that knows nothing; every id resolves to itself
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMasterData;

impl MasterDataLookup for NoMasterData {
    fn designation_title(&self, _id: &str) -> Option<&str> {
        None
    }

    fn unit_name(&self, _id: &str) -> Option<&str> {
        None
    }

    fn tehsil_name(&self, _id: &str) -> Option<&str> {
        None
    }

    fn qualification_name(&self, _id: &str) -> Option<&str> {
        None
    }
}
