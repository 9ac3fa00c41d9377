#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start the simulated catalog load.
    LoadCatalog,
    /// Abandon an in-flight load.
    CancelLoad,
}
