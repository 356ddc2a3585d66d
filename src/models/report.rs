use crate::error::RenameError;

/// Outcome of one traversal.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Entries moved to their substituted name
    pub renamed: usize,
    /// Files deleted because their rename failed
    pub removed: usize,
    /// Per-entry failures, in the order they were hit
    pub failures: Vec<RenameError>,
}

impl RenameReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
