//! Access-list reconciliation settings.

use serde::Deserialize;

/// Settings of the effective access-list pass.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AclSettings {
    /// Report a removed rule as modified when an identical copy survives (default: false)
    #[serde(default)]
    pub ignore_removed_duplicate_acls: bool,
}
