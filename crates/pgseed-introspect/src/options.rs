use pgseed_core::DEFAULT_SCHEMA;

/// Options that control what the inspector lists.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Schema searched for tables and columns.
    pub schema: String,
    /// List views alongside base tables.
    pub include_views: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            include_views: true,
        }
    }
}
