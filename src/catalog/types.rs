use serde::Serialize;

/// One move a catalog entry can use
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveInfo {
    pub move_name: String,
    /// Free-form text; not necessarily numeric
    pub value: String,
    pub description: String,
}

impl MoveInfo {
    pub fn new(
        move_name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            move_name: move_name.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Reference data for one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    /// In file order, never empty
    pub moves: Vec<MoveInfo>,
}
