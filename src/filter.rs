use crate::store::{Rarity, Record};

/// Per-field filter terms. An empty term (or `None` rarity) matches every
/// record; all non-empty terms must hold at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub category: String,
    pub move_name: String,
    /// Compared as text: "50" does not match "050"
    pub value: String,
    pub rarity: Option<Rarity>,
    /// Case-insensitive substring of the record's description
    pub description: String,
}

impl FilterCriteria {
    /// Criteria matching every record
    pub fn any() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.category.is_empty()
            && self.move_name.is_empty()
            && self.value.trim().is_empty()
            && self.rarity.is_none()
            && self.description.trim().is_empty()
    }

    /// Whether `record` satisfies every non-empty term
    pub fn matches(&self, record: &Record) -> bool {
        let description = self.description.trim().to_lowercase();

        exact(&self.name, record.name())
            && exact(&self.category, record.category())
            && exact(&self.move_name, record.move_name())
            && exact(self.value.trim(), record.value())
            && self.rarity.map_or(true, |r| r == record.rarity())
            && (description.is_empty()
                || record.description().to_lowercase().contains(&description))
    }
}

fn exact(term: &str, field: &str) -> bool {
    term.is_empty() || term == field
}
