use std::fmt;
use std::io;

use thiserror::Error;

/// The reference source could not be opened or read
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Error loading {source_name}: {source}")]
    Open {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Error reading {source_name} at line {line}: {source}")]
    Read {
        source_name: String,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// A field a candidate must carry before it can be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    MoveName,
    Value,
    Rarity,
    Description,
    Image,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Category => write!(f, "type"),
            Field::MoveName => write!(f, "attack"),
            Field::Value => write!(f, "damage"),
            Field::Rarity => write!(f, "rarity"),
            Field::Description => write!(f, "effect"),
            Field::Image => write!(f, "image"),
        }
    }
}

/// A candidate was rejected because some fields were left empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Fill all fields and upload an image. Missing: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveError {
    #[error("Please select a card to remove.")]
    NoSelection,

    #[error("Position {position} is out of range ({len} cards)")]
    OutOfRange { position: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_missing_fields() {
        let err = ValidationError {
            missing: vec![Field::Value, Field::Image],
        };
        assert_eq!(
            err.to_string(),
            "Fill all fields and upload an image. Missing: damage, image"
        );
    }

    #[test]
    fn test_no_selection_prompt() {
        assert_eq!(
            RemoveError::NoSelection.to_string(),
            "Please select a card to remove."
        );
    }
}
