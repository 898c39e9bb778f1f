use super::{CardImage, Rarity};
use crate::error::{Field, ValidationError};

/// A card being assembled from user input, not yet committed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub category: String,
    pub move_name: String,
    pub value: String,
    pub rarity: Option<Rarity>,
    pub description: String,
    pub image: Option<CardImage>,
}

impl Candidate {
    /// Fields that are still empty or unset, in column order
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        let text_fields = [
            (Field::Name, &self.name),
            (Field::Category, &self.category),
            (Field::MoveName, &self.move_name),
            (Field::Value, &self.value),
        ];
        for (field, value) in text_fields {
            if value.is_empty() {
                missing.push(field);
            }
        }
        if self.rarity.is_none() {
            missing.push(Field::Rarity);
        }
        if self.description.is_empty() {
            missing.push(Field::Description);
        }
        if self.image.is_none() {
            missing.push(Field::Image);
        }
        missing
    }

    /// Turn a complete candidate into a record
    pub fn validate(self) -> Result<Record, ValidationError> {
        let missing = self.missing_fields();
        match (self.rarity, self.image) {
            (Some(rarity), Some(image)) if missing.is_empty() => Ok(Record {
                name: self.name,
                category: self.category,
                move_name: self.move_name,
                value: self.value,
                rarity,
                description: self.description,
                image,
            }),
            _ => Err(ValidationError { missing }),
        }
    }
}

/// A committed card. Records are never edited, only removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    category: String,
    move_name: String,
    value: String,
    rarity: Rarity,
    description: String,
    image: CardImage,
}

impl Record {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn move_name(&self) -> &str {
        &self.move_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &CardImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Candidate {
        Candidate {
            name: "Pikachu".into(),
            category: "Electric".into(),
            move_name: "Thunder".into(),
            value: "30".into(),
            rarity: Some(Rarity::Rare),
            description: "None".into(),
            image: Some(CardImage::new(vec![0x89, 0x50])),
        }
    }

    #[test]
    fn test_complete_candidate_validates() {
        let record = complete().validate().unwrap();
        assert_eq!(record.name(), "Pikachu");
        assert_eq!(record.rarity(), Rarity::Rare);
        assert_eq!(record.image().as_bytes(), &[0x89u8, 0x50]);
    }

    #[test]
    fn test_missing_fields_in_column_order() {
        let candidate = Candidate {
            value: String::new(),
            rarity: None,
            image: None,
            ..complete()
        };
        assert_eq!(
            candidate.missing_fields(),
            vec![Field::Value, Field::Rarity, Field::Image]
        );
        assert_eq!(
            candidate.validate().unwrap_err().missing,
            vec![Field::Value, Field::Rarity, Field::Image]
        );
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let candidate = Candidate {
            description: " ".into(),
            ..complete()
        };
        assert!(candidate.validate().is_ok());
    }

    #[test]
    fn test_empty_default_misses_everything() {
        assert_eq!(Candidate::default().missing_fields().len(), 7);
    }
}
