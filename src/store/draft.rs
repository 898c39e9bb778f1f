//! Candidate assembly driven by catalog selections
//!
//! Picking a name fills in its category and first move; picking a move
//! fills in the damage and effect text. The user can still override the
//! category and the effect, choose a rarity and attach an image before
//! committing.

use super::{Candidate, CardImage, Rarity, RecordStore};
use crate::catalog::{MoveInfo, ReferenceCatalog};
use crate::error::ValidationError;

pub struct Draft<'c> {
    catalog: &'c ReferenceCatalog,
    candidate: Candidate,
}

impl<'c> Draft<'c> {
    pub fn new(catalog: &'c ReferenceCatalog) -> Self {
        Self {
            catalog,
            candidate: Candidate::default(),
        }
    }

    /// Select a name and return its moves. The first move is selected.
    pub fn select_name(&mut self, name: &str) -> &'c [MoveInfo] {
        let catalog = self.catalog;
        self.candidate.name = name.to_string();

        if let Some(category) = catalog.category_for(name) {
            self.candidate.category = category.to_string();
        }

        let moves = catalog.moves_for(name);
        self.select_move(0);
        moves
    }

    /// Select one of the current name's moves by index; an index without a
    /// move clears the move fields.
    pub fn select_move(&mut self, index: usize) -> Option<&'c MoveInfo> {
        let catalog = self.catalog;
        let selected = catalog.moves_for(&self.candidate.name).get(index);

        match selected {
            Some(info) => {
                self.candidate.move_name = info.move_name.clone();
                self.candidate.value = info.value.clone();
                self.candidate.description = info.description.clone();
            }
            None => {
                self.candidate.move_name.clear();
                self.candidate.value.clear();
                self.candidate.description.clear();
            }
        }

        selected
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.candidate.category = category.into();
    }

    pub fn set_rarity(&mut self, rarity: Option<Rarity>) {
        self.candidate.rarity = rarity;
    }

    /// Replace the effect text taken from the catalog
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.candidate.description = description.into();
    }

    pub fn attach_image(&mut self, image: CardImage) {
        self.candidate.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.candidate.image = None;
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Append the candidate to `store`. On success the draft goes back to the
    /// first catalog name and drops its image; the rarity is kept.
    pub fn commit(&mut self, store: &mut RecordStore) -> Result<usize, ValidationError> {
        let position = store.append(self.candidate.clone())?;

        let catalog = self.catalog;
        self.clear_image();
        match catalog.names_in_order().first() {
            Some(first) => {
                self.select_name(first);
            }
            None => {
                self.candidate.name.clear();
                self.select_move(0);
            }
        }

        Ok(position)
    }
}
