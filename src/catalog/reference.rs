use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::types::{CatalogEntry, MoveInfo};
use crate::error::CatalogLoadError;
use crate::notify::Notify;
use crate::parser::{next_line, parse_record, CatalogRow};

/// Read-only lookup tables built once from the reference file
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    names: Vec<String>,
    categories: Vec<String>,
    entries: HashMap<String, CatalogEntry>,
}

impl ReferenceCatalog {
    /// A catalog with no entries, used when the reference file is unavailable
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the catalog from a file on disk
    pub fn open(path: &Path) -> Result<Self, CatalogLoadError> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|source| CatalogLoadError::Open {
            source_name: source_name.clone(),
            source,
        })?;
        Self::load(BufReader::new(file), &source_name)
    }

    /// Parse a delimited stream. The first line is a header and is discarded;
    /// lines with fewer than five fields are skipped. Bytes that are not
    /// valid UTF-8 become U+FFFD instead of failing the load.
    pub fn load<R: BufRead>(mut reader: R, source_name: &str) -> Result<Self, CatalogLoadError> {
        let mut catalog = Self::empty();
        let mut seen_categories: HashSet<String> = HashSet::new();
        let mut skipped = 0usize;
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            line_no += 1;
            let more = next_line(&mut reader, &mut buf).map_err(|source| {
                CatalogLoadError::Read {
                    source_name: source_name.to_string(),
                    line: line_no,
                    source,
                }
            })?;
            if !more {
                break;
            }

            // Header
            if line_no == 1 {
                continue;
            }

            let line = String::from_utf8_lossy(&buf);
            match parse_record(&line) {
                Some(row) => catalog.insert(row, &mut seen_categories),
                None => {
                    debug!("Skipping malformed line {} of {}", line_no, source_name);
                    skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} names, {} categories and {} moves from {} ({} lines skipped)",
            catalog.len(),
            catalog.categories.len(),
            catalog.move_count(),
            source_name,
            skipped
        );

        Ok(catalog)
    }

    /// Load the catalog, falling back to an empty one after notifying the user
    pub fn load_or_empty(path: &Path, notifier: &mut impl Notify) -> Self {
        match Self::open(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                notifier.notify(e.to_string());
                Self::empty()
            }
        }
    }

    fn insert(&mut self, row: CatalogRow, seen_categories: &mut HashSet<String>) {
        if seen_categories.insert(row.category.clone()) {
            self.categories.push(row.category.clone());
        }

        let info = MoveInfo::new(row.move_name, row.value, row.description);

        match self.entries.entry(row.name) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                // Later rows decide the category of a name
                entry.category = row.category;
                entry.moves.push(info);
            }
            Entry::Vacant(vacant) => {
                self.names.push(vacant.key().clone());
                let entry = CatalogEntry {
                    name: vacant.key().clone(),
                    category: row.category,
                    moves: vec![info],
                };
                vacant.insert(entry);
            }
        }
    }

    /// All names, in order of first appearance
    pub fn names_in_order(&self) -> &[String] {
        &self.names
    }

    /// All distinct categories, in order of first appearance
    pub fn categories_in_order(&self) -> &[String] {
        &self.categories
    }

    /// Moves of `name` in file order; empty for an unknown name
    pub fn moves_for(&self, name: &str) -> &[MoveInfo] {
        self.entries
            .get(name)
            .map(|e| e.moves.as_slice())
            .unwrap_or(&[])
    }

    pub fn move_names_for<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.moves_for(name).iter().map(|m| m.move_name.as_str())
    }

    pub fn category_for(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.category.as_str())
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Total number of moves across all names
    pub fn move_count(&self) -> usize {
        self.entries.values().map(|e| e.moves.len()).sum()
    }
}
