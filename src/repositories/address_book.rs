//! In-memory address book.

use super::traits::{ContactRepository, RecordIter};
use crate::domain::ContactName;
use crate::models::Record;
use std::collections::HashMap;

/// Name-keyed store of contact records that remembers insertion order.
///
/// Lookups go through a hash map. A separate list of names keeps the order
/// records were first added in; replacing a record keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<ContactName, Record>,
    order: Vec<ContactName>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().clone();
        let replaced = self.records.insert(name.clone(), record);
        if replaced.is_none() {
            self.order.push(name);
        }
        replaced
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n.as_str() != name);
        Some(removed)
    }

    fn records(&self) -> RecordIter<'_> {
        Box::new(self.iter())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = RecordIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}
