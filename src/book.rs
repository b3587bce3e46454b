//! AddressBook keyed collection.

use crate::models::Record;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// A collection of contact records keyed by contact name.
///
/// The map is owned privately; only the add/find/delete surface is
/// exposed. The key for a stored record always equals the record's
/// name at insertion time, and names are immutable, so the map never
/// needs re-keying. Iteration order over the records is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its contact name.
    ///
    /// An existing record under the same name is silently replaced;
    /// there is no merging.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(contact = %name, "existing record replaced");
        }
    }

    /// Look up a record by exact contact name.
    ///
    /// Returns `None` when no such contact exists; this never fails.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact contact name, mutably.
    ///
    /// The caller can then edit the record's phones; the name itself
    /// has no setter, so the key stays valid.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name` if present.
    ///
    /// Does nothing when the name is absent; this never fails.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            debug!(contact = %name, "record deleted");
        }
    }

    /// Iterate over the stored records in unspecified order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Serde support - serialize as a name -> record map
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (name, record) in &self.records {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

// Serde support - deserialize from a map, re-keying from the records
// themselves so a hand-edited key can never diverge from its record's
// name.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = HashMap::<String, Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in entries.into_values() {
            book.add_record(record);
        }
        Ok(book)
    }
}
