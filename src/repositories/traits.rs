use crate::models::Record;

/// Boxed iterator over stored records, in insertion order.
pub type RecordIter<'a> = Box<dyn Iterator<Item = &'a Record> + 'a>;

/// Repository for managing contact records keyed by name.
///
/// Provides abstraction over contact storage so the service layer does not
/// depend on a concrete store.
pub trait ContactRepository {
    /// Store a record under its name, replacing any record already there.
    ///
    /// Returns the replaced record, if any.
    fn add_record(&mut self, record: Record) -> Option<Record>;

    /// Exact-match lookup by name.
    fn find(&self, name: &str) -> Option<&Record>;

    /// Exact-match lookup by name for modification.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove the record stored under `name`. Missing names are ignored.
    fn delete(&mut self, name: &str) -> Option<Record>;

    /// A fresh traversal of all records in insertion order.
    fn records(&self) -> RecordIter<'_>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
