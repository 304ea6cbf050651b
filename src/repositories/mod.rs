mod address_book;
mod traits;

pub use address_book::AddressBook;
pub use traits::{ContactRepository, RecordIter};
