pub mod entry;
pub mod error;
pub mod mapping;
pub mod reverse;

pub use entry::AbbreviationEntry;
pub use error::{NotamError, Result};
pub use mapping::{AbbreviationMapping, InsertOutcome};
pub use reverse::ReverseIndex;
