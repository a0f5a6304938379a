#![deny(unsafe_code)]

pub mod builder;
pub mod error;
pub mod handle;
pub mod hash;
pub mod loader;
pub mod paths;
pub mod table;

pub use crate::builder::{BuildOptions, BuildReport, SkippedRow, build, build_from_pairs};
pub use crate::error::DictionaryError;
pub use crate::handle::DictionaryHandle;
pub use crate::loader::{LoadedDictionary, load_dictionary, load_dictionary_from_reader};
pub use crate::paths::{
    DEFAULT_DICTIONARY_FILE, DICTIONARY_ENV_VAR, default_dictionary_path,
    resolve_dictionary_path, resolve_dictionary_path_with,
};
pub use crate::table::{DictionaryTable, read_dictionary_table};
