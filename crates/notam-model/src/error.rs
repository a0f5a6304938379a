use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotamError {
    #[error("phrase is empty after trimming")]
    EmptyPhrase,
    #[error("abbreviation for phrase '{phrase}' is empty after trimming")]
    EmptyAbbreviation { phrase: String },
}

pub type Result<T> = std::result::Result<T, NotamError>;
