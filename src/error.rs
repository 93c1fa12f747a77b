use thiserror::Error;

/// Result type for tagrank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while aggregating tweet records
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A tweet record whose text field is missing or not a string.
    /// The whole run fails rather than skipping the record, since a
    /// partial aggregation would silently undercount.
    #[error("tweet {id} has a missing or non-string text field")]
    MalformedRecord { id: u64 },
}
