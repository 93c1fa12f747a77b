//! tagrank finds the most frequent hashtags in a batch of tweet records.
//!
//! The pipeline is two single-pass steps: [`count_hashtags`] builds a
//! frequency mapping from exact hashtag tokens to counts, and
//! [`select_top`] scans the mapping once through a fixed-capacity
//! [`RankedBuffer`] to produce the K highest-count tags in descending
//! order. Ties at equal counts go to the tag seen first in the tweet
//! stream; that order is a documented contract, not a map-iteration
//! accident.

mod counter;
mod error;
mod selector;
mod tweet;

pub use counter::{count_hashtags, TagCounts};
pub use error::{Error, Result};
pub use selector::{select_top, RankedBuffer, TagCount};
pub use tweet::{Field, Tweet};

/// The shipped program surface tracks a top-3.
pub const TOP_K: usize = 3;

/// Returns the top-3 hashtags for a batch of tweets, descending by
/// count. Fails with [`Error::MalformedRecord`] if any record lacks a
/// string text field.
pub fn top_hashtags(tweets: &[Tweet]) -> Result<Vec<TagCount>> {
    top_hashtags_k(tweets, TOP_K)
}

/// Same as [`top_hashtags`] with a caller-chosen K.
pub fn top_hashtags_k(tweets: &[Tweet], k: usize) -> Result<Vec<TagCount>> {
    let counts = count_hashtags(tweets)?;
    Ok(select_top(k, &counts))
}
