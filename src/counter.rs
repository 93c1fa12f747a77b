use std::collections::HashMap;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::tweet::Tweet;

/// Frequency mapping from hashtag token to occurrence count.
///
/// Keys are exact tokens: case-sensitive, punctuation-sensitive, no
/// normalization. Iteration order is the order in which tags were first
/// seen in the tweet stream, which is what makes the selector's
/// tie-breaks deterministic (first-seen wins at equal counts).
#[derive(Debug)]
pub struct TagCounts {
    counts: HashMap<String, u64, RandomState>,
    // first-seen order over the tweet stream
    order: Vec<String>,
}

impl TagCounts {
    fn new() -> Self {
        TagCounts {
            counts: HashMap::with_hasher(RandomState::new()),
            order: Vec::new(),
        }
    }

    fn increment(&mut self, tag: &str) {
        if let Some(count) = self.counts.get_mut(tag) {
            *count += 1;
        } else {
            self.counts.insert(tag.to_string(), 1);
            self.order.push(tag.to_string());
        }
    }

    /// The count for an exact tag, if it occurred at all.
    pub fn get(&self, tag: &str) -> Option<u64> {
        self.counts.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.counts.contains_key(tag)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the total number of hashtag tokens seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates `(tag, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(move |tag| (tag.as_str(), self.counts[tag]))
    }
}

/// Builds the hashtag frequency mapping for a sequence of tweet records.
///
/// Each text field is split on single spaces and tokens whose first
/// character is `#` are counted. Runs of spaces produce empty tokens,
/// which never start with `#` and fall out of the filter. A record whose
/// text field is missing or not a string fails the whole run with
/// [`Error::MalformedRecord`]; no partial mapping is returned.
pub fn count_hashtags(tweets: &[Tweet]) -> Result<TagCounts> {
    let mut counts = TagCounts::new();

    for tweet in tweets {
        let text = tweet
            .text()
            .ok_or(Error::MalformedRecord { id: tweet.id })?;

        for token in text.split(' ') {
            if token.starts_with('#') {
                counts.increment(token);
            }
        }
    }

    Ok(counts)
}
