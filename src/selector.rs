use crate::counter::TagCounts;

/// One ranked result: a hashtag and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// A fixed-capacity buffer that keeps the K highest-count items seen so
/// far, in descending count order.
///
/// Insertion uses strict `>` against each occupied slot, so an item
/// whose count merely equals a slot's count never displaces it: the
/// earlier-offered item wins ties. Generalizes the classic hand-written
/// three-slot top-3 to any K; for small K the shift-insert is as cheap
/// as it gets, and callers with large K would want a min-heap instead.
pub struct RankedBuffer<T> {
    slots: Vec<(T, u64)>,
    capacity: usize,
}

impl<T> RankedBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        RankedBuffer {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The smallest count currently held, or 0 if the buffer is empty.
    pub fn min_count(&self) -> u64 {
        self.slots.last().map(|(_, count)| *count).unwrap_or(0)
    }

    /// Offers an item; it is kept only if it strictly beats an occupied
    /// slot or the buffer still has room. Overflow past capacity is
    /// discarded from the bottom.
    pub fn offer(&mut self, item: T, count: u64) {
        if self.capacity == 0 {
            return;
        }

        // First slot the candidate strictly beats, else append at the end.
        let pos = self
            .slots
            .iter()
            .position(|(_, slot_count)| count > *slot_count)
            .unwrap_or(self.slots.len());

        if pos >= self.capacity {
            return;
        }

        self.slots.insert(pos, (item, count));
        self.slots.truncate(self.capacity);
    }

    /// Consumes the buffer, returning the kept items in descending count
    /// order. Unfilled capacity is simply absent.
    pub fn into_vec(self) -> Vec<(T, u64)> {
        self.slots
    }
}

/// Scans the frequency mapping once and returns the `k` highest-count
/// tags in descending order, or fewer if the mapping has fewer distinct
/// keys. Ties are broken by the mapping's first-seen iteration order.
pub fn select_top(k: usize, counts: &TagCounts) -> Vec<TagCount> {
    let mut buffer = RankedBuffer::new(k);
    for (tag, count) in counts.iter() {
        buffer.offer(tag, count);
    }

    buffer
        .into_vec()
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect()
}
