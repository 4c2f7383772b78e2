// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use std::collections::VecDeque;

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use folio_intl::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);
///
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
/// buffer.push(4); // Evicts 1
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the given capacity.
    ///
    /// A capacity of zero is bumped to one so pushes always store something.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all elements from the buffer.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_retrieve() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
    }

    #[test]
    fn iterator_yields_chronological_order() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);

        for value in [10, 20, 30, 40, 50, 60] {
            buffer.push(value);
        }

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![20, 30, 40, 50, 60]);
    }

    #[test]
    fn len_and_capacity_track_contents() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);

        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.is_empty());

        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.len(), 2);
        assert!(!buffer.is_empty());

        for value in 3..=6 {
            buffer.push(value);
        }

        // Overflow doesn't increase len
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);

        buffer.push(1);
        buffer.push(2);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(0);
        buffer.push(7);
        buffer.push(8);

        assert_eq!(buffer.capacity(), 1);
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![8]);
    }
}
