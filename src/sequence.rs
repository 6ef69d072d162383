//! A caller-owned, fixed-capacity buffer used to move elements out of a
//! tree (in ascending order) and back in again.

/// A growable list of elements that never grows past the capacity it was
/// created with. Its length is always the number of elements it holds, so
/// there's no need to scan for empty slots.
///
/// # Examples
///
/// ```
/// use bintree::Sequence;
///
/// let mut sequence = Sequence::with_capacity(2);
/// assert_eq!(sequence.push(1), Ok(()));
/// assert_eq!(sequence.push(2), Ok(()));
///
/// // Full, so we get the element back.
/// assert_eq!(sequence.push(3), Err(3));
/// assert_eq!(sequence.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence that can hold up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Wraps the given elements in a sequence with no spare capacity.
    pub fn from_vec(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self { items, capacity }
    }

    /// Appends an element, handing it back if the sequence is full.
    pub fn push(&mut self, element: T) -> Result<(), T> {
        if self.remaining() == 0 {
            return Err(element);
        }
        self.items.push(element);
        Ok(())
    }

    /// The number of elements held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most elements this sequence will ever hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many more elements fit.
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// The held elements, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Callers must check `remaining` before pushing through this.
    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Moves every element out, keeping the capacity.
    pub(crate) fn take_items(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    /// The index of the first element that isn't strictly greater than the
    /// one before it.
    pub(crate) fn first_unsorted(&self) -> Option<usize>
    where
        T: Ord,
    {
        self.items
            .windows(2)
            .position(|pair| pair[0] >= pair[1])
            .map(|i| i + 1)
    }
}
