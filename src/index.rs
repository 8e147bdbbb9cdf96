//! A value-sorted, duplicate-free sequence with predecessor/successor search.
//!
//! `OrderedIndex` backs every per-size bucket in the [`Toolkit`](crate::Toolkit).
//! It is a sorted `Vec` with binary-search lookups: inserts are `O(n)` from the
//! memmove, searches `O(log n)`.

/// An ordered sequence of `T`, kept sorted at all times, rejecting exact
/// duplicates on insert.
#[derive(Debug, Clone)]
pub struct OrderedIndex<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedIndex<T> {
    fn default() -> Self {
        OrderedIndex { items: Vec::new() }
    }
}

impl<T: Ord> OrderedIndex<T> {
    pub fn new() -> Self {
        OrderedIndex { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at position `i` in ascending order.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    /// Insert `value` in sort order. If an element comparing equal is already
    /// present the index is left unchanged and `false` is returned.
    pub fn insert(&mut self, value: T) -> bool {
        match self.items.binary_search(&value) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, value);
                true
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.binary_search(value).is_ok()
    }

    /// Largest element `<= value`, if any.
    pub fn find_le(&self, value: &T) -> Option<&T> {
        let i = self.items.partition_point(|x| x <= value);
        if i == 0 {
            None
        } else {
            self.items.get(i - 1)
        }
    }

    /// Largest element `< value`, if any.
    pub fn find_lt(&self, value: &T) -> Option<&T> {
        let i = self.items.partition_point(|x| x < value);
        if i == 0 {
            None
        } else {
            self.items.get(i - 1)
        }
    }

    /// Smallest element `>= value`, if any.
    pub fn find_ge(&self, value: &T) -> Option<&T> {
        self.items.get(self.items.partition_point(|x| x < value))
    }

    /// Smallest element `> value`, if any.
    pub fn find_gt(&self, value: &T) -> Option<&T> {
        self.items.get(self.items.partition_point(|x| x <= value))
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedIndex<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
