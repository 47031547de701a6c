//! Persistent singly-linked list.
//!
//! Used as the backing store for composite segment bookkeeping. All
//! operations return new lists; existing lists are never modified and share
//! their cells with every list derived from them.

use std::rc::Rc;

struct Cell<T> {
    value: T,
    next: List<T>,
}

/// An immutable cons list with O(1) `push` and `uncons`.
pub(crate) struct List<T> {
    head: Option<Rc<Cell<T>>>,
    len: usize,
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Prepend a value, sharing every existing cell.
    #[must_use]
    pub(crate) fn push(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Cell {
                value,
                next: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Split into the first value and the remaining list.
    pub(crate) fn uncons(&self) -> Option<(&T, Self)> {
        self.head
            .as_deref()
            .map(|cell| (&cell.value, cell.next.clone()))
    }

    /// Move out the values of every cell no other list shares, front first.
    pub(crate) fn drain_into(mut self, into: &mut Vec<T>) {
        into.reserve(self.len);
        let mut next = self.head.take();
        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(mut cell) => {
                    let rest = cell.next.head.take();
                    into.push(cell.value);
                    rest
                }
                Err(_) => None,
            };
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> List<T> {
    /// Build the list with the same values in the opposite order.
    #[must_use]
    pub(crate) fn reversed(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, value| reversed.push(value.clone()))
    }
}

// Long lists would otherwise be torn down by one destructor call per cell.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(mut cell) => cell.next.head.take(),
                Err(_) => None,
            };
        }
    }
}

pub(crate) struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.next.head.as_deref();
            &cell.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_prepends_without_touching_original() {
        let base = List::new().push(3).push(2);
        let extended = base.push(1);

        assert_eq!(collect(&base), vec![2, 3]);
        assert_eq!(collect(&extended), vec![1, 2, 3]);
        assert_eq!(extended.len(), 3);
    }

    #[test]
    fn uncons_splits_head_and_tail() {
        let list = List::new().push(2).push(1);
        let (head, tail) = list.uncons().unwrap();

        assert_eq!(*head, 1);
        assert_eq!(collect(&tail), vec![2]);
        assert!(List::<i32>::new().uncons().is_none());
    }

    #[test]
    fn reversed_flips_order() {
        let list = List::new().push(3).push(2).push(1);
        assert_eq!(collect(&list.reversed()), vec![3, 2, 1]);
        assert!(List::<i32>::new().reversed().is_empty());
    }

    #[test]
    fn drain_into_stops_at_shared_cells() {
        let shared = List::new().push(3).push(2);
        let list = shared.push(1);
        let mut drained = Vec::new();
        list.drain_into(&mut drained);

        assert_eq!(drained, vec![1]);
        assert_eq!(collect(&shared), vec![2, 3]);
    }

    #[test]
    fn dropping_a_long_list_does_not_overflow() {
        let mut list = List::new();
        for i in 0..1_000_000 {
            list = list.push(i);
        }
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }
}
