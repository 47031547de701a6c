//! Pending segment lists of composite sequences.

use super::list::List;
use super::sequence::Sequence;

/// Persistent double-ended queue of sub-sequences still to be traversed.
///
/// `front` holds segments in traversal order, `back` holds later segments in
/// reverse order. Pushing at either end is O(1); `back` is only reversed into
/// `front` once `front` runs dry.
pub(crate) struct Segments<T> {
    front: List<Sequence<T>>,
    back: List<Sequence<T>>,
}

impl<T> Clone for Segments<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T> Segments<T> {
    pub(crate) fn pair(first: Sequence<T>, second: Sequence<T>) -> Self {
        Self {
            front: List::new().push(second).push(first),
            back: List::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    #[must_use]
    pub(crate) fn push_front(&self, segment: Sequence<T>) -> Self {
        Self {
            front: self.front.push(segment),
            back: self.back.clone(),
        }
    }

    #[must_use]
    pub(crate) fn push_back(&self, segment: Sequence<T>) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.push(segment),
        }
    }

    /// Take the next segment in traversal order.
    pub(crate) fn pop_front(&self) -> Option<(Sequence<T>, Self)> {
        if let Some((segment, front)) = self.front.uncons() {
            return Some((
                segment.clone(),
                Self {
                    front,
                    back: self.back.clone(),
                },
            ));
        }
        let front = self.back.reversed();
        let (segment, front) = front.uncons()?;
        Some((
            segment.clone(),
            Self {
                front,
                back: List::new(),
            },
        ))
    }

    /// Move out every segment this list owns exclusively.
    pub(crate) fn drain_into(self, into: &mut Vec<Sequence<T>>) {
        self.front.drain_into(into);
        self.back.drain_into(into);
    }

    /// Every pending segment, in no particular order.
    pub(crate) fn members(&self) -> impl Iterator<Item = &Sequence<T>> {
        self.front.iter().chain(self.back.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heads(segments: &Segments<i32>) -> Vec<i32> {
        let mut heads = Vec::new();
        let mut rest = segments.clone();
        while let Some((segment, next)) = rest.pop_front() {
            heads.extend(segment.first());
            rest = next;
        }
        heads
    }

    #[test]
    fn pushes_at_both_ends_keep_order() {
        let segments = Segments::pair(Sequence::one(2), Sequence::one(3))
            .push_back(Sequence::one(4))
            .push_front(Sequence::one(1))
            .push_back(Sequence::one(5));

        assert_eq!(segments.len(), 5);
        assert_eq!(heads(&segments), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pop_front_leaves_original_untouched() {
        let segments = Segments::pair(Sequence::one(1), Sequence::one(2));
        let (first, rest) = segments.pop_front().unwrap();

        assert_eq!(first.first(), Some(1));
        assert_eq!(rest.len(), 1);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn pop_front_drains_back_after_front() {
        let mut segments = Segments::pair(Sequence::one(0), Sequence::one(1));
        for i in 2..6 {
            segments = segments.push_back(Sequence::one(i));
        }

        assert_eq!(heads(&segments), vec![0, 1, 2, 3, 4, 5]);
        let (_, rest) = segments.pop_front().unwrap();
        let (_, rest) = rest.pop_front().unwrap();
        let (_, rest) = rest.pop_front().unwrap();
        assert_eq!(heads(&rest), vec![3, 4, 5]);
    }
}
