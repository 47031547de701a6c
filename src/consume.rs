//! Terminal operations that observe a sequence.
//!
//! Every operation here is a loop over [`Sequence::next`]; none of them
//! recurses, so sequences with millions of elements are consumed in constant
//! stack space.

use crate::combinators::Scan;
use crate::core::{Sequence, SequenceError};
use std::rc::Rc;
use tracing::debug;

/// Iterator over the elements of a sequence.
///
/// Holds only the unvisited remainder; the sequence it was created from is
/// unaffected.
#[derive(Clone, Debug)]
pub struct Iter<T> {
    rest: Sequence<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (head, tail) = self.rest.next()?;
        self.rest = tail;
        Some(head)
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter { rest: self }
    }
}

impl<T: Clone> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: Clone + 'static> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::from_vec(iter.into_iter().collect())
    }
}

fn skip_from<T: Clone>(input: Sequence<T>, count: usize) -> Sequence<T> {
    let mut rest = input;
    for _ in 0..count {
        match rest.next() {
            Some((_, tail)) => rest = tail,
            None => return Sequence::empty(),
        }
    }
    rest
}

impl<T: Clone> Sequence<T> {
    /// Iterate over the elements without consuming the sequence.
    pub fn iter(&self) -> Iter<T> {
        Iter { rest: self.clone() }
    }

    /// The first element, if any. Nothing beyond it is computed.
    pub fn first(&self) -> Option<T> {
        self.next().map(|(head, _)| head)
    }

    /// Left-to-right accumulation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// let total = Sequence::generate(Some(1_000_000)).fold(0u64, |sum, x| sum + x as u64);
    /// assert_eq!(total, 499_999_500_000);
    /// ```
    pub fn fold<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(initial, f)
    }

    /// Combine all elements with `f`, or `None` for an empty sequence.
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.iter().reduce(f)
    }

    /// `true` when every element matches. Stops at the first counterexample.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|value| predicate(&value))
    }

    /// `true` when some element matches. Stops at the first match.
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|value| predicate(&value))
    }

    /// The first element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Collect every element into a vector.
    ///
    /// Does not return for an infinite sequence; see
    /// [`try_to_vec`](Self::try_to_vec) and
    /// [`to_vec_bounded`](Self::to_vec_bounded) for guarded variants.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Collect every element, refusing sequences known to be infinite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{Sequence, SequenceError};
    ///
    /// assert_eq!(Sequence::generate(Some(3)).try_to_vec(), Ok(vec![0, 1, 2]));
    /// assert_eq!(Sequence::generate(None).try_to_vec(), Err(SequenceError::Unbounded));
    /// ```
    pub fn try_to_vec(&self) -> Result<Vec<T>, SequenceError> {
        if self.is_unbounded() {
            debug!("refusing to materialize an unbounded sequence");
            return Err(SequenceError::Unbounded);
        }
        Ok(self.to_vec())
    }

    /// Collect every element, failing once more than `limit` appear.
    ///
    /// At most `limit + 1` elements are computed.
    pub fn to_vec_bounded(&self, limit: usize) -> Result<Vec<T>, SequenceError> {
        let mut elements = Vec::new();
        for value in self.iter() {
            if elements.len() == limit {
                debug!(limit, "sequence exceeded materialization limit");
                return Err(SequenceError::LimitExceeded { limit });
            }
            elements.push(value);
        }
        Ok(elements)
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// The sequence without its first `count` elements.
    ///
    /// Lazy: nothing is skipped until the result is observed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// assert_eq!(Sequence::generate(None).skip(16).first(), Some(16));
    /// assert!(Sequence::generate(Some(3)).skip(5).to_vec().is_empty());
    /// ```
    pub fn skip(&self, count: usize) -> Self {
        let input = self.clone();
        Sequence::defer(move || skip_from(input, count))
    }
}

fn joined_rest<T: AsRef<str> + 'static>(separator: Rc<str>) -> Scan<T, String> {
    Scan::new(move |value: T| {
        let mut piece = String::from(&*separator);
        piece.push_str(value.as_ref());
        (piece, joined_rest(Rc::clone(&separator)))
    })
}

fn joined_first<T: AsRef<str> + 'static>(separator: Rc<str>) -> Scan<T, String> {
    Scan::new(move |value: T| {
        (value.as_ref().to_owned(), joined_rest(Rc::clone(&separator)))
    })
}

impl<T: AsRef<str> + Clone + 'static> Sequence<T> {
    /// Concatenate all elements, with `separator` between neighbours.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq!["1", "2", "3", "4", "5", "6"].join(":"), "1:2:3:4:5:6");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        self.scan(joined_first(Rc::from(separator)))
            .fold(String::new(), |mut joined, piece| {
                joined.push_str(&piece);
                joined
            })
    }
}
