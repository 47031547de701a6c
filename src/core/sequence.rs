//! The persistent lazy sequence value and its extraction primitive.
//!
//! A [`Sequence`] is an immutable handle. Observing it with
//! [`Sequence::next`] never mutates it, and the same value may be observed
//! any number of times with identical results. Derived sequences share
//! structure with the values they were built from.

use super::segments::Segments;
use super::thunk::Thunk;
use std::fmt;
use std::rc::Rc;

pub(crate) enum Node<T> {
    /// A materialized head followed by the rest of the sequence.
    One(T, Sequence<T>),
    /// Pending sub-sequences, traversed in order.
    Composite(Segments<T>),
    /// An index-addressed producer, realized on demand.
    Generated(Generated<T>),
    /// A sequence produced on first demand.
    Lazy(Thunk<T>),
}

pub(crate) struct Generated<T> {
    index: usize,
    limit: Option<usize>,
    at: Rc<dyn Fn(usize) -> T>,
}

impl<T> Generated<T> {
    fn split(&self) -> (T, Sequence<T>) {
        let head = (self.at)(self.index);
        let index = self.index + 1;
        let tail = match self.limit {
            Some(limit) if index >= limit => Sequence::empty(),
            limit => Sequence::node(Node::Generated(Generated {
                index,
                limit,
                at: Rc::clone(&self.at),
            })),
        };
        (head, tail)
    }
}

/// A persistent, lazily evaluated, possibly infinite ordered sequence.
///
/// Cloning a sequence is O(1) and never copies elements.
///
/// # Example
///
/// ```rust
/// use lazyseq::Sequence;
///
/// let numbers = Sequence::from_vec(vec![1, 2, 3]);
/// let more = numbers.concat(&Sequence::one(4));
///
/// assert_eq!(more.to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(numbers.to_vec(), vec![1, 2, 3]); // Original unchanged
/// ```
pub struct Sequence<T>(Option<Rc<Node<T>>>);

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self.0.as_deref() {
            None => "Empty",
            Some(Node::One(..)) => "One",
            Some(Node::Composite(_)) => "Composite",
            Some(Node::Generated(_)) => "Generated",
            Some(Node::Lazy(_)) => "Lazy",
        };
        f.debug_tuple("Sequence").field(&variant).finish()
    }
}

impl<T> Sequence<T> {
    /// The sequence with no elements, identity of [`concat`](Self::concat).
    pub const fn empty() -> Self {
        Self(None)
    }

    fn node(node: Node<T>) -> Self {
        Self(Some(Rc::new(node)))
    }

    fn composite(segments: Segments<T>) -> Self {
        if segments.is_empty() {
            Self::empty()
        } else {
            Self::node(Node::Composite(segments))
        }
    }

    /// A sequence of exactly one element.
    pub fn one(value: T) -> Self {
        Self::cons(value, Self::empty())
    }

    /// `head` followed by every element of `tail`.
    pub fn cons(head: T, tail: Self) -> Self {
        Self::node(Node::One(head, tail))
    }

    /// A sequence whose contents are produced on first observation.
    ///
    /// The producer runs at most once; every later observation reuses its
    /// result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// let deferred = Sequence::defer(|| Sequence::from_vec(vec!["a", "b"]));
    /// assert_eq!(deferred.to_vec(), vec!["a", "b"]);
    /// ```
    pub fn defer<F>(producer: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::node(Node::Lazy(Thunk::new(producer)))
    }

    /// The infinite sequence `f(0), f(1), f(2), ...`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(usize) -> T + 'static,
    {
        Self::node(Node::Generated(Generated {
            index: 0,
            limit: None,
            at: Rc::new(f),
        }))
    }

    /// Returns `true` when the sequence is statically known to have no
    /// elements. A deferred sequence that will turn out empty reports `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The monoid append: every element of `self`, then every element of
    /// `other`.
    ///
    /// Concatenating with an empty sequence returns the other operand as is.
    /// Concatenating onto an existing composite extends its segment list in
    /// O(1) instead of nesting it, so long left- or right-growing chains stay
    /// flat.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// let a = Sequence::from_vec(vec![1, 2, 3]);
    /// let b = Sequence::from_vec(vec![4, 5]);
    /// assert_eq!(a.concat(&b).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let (Some(left), Some(right)) = (&self.0, &other.0) else {
            return if self.is_empty() {
                other.clone()
            } else {
                self.clone()
            };
        };
        match (left.as_ref(), right.as_ref()) {
            (Node::Composite(segments), _) => Self::composite(segments.push_back(other.clone())),
            (_, Node::Composite(segments)) => Self::composite(segments.push_front(self.clone())),
            _ => Self::composite(Segments::pair(self.clone(), other.clone())),
        }
    }

    /// Concatenate every sequence yielded by `sequences`, in order.
    pub fn concat_all<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        sequences
            .into_iter()
            .fold(Self::empty(), |all, sequence| all.concat(&sequence))
    }

    /// Returns `true` when the sequence is known to be infinite without
    /// forcing any deferred part of it.
    ///
    /// Only unlimited generated producers are detected. A deferred sequence
    /// that has not been observed yet is treated as finite.
    pub fn is_unbounded(&self) -> bool {
        let mut pending = vec![self.clone()];
        while let Some(sequence) = pending.pop() {
            let Some(node) = sequence.0.as_deref() else {
                continue;
            };
            match node {
                Node::Generated(generated) if generated.limit.is_none() => return true,
                Node::Generated(_) => {}
                Node::One(_, tail) => pending.push(tail.clone()),
                Node::Lazy(thunk) => pending.extend(thunk.peek().cloned()),
                Node::Composite(segments) => pending.extend(segments.members().cloned()),
            }
        }
        false
    }

    fn pop_pending(open: &mut Vec<Segments<T>>) -> Option<Self> {
        while let Some(top) = open.last_mut() {
            match top.pop_front() {
                Some((segment, rest)) => {
                    *top = rest;
                    return Some(segment);
                }
                None => {
                    open.pop();
                }
            }
        }
        None
    }

    /// Rebuild the unvisited remainder: `tail` followed by the still-open
    /// composites, innermost first.
    fn reattach(tail: Self, open: Vec<Segments<T>>) -> Self {
        open.into_iter()
            .rev()
            .fold(tail, |rest, pending| rest.concat(&Self::composite(pending)))
    }
}

impl<T: Clone> Sequence<T> {
    /// Wrap a shared slice without copying it.
    ///
    /// Each observation indexes into the slice; elements are cloned out one
    /// at a time.
    pub fn from_indexable(elements: Rc<[T]>) -> Self
    where
        T: 'static,
    {
        let limit = elements.len();
        if limit == 0 {
            return Self::empty();
        }
        Self::node(Node::Generated(Generated {
            index: 0,
            limit: Some(limit),
            at: Rc::new(move |index| elements[index].clone()),
        }))
    }

    /// Build a sequence from a finite vector.
    pub fn from_vec(elements: Vec<T>) -> Self
    where
        T: 'static,
    {
        Self::from_indexable(Rc::from(elements))
    }

    /// Extract the first element and the sequence of the remaining ones.
    ///
    /// Returns `None` once the sequence is exhausted. `self` is left
    /// untouched, so calling `next` again yields the same pair.
    ///
    /// Leading exhausted segments are skipped with a heap work list; the
    /// call stack does not grow with the number of segments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec![1, 2]);
    /// let (head, tail) = sequence.next().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(tail.to_vec(), vec![2]);
    /// assert_eq!(sequence.next().unwrap().0, 1);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<(T, Self)> {
        let mut open: Vec<Segments<T>> = Vec::new();
        let mut current = self.clone();
        loop {
            let Some(node) = current.0.clone() else {
                current = Self::pop_pending(&mut open)?;
                continue;
            };
            match node.as_ref() {
                Node::One(head, tail) => {
                    return Some((head.clone(), Self::reattach(tail.clone(), open)));
                }
                Node::Generated(generated) => {
                    let (head, tail) = generated.split();
                    return Some((head, Self::reattach(tail, open)));
                }
                Node::Lazy(thunk) => current = thunk.force(),
                Node::Composite(segments) => {
                    while open.last().is_some_and(Segments::is_empty) {
                        open.pop();
                    }
                    open.push(segments.clone());
                    current = Self::pop_pending(&mut open)?;
                }
            }
        }
    }
}

impl Sequence<usize> {
    /// Ascending integers starting at zero.
    ///
    /// `generate(None)` is infinite; `generate(Some(n))` yields `0..n`, and is
    /// empty when `n` is zero. Elements are computed only when observed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// assert_eq!(Sequence::generate(Some(3)).to_vec(), vec![0, 1, 2]);
    /// assert_eq!(Sequence::generate(None).skip(1_000).first(), Some(1_000));
    /// ```
    pub fn generate(limit: Option<usize>) -> Self {
        if limit == Some(0) {
            return Self::empty();
        }
        Self::node(Node::Generated(Generated {
            index: 0,
            limit,
            at: Rc::new(|index| index),
        }))
    }
}

// Memoized tails and nested composites can be millions of nodes deep; unlink
// them with a work list instead of one nested destructor per node.
impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        let mut detached: Vec<Sequence<T>> = Vec::new();
        let mut next = self.0.take();
        loop {
            while let Some(node) = next {
                next = match Rc::try_unwrap(node) {
                    Ok(Node::One(_, mut tail)) => tail.0.take(),
                    Ok(Node::Lazy(thunk)) => thunk.into_value().and_then(|mut value| value.0.take()),
                    Ok(Node::Composite(segments)) => {
                        segments.drain_into(&mut detached);
                        None
                    }
                    Ok(Node::Generated(_)) | Err(_) => None,
                };
            }
            match detached.pop() {
                Some(mut sequence) => next = sequence.0.take(),
                None => break,
            }
        }
    }
}
