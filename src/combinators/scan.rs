//! Scans: combinators that carry "what to do next" across elements.
//!
//! Two flavours are provided:
//! - [`Sequence::scan`] threads a [`Scan`] step value. Each step returns one
//!   output and the step to use for the following element, so
//!   "first element differs from the rest" patterns need no mutable state.
//! - [`Sequence::state_scan`] threads an explicit state value. Each step may
//!   emit zero or more outputs, which suits decoders that buffer partial
//!   input.

use crate::core::Sequence;
use std::fmt;
use std::rc::Rc;

/// A continuation-style scan step.
///
/// Applying a step to an input yields an output together with the step to
/// apply to the next input.
///
/// # Example
///
/// ```rust
/// use lazyseq::{seq, Scan};
///
/// fn rest() -> Scan<&'static str, String> {
///     Scan::new(|word: &str| (format!(", {word}"), rest()))
/// }
///
/// let first = Scan::new(|word: &str| (word.to_string(), rest()));
/// let listed = seq!["a", "b", "c"].scan(first);
/// assert_eq!(listed.to_vec(), vec!["a", ", b", ", c"]);
/// ```
pub struct Scan<A, B>(Rc<dyn Fn(A) -> (B, Scan<A, B>)>);

impl<A, B> Clone for Scan<A, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for Scan<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scan")
    }
}

impl<A: 'static, B: 'static> Scan<A, B> {
    /// Create a step from a function returning an output and the next step.
    pub fn new<F>(step: F) -> Self
    where
        F: Fn(A) -> (B, Scan<A, B>) + 'static,
    {
        Self(Rc::new(step))
    }

    /// Apply the step to one input.
    pub fn apply(&self, input: A) -> (B, Scan<A, B>) {
        (self.0)(input)
    }
}

fn scan_from<A, B>(input: Sequence<A>, step: Scan<A, B>) -> Sequence<B>
where
    A: Clone + 'static,
    B: 'static,
{
    Sequence::defer(move || match input.next() {
        Some((head, tail)) => {
            let (output, next) = step.apply(head);
            Sequence::cons(output, scan_from(tail, next))
        }
        None => Sequence::empty(),
    })
}

fn state_scan_from<A, S, B, F, I>(input: Sequence<A>, state: S, step: Rc<F>) -> Sequence<Sequence<B>>
where
    A: Clone + 'static,
    S: 'static,
    B: Clone + 'static,
    F: Fn(S, A) -> (I, S) + 'static,
    I: IntoIterator<Item = B>,
{
    Sequence::defer(move || match input.next() {
        Some((head, tail)) => {
            let (outputs, next) = step(state, head);
            let outputs: Sequence<B> = outputs.into_iter().collect();
            Sequence::cons(outputs, state_scan_from(tail, next, step))
        }
        None => Sequence::empty(),
    })
}

fn entry_step<T: 'static>(index: usize) -> Scan<T, (usize, T)> {
    Scan::new(move |value| ((index, value), entry_step(index + 1)))
}

impl<T: Clone + 'static> Sequence<T> {
    /// Feed every element through a chain of [`Scan`] steps, starting with
    /// `initial`, producing one output per element.
    pub fn scan<B: 'static>(&self, initial: Scan<T, B>) -> Sequence<B> {
        scan_from(self.clone(), initial)
    }

    /// Thread `initial` state through every element.
    ///
    /// `step` receives the current state and an element, and returns the
    /// outputs for that element (zero or more, in order) together with the
    /// next state. The outputs of all steps are flattened into the result.
    ///
    /// Steps that buffer input usually need a final flush: scan over
    /// [`terminated`](Self::terminated) input and handle `None` as the end
    /// of input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// // Emit pairs, and a lone trailing element at the end of input.
    /// let pairs = seq![1, 2, 3, 4, 5].terminated().state_scan(None, |held, input| {
    ///     match (held, input) {
    ///         (None, Some(x)) => (vec![], Some(x)),
    ///         (Some(a), Some(b)) => (vec![(a, Some(b))], None),
    ///         (Some(a), None) => (vec![(a, None)], None),
    ///         (None, None) => (vec![], None),
    ///     }
    /// });
    /// assert_eq!(pairs.to_vec(), vec![(1, Some(2)), (3, Some(4)), (5, None)]);
    /// ```
    pub fn state_scan<S, B, F, I>(&self, initial: S, step: F) -> Sequence<B>
    where
        S: 'static,
        B: Clone + 'static,
        F: Fn(S, T) -> (I, S) + 'static,
        I: IntoIterator<Item = B>,
    {
        state_scan_from(self.clone(), initial, Rc::new(step)).flatten()
    }

    /// Running accumulation, emitting the accumulator after each element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let sums = seq![1, 2, 3, 4].inclusive_scan(0, |acc, x| acc + x);
    /// assert_eq!(sums.to_vec(), vec![1, 3, 6, 10]);
    /// ```
    pub fn inclusive_scan<B, F>(&self, initial: B, f: F) -> Sequence<B>
    where
        B: Clone + 'static,
        F: Fn(&B, T) -> B + 'static,
    {
        self.state_scan(initial, move |acc, value| {
            let next = f(&acc, value);
            (Some(next.clone()), next)
        })
    }

    /// Running accumulation, emitting the accumulator before each element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let sums = seq![1, 2, 3, 4].exclusive_scan(0, |acc, x| acc + x);
    /// assert_eq!(sums.to_vec(), vec![0, 1, 3, 6]);
    /// ```
    pub fn exclusive_scan<B, F>(&self, initial: B, f: F) -> Sequence<B>
    where
        B: Clone + 'static,
        F: Fn(&B, T) -> B + 'static,
    {
        self.state_scan(initial, move |acc, value| {
            let next = f(&acc, value);
            (Some(acc), next)
        })
    }

    /// Every element wrapped in `Some`, followed by a single `None`
    /// end-of-input marker.
    pub fn terminated(&self) -> Sequence<Option<T>> {
        self.map(Some).concat(&Sequence::one(None))
    }

    /// Pair every element with its zero-based position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let entries = seq!['a', 'b'].entries();
    /// assert_eq!(entries.to_vec(), vec![(0, 'a'), (1, 'b')]);
    /// ```
    pub fn entries(&self) -> Sequence<(usize, T)> {
        self.scan(entry_step(0))
    }
}
