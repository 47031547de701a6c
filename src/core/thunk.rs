//! Memoized deferred sequences.

use super::sequence::Sequence;
use std::cell::{Cell, OnceCell};

type Producer<T> = Box<dyn FnOnce() -> Sequence<T>>;

/// A sequence computed on first demand and remembered afterwards.
///
/// The producer runs at most once, so replaying a sequence never recomputes
/// an element that was already produced.
pub(crate) struct Thunk<T> {
    value: OnceCell<Sequence<T>>,
    producer: Cell<Option<Producer<T>>>,
}

impl<T> Thunk<T> {
    pub(crate) fn new<F>(producer: F) -> Self
    where
        F: FnOnce() -> Sequence<T> + 'static,
    {
        Self {
            value: OnceCell::new(),
            producer: Cell::new(Some(Box::new(producer))),
        }
    }

    pub(crate) fn force(&self) -> Sequence<T> {
        self.value
            .get_or_init(|| match self.producer.take() {
                Some(producer) => producer(),
                None => Sequence::empty(),
            })
            .clone()
    }

    /// The memoized value, if the thunk was already forced.
    pub(crate) fn peek(&self) -> Option<&Sequence<T>> {
        self.value.get()
    }

    pub(crate) fn into_value(self) -> Option<Sequence<T>> {
        self.value.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn producer_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let thunk = Thunk::new(move || {
            counter.set(counter.get() + 1);
            Sequence::one(7)
        });

        assert!(thunk.peek().is_none());
        assert_eq!(thunk.force().first(), Some(7));
        assert_eq!(thunk.force().first(), Some(7));
        assert_eq!(calls.get(), 1);
        assert!(thunk.peek().is_some());
    }
}
