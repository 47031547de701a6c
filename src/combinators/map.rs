//! Element-wise transforms and flattening.

use crate::core::Sequence;
use std::rc::Rc;

fn map_from<T, R, F>(input: Sequence<T>, f: Rc<F>) -> Sequence<R>
where
    T: Clone + 'static,
    R: 'static,
    F: Fn(T) -> R + 'static,
{
    Sequence::defer(move || match input.next() {
        Some((head, tail)) => {
            let value = f(head);
            Sequence::cons(value, map_from(tail, f))
        }
        None => Sequence::empty(),
    })
}

fn flatten_from<T>(outer: Sequence<Sequence<T>>) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::defer(move || match outer.next() {
        Some((inner, rest)) => inner.concat(&flatten_from(rest)),
        None => Sequence::empty(),
    })
}

fn take_from<T>(input: Sequence<T>, count: usize) -> Sequence<T>
where
    T: Clone + 'static,
{
    if count == 0 {
        return Sequence::empty();
    }
    Sequence::defer(move || match input.next() {
        Some((head, tail)) => Sequence::cons(head, take_from(tail, count - 1)),
        None => Sequence::empty(),
    })
}

fn take_while_from<T, P>(input: Sequence<T>, predicate: Rc<P>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    Sequence::defer(move || match input.next() {
        Some((head, tail)) if predicate(&head) => {
            Sequence::cons(head, take_while_from(tail, predicate))
        }
        _ => Sequence::empty(),
    })
}

impl<T: Clone + 'static> Sequence<T> {
    /// Lazily apply `f` to every element.
    ///
    /// `f` runs once per element actually observed, no matter how many
    /// times the resulting sequence is replayed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{seq, Sequence};
    ///
    /// let doubled = seq![1, 2, 3].map(|x| x * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    ///
    /// let evens = Sequence::generate(None).map(|x| x * 2);
    /// assert_eq!(evens.skip(10).first(), Some(20));
    /// ```
    pub fn map<R, F>(&self, f: F) -> Sequence<R>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        map_from(self.clone(), Rc::new(f))
    }

    /// `map` followed by `flatten`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let expanded = seq![0, 1, 2].flat_map(|x| seq![x, x * 2, x * 3]);
    /// assert_eq!(expanded.to_vec(), vec![0, 0, 0, 1, 2, 3, 2, 4, 6]);
    /// ```
    pub fn flat_map<R, F>(&self, f: F) -> Sequence<R>
    where
        R: Clone + 'static,
        F: Fn(T) -> Sequence<R> + 'static,
    {
        self.map(f).flatten()
    }

    /// Keep only the elements matching `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.flat_map(move |value| {
            if predicate(&value) {
                Sequence::one(value)
            } else {
                Sequence::empty()
            }
        })
    }

    /// The first `count` elements, or all of them if there are fewer.
    pub fn take(&self, count: usize) -> Self {
        take_from(self.clone(), count)
    }

    /// The longest prefix whose elements all match `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        take_while_from(self.clone(), Rc::new(predicate))
    }
}

impl<T: Clone + 'static> Sequence<Sequence<T>> {
    /// Concatenate every inner sequence, in order, lazily.
    ///
    /// Each boundary between inner sequences costs one deferred step; empty
    /// inner sequences are skipped without recursion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazyseq::{seq, Sequence};
    ///
    /// let nested = seq![seq![1, 2], Sequence::empty(), seq![3]];
    /// assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(&self) -> Sequence<T> {
        flatten_from(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;
    use std::cell::Cell;

    #[test]
    fn map_preserves_order() {
        let words = seq!["a", "bb", "ccc"].map(str::len);
        assert_eq!(words.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn map_of_empty_is_empty() {
        let empty: Sequence<i32> = Sequence::from_vec(Vec::new());
        assert!(empty.map(|x| x * 2).to_vec().is_empty());
    }

    #[test]
    fn map_runs_once_per_observed_element() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mapped = seq![1, 2, 3, 4].map(move |x| {
            counter.set(counter.get() + 1);
            x + 1
        });

        assert_eq!(mapped.first(), Some(2));
        assert_eq!(calls.get(), 1);

        assert_eq!(mapped.to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(mapped.to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn map_is_lazy_over_infinite_input() {
        let squares = Sequence::generate(None).map(|x| x * x);
        assert_eq!(squares.take(4).to_vec(), vec![0, 1, 4, 9]);
    }

    #[test]
    fn flatten_skips_long_runs_of_empty_inners() {
        let nested = Sequence::generate(Some(1_000_000))
            .map(|i| if i == 999_999 { Sequence::one(i) } else { Sequence::empty() });
        assert_eq!(nested.flatten().to_vec(), vec![999_999]);
    }

    #[test]
    fn flatten_of_infinite_outer_is_lazy() {
        let blocks = Sequence::generate(None).map(|n| Sequence::generate(Some(n)));
        assert_eq!(blocks.flatten().take(6).to_vec(), vec![0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn flat_map_matches_map_then_flatten() {
        let input = seq![0, 1, 2, 3];
        let f = |x: i32| seq![x, x * 2, x * 3];
        assert_eq!(input.flat_map(f).to_vec(), input.map(f).flatten().to_vec());
    }

    #[test]
    fn filter_keeps_matching_elements() {
        let odd = Sequence::generate(Some(10)).filter(|x| x % 2 == 1);
        assert_eq!(odd.to_vec(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn take_stops_early() {
        assert_eq!(seq![1, 2, 3].take(2).to_vec(), vec![1, 2]);
        assert_eq!(seq![1, 2, 3].take(10).to_vec(), vec![1, 2, 3]);
        assert!(seq![1, 2, 3].take(0).is_empty());
    }

    #[test]
    fn take_while_stops_at_first_failure() {
        let prefix = seq![1, 2, 5, 1].take_while(|x| *x < 3);
        assert_eq!(prefix.to_vec(), vec![1, 2]);
    }
}
