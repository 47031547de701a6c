//! Macros for ergonomic sequence construction.

/// Build a finite sequence from a list of elements.
///
/// # Example
///
/// ```
/// use lazyseq::seq;
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
///
/// let nothing: lazyseq::Sequence<i32> = seq![];
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::core::Sequence::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::core::Sequence::from_vec(vec![$($value),+])
    };
}
