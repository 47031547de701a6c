//! End-to-end scenarios exercising the public API the way clients use it.

use lazyseq::codec::{utf8, CodecError};
use lazyseq::{seq, Scan, Sequence};

fn big() -> Sequence<i32> {
    Sequence::concat_all((1..=16).map(Sequence::one).chain([seq![42], seq![60]]))
}

#[test]
fn concatenated_arrays_materialize_in_order() {
    let joined = Sequence::from_vec(vec![1, 2, 3]).concat(&Sequence::from_vec(vec![4, 5]));
    assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn join_with_colon() {
    let digits = Sequence::from_vec(vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(digits.join(":"), "1:2:3:4:5:6");
}

#[test]
fn find_and_skip_agree() {
    let big = big();
    assert_eq!(big.find(|x| *x == 42), Some(42));
    assert_eq!(big.skip(16).first(), Some(42));
}

#[test]
fn quantifiers_over_mixed_sequence() {
    let big = big();
    assert!(big.every(|x| *x > 0));
    assert!(!big.every(|x| *x < 20));
    assert!(big.some(|x| *x > 50));
    assert!(!big.some(|x| *x > 100));
}

#[test]
fn utf8_decoder_handles_max_code_point_and_truncation() {
    let full = utf8::decode(&seq![0xf4, 0x8f, 0xbf, 0xbf]).to_vec();
    assert_eq!(full, vec![Ok(0x10ffff)]);

    let truncated = utf8::decode(&seq![0xf4, 0x8f, 0xbf]).to_vec();
    assert_eq!(
        truncated,
        vec![Err(CodecError::UnexpectedEnd {
            bytes: vec![0xf4, 0x8f, 0xbf]
        })]
    );
}

#[test]
fn every_combinator_preserves_empty_input() {
    let empty: Sequence<i32> = Sequence::from_vec(Vec::new());

    assert!(empty.map(|x| x * 2).to_vec().is_empty());
    assert!(empty.flat_map(|x| seq![x, x]).to_vec().is_empty());
    assert!(empty.scan(identity_step()).to_vec().is_empty());
    assert!(empty.state_scan((), |(), x| (Some(x), ())).to_vec().is_empty());
    assert!(empty.entries().to_vec().is_empty());
    assert!(empty.skip(3).to_vec().is_empty());
    assert_eq!(empty.first(), None);
}

fn identity_step() -> Scan<i32, i32> {
    Scan::new(|x: i32| (x, identity_step()))
}

#[test]
fn million_identity_concats_then_next() {
    let mut x = big();
    for _ in 0..1_000_000 {
        x = Sequence::empty().concat(&x);
    }
    let (head, _) = x.next().unwrap();
    assert_eq!(head, 1);
}

#[test]
fn million_appended_singletons_then_next() {
    let mut x = big();
    for i in 0..1_000_000 {
        x = x.concat(&Sequence::one(i));
    }
    let (head, rest) = x.next().unwrap();
    assert_eq!(head, 1);
    assert_eq!(rest.skip(17).first(), Some(0));
    assert_eq!(x.fold(0usize, |count, _| count + 1), 1_000_018);
}

#[test]
fn concat_of_materialized_million_then_next() {
    let values = Sequence::generate(Some(1_000_000)).to_vec();
    let x = Sequence::from_vec(values).concat(&big().map(|v| v as usize));
    assert_eq!(x.first(), Some(0));
    assert_eq!(x.skip(1_000_016).first(), Some(42));
}

#[test]
fn concat_of_hundred_thousand_generated_sequences() {
    let parts = Sequence::generate(Some(100_000)).map(|n| Sequence::generate(Some(n))).to_vec();
    let x = Sequence::concat_all(parts);
    assert_eq!(x.first(), Some(0));
}

#[test]
fn flattened_generated_blocks_match_concat_all() {
    let blocks = Sequence::generate(Some(50)).map(|n| Sequence::generate(Some(n)));
    let flattened = blocks.flatten().to_vec();
    let concatenated = Sequence::concat_all(blocks.to_vec()).to_vec();
    assert_eq!(flattened, concatenated);
    assert_eq!(flattened.len(), 49 * 50 / 2);
}
