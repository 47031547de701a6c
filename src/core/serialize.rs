//! Serde support for finite sequences.

use super::error::SequenceError;
use super::sequence::Sequence;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};

impl<T> Serialize for Sequence<T>
where
    T: Serialize + Clone + 'static,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_unbounded() {
            return Err(S::Error::custom(SequenceError::Unbounded));
        }
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for Sequence<T>
where
    T: Deserialize<'de> + Clone + 'static,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Sequence::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;

    #[test]
    fn sequence_serializes_as_json_array() {
        let json = serde_json::to_string(&seq![1, 2, 3]).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[test]
    fn unbounded_sequence_refuses_to_serialize() {
        let result = serde_json::to_string(&Sequence::generate(None));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("unbounded"));
    }

    #[test]
    fn sequence_deserializes_from_json_array() {
        let sequence: Sequence<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(sequence.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }
}
