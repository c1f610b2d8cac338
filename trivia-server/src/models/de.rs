//! Lenient integer fields: the frontend sends ids both as numbers and as
//! numeric strings (form values).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum IntOrString {
    Int(i32),
    Str(String),
}

impl IntOrString {
    pub(crate) fn into_int<E: serde::de::Error>(self) -> Result<i32, E> {
        match self {
            Self::Int(n) => Ok(n),
            Self::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got '{}'", s))),
        }
    }
}

/// Accept `3` as well as `"3"`.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_int()
}
