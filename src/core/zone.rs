use serde::{Deserialize, Serialize};

/// Grid zone code, for example `PT` or `DE`.
#[derive(
    Clone,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct Zone(String);

impl From<&str> for Zone {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}
