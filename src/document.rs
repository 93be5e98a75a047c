//! The share document: a JSON object holding the share counts under `keys` and one entry per share, keyed by the
//! share's index.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use num::BigInt;
use reconstruct_maths::{decode, Point};
use serde::Deserialize;

use crate::error::RecoveryError;
use crate::sharing::shamir_secret_sharing::ShamirSecretSharing;
use crate::sharing::ThresholdSecretSharingScheme;

/// Numeric leaves may be written either as JSON numbers or as decimal strings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
enum Scalar {
    Number(u64),
    Text(String),
}

impl Scalar {
    fn parse<T: std::str::FromStr>(&self, field: &str) -> Result<T, RecoveryError> {
        let text = match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.trim().to_owned(),
        };

        text.parse().map_err(|_| RecoveryError::InvalidNumber {
            field: field.to_owned(),
            value: text,
        })
    }
}

#[derive(Deserialize, Debug)]
struct Keys {
    n: Scalar,
    k: Scalar,
}

#[derive(Deserialize, Debug)]
struct RawShare {
    base: Option<Scalar>,
    value: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawDocument {
    keys: Keys,
    // entries are only typed once their key is known to be a share index
    #[serde(flatten)]
    shares: BTreeMap<String, serde_json::Value>,
}

/// A single share as found in the document, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    pub index: u64,
    pub base: u64,
    pub value: String,
}

impl EncodedShare {
    /// Decode the share's value into the point `(index, value)`.
    pub fn decode(&self) -> Result<Point, RecoveryError> {
        let y = decode(&self.value, self.base).map_err(|source| RecoveryError::Decode {
            index: self.index,
            source,
        })?;

        Ok(Point::new(self.index, BigInt::from(y)))
    }
}

/// A validated share document. `threshold <= total` holds and all shares carry both a base and a value and have an
/// index in `1..=total`, ordered ascending by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    pub total: usize,
    pub threshold: usize,
    pub shares: Vec<EncodedShare>,
}

impl ShareDocument {
    pub fn from_json_str(json: &str) -> Result<Self, RecoveryError> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecoveryError> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, RecoveryError> {
        let total: usize = raw.keys.n.parse("keys.n")?;
        let threshold: usize = raw.keys.k.parse("keys.k")?;
        if threshold == 0 || threshold > total {
            return Err(RecoveryError::InvalidThreshold {
                n: total,
                k: threshold,
            });
        }

        let mut shares = Vec::with_capacity(raw.shares.len());
        for (key, entry) in raw.shares {
            let index: u64 = key
                .parse()
                .map_err(|_| RecoveryError::InvalidShareIndex(key.clone()))?;

            // shares outside of 1..=n are not part of the scheme
            if index == 0 || index > total as u64 {
                continue;
            }

            let share: RawShare = serde_json::from_value(entry)?;

            // a share is only usable if both its base and its value are present
            let (base, value) = match (share.base, share.value) {
                (Some(base), Some(value)) => (base, value),
                _ => continue,
            };

            shares.push(EncodedShare {
                index,
                base: base.parse(&format!("{}.base", key))?,
                value,
            });
        }
        shares.sort_by_key(|share| share.index);

        Ok(ShareDocument {
            total,
            threshold,
            shares,
        })
    }

    /// Decode every share of the document into a point, ascending by index.
    pub fn points(&self) -> Result<Vec<Point>, RecoveryError> {
        self.shares.iter().map(EncodedShare::decode).collect()
    }

    /// Reconstruct the secret from the `threshold` lowest-indexed shares of this document.
    pub fn recover_secret(&self) -> Result<BigInt, RecoveryError> {
        ShamirSecretSharing::reconstruct_secret(&self.points()?, self.threshold)
    }
}

/// Parse a share document and reconstruct its secret.
pub fn recover_secret_from_str(json: &str) -> Result<BigInt, RecoveryError> {
    ShareDocument::from_json_str(json)?.recover_secret()
}
