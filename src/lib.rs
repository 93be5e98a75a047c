//! Reconstruction of a secret from a threshold of its Shamir shares. Shares are read from a JSON document in which
//! every share value may be encoded in its own radix; the secret is recovered by exact Lagrange interpolation at zero.

pub mod document;
pub mod error;
pub mod sharing;

pub use document::{recover_secret_from_str, EncodedShare, ShareDocument};
pub use error::RecoveryError;
pub use reconstruct_maths::{Point, PointSet};
pub use sharing::shamir_secret_sharing::ShamirSecretSharing;
pub use sharing::ThresholdSecretSharingScheme;
