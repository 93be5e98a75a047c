use num::{BigInt, Zero};
use reconstruct_maths::{Point, PointSet};

use crate::error::RecoveryError;
use crate::sharing::ThresholdSecretSharingScheme;

/// Shamir's secret sharing scheme over the integers. Shares are solutions `(x, f(x))` of a polynomial `f` of degree
/// `threshold - 1` and the secret is its constant term `f(0)`.
pub struct ShamirSecretSharing;

impl ThresholdSecretSharingScheme<BigInt, Point> for ShamirSecretSharing {
    type Error = RecoveryError;

    /// Interpolates the secret using the Lagrange interpolation method. Of all given shares, the `threshold` ones with
    /// the lowest indices are used and the rest is ignored, so the same input always selects the same subset. The
    /// remaining shares are not checked for consistency with the selected ones.
    /// #Parameters:
    /// - `shares` at least `threshold` shares with pairwise distinct indices, in any order
    /// - `threshold` the number of shares required, i.e. the degree of the polynomial plus one
    ///
    /// #Output
    /// The secret, or an error if the shares do not determine an integer secret
    fn reconstruct_secret(shares: &[Point], threshold: usize) -> Result<BigInt, RecoveryError> {
        if threshold == 0 {
            return Err(RecoveryError::InvalidThreshold {
                n: shares.len(),
                k: threshold,
            });
        }

        if shares.len() < threshold {
            return Err(RecoveryError::InsufficientShares {
                threshold,
                available: shares.len(),
            });
        }

        let selected = PointSet::new(shares.to_vec())?.select_lowest(threshold);
        Ok(selected.interpolate_at(&BigInt::zero())?)
    }
}
