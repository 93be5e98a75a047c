pub mod shamir_secret_sharing;

/// A threshold secret sharing scheme whose secret of type `T` was split into shares of type `S`, of which any
/// `threshold` suffice to reconstruct the secret. Only the reconstruction half of the scheme is provided.
pub trait ThresholdSecretSharingScheme<T, S> {
    type Error;

    /// Take a slice of shares and reconstruct the secret from them. At least `threshold` shares must be present,
    /// otherwise the secret cannot be reconstructed
    /// #Parameters:
    /// - `shares` a collection of at least `threshold` shares
    /// - `threshold` the threshold the shares were generated upon. This may be less than the actual number of shares
    /// given, in which case the scheme decides which of them to use
    ///
    /// #Output:
    /// Given that `threshold` matches the threshold at generation and enough shares are present, it will return an
    /// instance of `T` that is reconstructed from the shares
    fn reconstruct_secret(shares: &[S], threshold: usize) -> Result<T, Self::Error>;
}
