pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use burrow_core::Extension;

/// Trait for generating candidate extensions.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is enforced by the caller, which retries on collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Extension>;
    /// Generates a candidate that can be converted into an extension.
    fn generate(&self) -> Self::Output;
}
