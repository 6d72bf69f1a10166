/// Errors that can occur while constructing a [`Duration`](crate::Duration)
/// or a [`TimeOfDay`](crate::TimeOfDay).
///
/// Arithmetic on values that already exist never produces an error, with the
/// single exception of [`Duration::multiply`](crate::Duration::multiply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// A string was required but the input was empty
    #[error("input is empty")]
    Empty,
    /// The input does not match the canonical string form of the type
    #[error("input does not match the expected format")]
    Format,
    /// A numeric component lies outside of the range allowed for it
    #[error("value out of range")]
    OutOfRange,
}
