//! Error type shared by every container in the crate.

use thiserror::Error;

/// Failure signal for the fallible container operations.
///
/// Every variant is raised before any mutation is observed, so a container
/// that returned an error is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Reading or removing an extreme element (`pop`, `dequeue`, `peek`, `last`)
    /// of a container holding no elements.
    #[error("container is empty")]
    Empty,
    /// An index fell outside the valid range.
    ///
    /// For insertion the valid range is `0..=len`; for access and removal it is `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A count argument (`take`, `drop`, `split_off`) exceeded the length.
    #[error("invalid count {n} for length {len}")]
    InvalidArgument { n: usize, len: usize },
}

/// Convenience alias used by all fallible operations.
pub type Result<T> = core::result::Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(ContainerError::Empty.to_string(), "container is empty");
        assert_eq!(
            ContainerError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 out of range for length 3"
        );
        assert_eq!(
            ContainerError::InvalidArgument { n: 5, len: 4 }.to_string(),
            "invalid count 5 for length 4"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ContainerError::Empty);
    }
}
