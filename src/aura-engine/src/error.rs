//! Streaming error taxonomy.

use thiserror::Error;

/// Failure modes for a streamed reply.
///
/// The local simulation never produces these: cancellation is a normal
/// exit path, not an error. They exist so that swapping the scripted
/// reveal for a real token stream does not change the simulator's
/// public contract. Policy, when they do occur: freeze the displayed
/// partial content, mark the message errored, and never retry
/// automatically (`Interrupted`) or surface a retry affordance
/// (`Timeout`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The upstream stream failed mid-reply.
    #[error("stream interrupted: {0}")]
    Interrupted(String),

    /// No tokens arrived within the expected window.
    #[error("stream timed out after {0} seconds")]
    Timeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StreamError::Interrupted("connection reset".into()).to_string(),
            "stream interrupted: connection reset"
        );
        assert_eq!(
            StreamError::Timeout(30).to_string(),
            "stream timed out after 30 seconds"
        );
    }
}
