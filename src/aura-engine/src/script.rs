//! Predetermined reply text for the streaming simulation.

/// The full text of a simulated reply, known up front.
///
/// A real integration would replace this with an incremental token
/// stream; the simulator would then append tokens as they arrive
/// instead of revealing pre-known text. That is a materially different
/// contract and is out of scope for the prototype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyScript {
    thinking: Option<String>,
    response: String,
}

impl ReplyScript {
    /// Creates a script with a thinking phase followed by a response.
    ///
    /// An empty thinking text is normalized away: the thinking phase
    /// only exists when there is something to reveal.
    pub fn with_thinking(thinking: impl Into<String>, response: impl Into<String>) -> Self {
        let thinking = thinking.into();
        Self {
            thinking: if thinking.is_empty() {
                None
            } else {
                Some(thinking)
            },
            response: response.into(),
        }
    }

    /// Creates a response-only script.
    pub fn response_only(response: impl Into<String>) -> Self {
        Self {
            thinking: None,
            response: response.into(),
        }
    }

    /// Returns the full thinking text, if the script has one.
    pub fn thinking(&self) -> Option<&str> {
        self.thinking.as_deref()
    }

    /// Returns the full response text.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Returns `true` if this script starts with a thinking phase.
    #[inline]
    pub fn has_thinking(&self) -> bool {
        self.thinking.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_thinking() {
        let script = ReplyScript::with_thinking("reasoning", "answer");
        assert!(script.has_thinking());
        assert_eq!(script.thinking(), Some("reasoning"));
        assert_eq!(script.response(), "answer");
    }

    #[test]
    fn test_empty_thinking_is_normalized() {
        let script = ReplyScript::with_thinking("", "answer");
        assert!(!script.has_thinking());
        assert_eq!(script.thinking(), None);
    }

    #[test]
    fn test_response_only() {
        let script = ReplyScript::response_only("OK");
        assert!(!script.has_thinking());
        assert_eq!(script.response(), "OK");
    }
}
