//! Mock reply generator.
//!
//! Supplies the fixed strings streamed in place of a real model call.
//! External collaborator boundary: a real implementation would return a
//! token stream here.

use crate::script::ReplyScript;

/// The canned reasoning text used for every thinking-mode reply.
const THINKING_TEXT: &str = "\
I need to analyze this request carefully. Let me think through this step by step:

1. First, I should understand what the user is asking for
2. Consider the context and any relevant information
3. Think about the best approach to provide a helpful response
4. Structure my response clearly and comprehensively

This appears to be a request that I should handle with care and attention to detail.";

/// Builds the scripted reply for a submission.
///
/// `thinking` should be the resolved thinking preference (enabled and
/// available for the selected model); when set, the reply carries the
/// canned reasoning text ahead of the response.
pub fn simulated_reply(assistant_name: &str, model_name: &str, thinking: bool) -> ReplyScript {
    if thinking {
        ReplyScript::with_thinking(
            THINKING_TEXT,
            format!(
                "This is a simulated response from {assistant_name} using {model_name}. \
                 Since thinking mode is enabled, you can see my reasoning process above. \
                 In a real application, this would be replaced with an actual response \
                 from an AI model that supports thinking mode."
            ),
        )
    } else {
        ReplyScript::response_only(format!(
            "This is a simulated response from {assistant_name} using {model_name}. \
             In a real application, this would be replaced with an actual response \
             from an AI model."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_thinking() {
        let script = simulated_reply("Aura AI", "o1-preview", true);
        assert!(script.has_thinking());
        assert!(script.thinking().unwrap().starts_with("I need to analyze"));
        assert!(script.response().contains("Aura AI"));
        assert!(script.response().contains("o1-preview"));
        assert!(script.response().contains("thinking mode"));
    }

    #[test]
    fn test_reply_without_thinking() {
        let script = simulated_reply("Code Helper", "GPT-4o", false);
        assert!(!script.has_thinking());
        assert!(script.response().contains("Code Helper"));
        assert!(script.response().contains("GPT-4o"));
        assert!(!script.response().contains("thinking mode"));
    }
}
