//! Thinking-mode display preference.

/// The user's thinking-mode preference, resolved against the selected
/// model's capability.
///
/// `available` tracks whether the current model supports a thinking
/// phase at all; switching to a model without support force-disables
/// the preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinkingMode {
    enabled: bool,
    available: bool,
}

impl ThinkingMode {
    /// Creates the preference for a model with the given support.
    /// Starts disabled; the user opts in.
    pub fn for_model(thinking_supported: bool) -> Self {
        Self {
            enabled: false,
            available: thinking_supported,
        }
    }

    /// Updates availability when the selected model changes.
    pub fn set_model_support(&mut self, thinking_supported: bool) {
        self.available = thinking_supported;
        if !self.available {
            self.enabled = false;
        }
    }

    /// Flips the preference. No-op when the model lacks support.
    pub fn toggle(&mut self) {
        if self.available {
            self.enabled = !self.enabled;
        }
    }

    /// Returns `true` when replies should carry a thinking phase.
    #[inline]
    pub fn active(&self) -> bool {
        self.enabled && self.available
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn available(&self) -> bool {
        self.available
    }
}
