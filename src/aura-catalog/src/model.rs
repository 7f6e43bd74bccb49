//! Model catalog.
//!
//! The fixed list of selectable models with their capability metadata.
//! Only `thinking_supported` affects behavior (it gates the thinking
//! phase); the rest is display metadata for the model selector.

use serde::{Deserialize, Serialize};

/// One selectable model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub description: String,
    /// Relative speed, 1-10.
    pub speed: u8,
    /// Relative capability, 1-10.
    pub intelligence: u8,
    pub context_length: String,
    pub thinking_supported: bool,
    pub supported_inputs: Vec<String>,
    pub best_for: Vec<String>,
    pub is_pro: bool,
}

/// The catalog of selectable models, in selector order.
#[derive(Debug)]
pub struct ModelCatalog {
    models: Vec<Model>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self {
            models: seed_models(),
        }
    }

    pub fn list(&self) -> &[Model] {
        &self.models
    }

    pub fn get(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }

    /// The default selection: the first entry in the catalog.
    pub fn default_model(&self) -> &Model {
        &self.models[0]
    }

    /// Models that can run a thinking phase.
    pub fn thinking_capable(&self) -> Vec<&Model> {
        self.models.iter().filter(|m| m.thinking_supported).collect()
    }
}

fn model(
    id: &str,
    name: &str,
    provider: &str,
    description: &str,
    speed: u8,
    intelligence: u8,
    context_length: &str,
    thinking_supported: bool,
    supported_inputs: &[&str],
    best_for: &[&str],
    is_pro: bool,
) -> Model {
    Model {
        id: id.into(),
        name: name.into(),
        provider: provider.into(),
        description: description.into(),
        speed,
        intelligence,
        context_length: context_length.into(),
        thinking_supported,
        supported_inputs: supported_inputs.iter().map(|s| s.to_string()).collect(),
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
        is_pro,
    }
}

fn seed_models() -> Vec<Model> {
    vec![
        model(
            "gpt-4o",
            "GPT-4o",
            "OpenAI",
            "Most advanced multimodal model with excellent reasoning and creative capabilities.",
            8,
            10,
            "128K tokens",
            false,
            &["text", "image", "audio"],
            &["Complex reasoning", "Creative writing", "Code generation"],
            true,
        ),
        model(
            "gpt-4o-mini",
            "GPT-4o Mini",
            "OpenAI",
            "Faster, cost-effective version of GPT-4o with strong performance.",
            9,
            8,
            "128K tokens",
            false,
            &["text", "image"],
            &["Quick tasks", "Summarization", "Q&A"],
            false,
        ),
        model(
            "o1-preview",
            "o1-preview",
            "OpenAI",
            "Advanced reasoning model that thinks step-by-step for complex problems.",
            4,
            10,
            "32K tokens",
            true,
            &["text"],
            &["Math", "Science", "Complex reasoning"],
            true,
        ),
        model(
            "claude-3-5-sonnet",
            "Claude 3.5 Sonnet",
            "Anthropic",
            "Anthropic's most intelligent model with excellent analysis and coding skills.",
            7,
            9,
            "200K tokens",
            false,
            &["text", "image", "pdf"],
            &["Analysis", "Writing", "Code review"],
            true,
        ),
        model(
            "claude-3-haiku",
            "Claude 3 Haiku",
            "Anthropic",
            "Fast and efficient model for everyday tasks and quick responses.",
            10,
            7,
            "200K tokens",
            false,
            &["text", "image"],
            &["Quick responses", "Simple tasks", "Chat"],
            false,
        ),
        model(
            "gemini-pro",
            "Gemini Pro",
            "Google",
            "Google's powerful multimodal AI with strong reasoning capabilities.",
            8,
            8,
            "1M tokens",
            false,
            &["text", "image", "video", "audio"],
            &["Multimodal tasks", "Long context", "Research"],
            false,
        ),
        model(
            "llama-3-70b",
            "Llama 3 70B",
            "Meta",
            "Open-source model with strong performance across various tasks.",
            6,
            8,
            "8K tokens",
            false,
            &["text"],
            &["Open source", "General tasks", "Cost-effective"],
            false,
        ),
        model(
            "mistral-large",
            "Mistral Large",
            "Mistral AI",
            "European AI model with strong multilingual capabilities.",
            7,
            8,
            "32K tokens",
            false,
            &["text"],
            &["Multilingual", "European compliance", "Reasoning"],
            false,
        ),
        model(
            "perplexity-sonar",
            "Sonar Large",
            "Perplexity",
            "Search-augmented model with real-time web access and citations.",
            8,
            8,
            "127K tokens",
            false,
            &["text"],
            &["Web search", "Current events", "Research"],
            false,
        ),
        model(
            "grok-2",
            "Grok-2",
            "xAI",
            "AI with real-time X integration and witty personality.",
            7,
            8,
            "131K tokens",
            false,
            &["text", "image"],
            &["Real-time info", "Social media", "Humor"],
            true,
        ),
    ]
}
