//! Assistant gallery.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::CatalogError;

/// Id of the built-in default assistant the chat opens with.
pub const DEFAULT_ASSISTANT_ID: &str = "aura-ai";

/// A published or private assistant in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assistant {
    pub id: String,
    pub name: String,
    /// Single-glyph avatar shown next to the name.
    pub icon: String,
    /// Accent color name for the avatar.
    pub color: String,
    pub description: String,
    pub category: String,
    pub is_public: bool,
    /// Number of tools wired to this assistant.
    pub tool_count: u32,
    /// Suggested openers shown on an empty conversation.
    pub conversation_starters: Vec<String>,
}

/// In-memory assistant registry, seeded with the demo gallery.
#[derive(Debug)]
pub struct AssistantRegistry {
    assistants: Vec<Assistant>,
}

impl Default for AssistantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantRegistry {
    pub fn new() -> Self {
        Self {
            assistants: seed_assistants(),
        }
    }

    /// Looks up an assistant by id.
    pub fn get(&self, id: &str) -> Option<&Assistant> {
        self.assistants.iter().find(|a| a.id == id)
    }

    /// Looks up an assistant, falling back to the default when the id
    /// is unknown. The chat view never fails to open.
    pub fn get_or_default(&self, id: &str) -> &Assistant {
        self.get(id)
            .or_else(|| self.get(DEFAULT_ASSISTANT_ID))
            .expect("default assistant is always seeded")
    }

    /// All assistants, gallery order.
    pub fn list(&self) -> &[Assistant] {
        &self.assistants
    }

    /// Case-insensitive name search.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a Assistant> {
        let needle = query.to_lowercase();
        self.assistants
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Assistants in the given category.
    pub fn by_category<'a>(&'a self, category: &str) -> Vec<&'a Assistant> {
        self.assistants
            .iter()
            .filter(|a| a.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Creates a new assistant and returns its generated id.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<String, CatalogError> {
        let name = name.into();
        if self
            .assistants
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(&name))
        {
            return Err(CatalogError::duplicate("assistant", name));
        }

        let id = Uuid::new_v4().to_string();
        let icon = name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string());
        info!(%id, %name, "assistant created");
        self.assistants.push(Assistant {
            id: id.clone(),
            name,
            icon,
            color: "blue".to_string(),
            description: description.into(),
            category: category.into(),
            is_public: false,
            tool_count: 0,
            conversation_starters: default_starters(),
        });
        Ok(id)
    }

    /// Updates mutable fields of an existing assistant.
    pub fn update(
        &mut self,
        id: &str,
        description: Option<String>,
        category: Option<String>,
        is_public: Option<bool>,
    ) -> Result<(), CatalogError> {
        let assistant = self
            .assistants
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::not_found("assistant", id))?;
        if let Some(description) = description {
            assistant.description = description;
        }
        if let Some(category) = category {
            assistant.category = category;
        }
        if let Some(is_public) = is_public {
            assistant.is_public = is_public;
        }
        info!(%id, "assistant updated");
        Ok(())
    }

    /// Removes an assistant from the gallery.
    pub fn delete(&mut self, id: &str) -> Result<(), CatalogError> {
        let before = self.assistants.len();
        self.assistants.retain(|a| a.id != id);
        if self.assistants.len() == before {
            return Err(CatalogError::not_found("assistant", id));
        }
        info!(%id, "assistant deleted");
        Ok(())
    }
}

fn default_starters() -> Vec<String> {
    [
        "How can you help me today?",
        "What are your capabilities?",
        "Show me what you can do",
        "Let's start a conversation",
    ]
    .map(String::from)
    .to_vec()
}

fn starters(items: [&str; 4]) -> Vec<String> {
    items.map(String::from).to_vec()
}

fn seed_assistants() -> Vec<Assistant> {
    vec![
        Assistant {
            id: "aura-ai".into(),
            name: "Aura AI".into(),
            icon: "A".into(),
            color: "blue".into(),
            description: "The default Aura assistant with knowledge-base search, web search \
                          and image creation tools."
                .into(),
            category: "Productivity".into(),
            is_public: true,
            tool_count: 1,
            conversation_starters: default_starters(),
        },
        Assistant {
            id: "general-gpt".into(),
            name: "General GPT".into(),
            icon: "G".into(),
            color: "green".into(),
            description: "A versatile AI assistant capable of helping with a wide range of \
                          tasks including writing, analysis, coding, and creative projects."
                .into(),
            category: "Writing".into(),
            is_public: true,
            tool_count: 0,
            conversation_starters: starters([
                "Help me write a professional email",
                "Explain quantum computing in simple terms",
                "Create a workout plan for beginners",
                "Suggest ideas for a weekend project",
            ]),
        },
        Assistant {
            id: "internet-search".into(),
            name: "Internet Search".into(),
            icon: "I".into(),
            color: "orange".into(),
            description: "An AI assistant with real-time web search capabilities to find \
                          current information and answer questions about recent events."
                .into(),
            category: "Research & Analysis".into(),
            is_public: true,
            tool_count: 0,
            conversation_starters: starters([
                "What's the latest news about AI developments?",
                "Find current weather in my location",
                "Search for recent scientific discoveries",
                "What are the trending topics today?",
            ]),
        },
        Assistant {
            id: "data-analyzer".into(),
            name: "Data Analyzer".into(),
            icon: "D".into(),
            color: "purple".into(),
            description: "Specialized in data analysis, visualization, and statistical \
                          insights. Upload your data files for comprehensive analysis."
                .into(),
            category: "Research & Analysis".into(),
            is_public: true,
            tool_count: 2,
            conversation_starters: starters([
                "Analyze my sales data trends",
                "Create a visualization for my dataset",
                "Help me understand statistical significance",
                "Generate insights from my CSV file",
            ]),
        },
        Assistant {
            id: "code-helper".into(),
            name: "Code Helper".into(),
            icon: "C".into(),
            color: "cyan".into(),
            description: "A programming-focused assistant that can help with coding, \
                          debugging, code reviews, and technical documentation."
                .into(),
            category: "Programming".into(),
            is_public: true,
            tool_count: 0,
            conversation_starters: starters([
                "Review my Python code for optimization",
                "Help me debug this JavaScript function",
                "Explain this algorithm step by step",
                "Write unit tests for my code",
            ]),
        },
        Assistant {
            id: "content-builder".into(),
            name: "Mindvalley Content Builder".into(),
            icon: "M".into(),
            color: "purple".into(),
            description: "Drafts and refines long-form course and campaign content.".into(),
            category: "Writing".into(),
            is_public: true,
            tool_count: 1,
            conversation_starters: default_starters(),
        },
        Assistant {
            id: "eve-notifications".into(),
            name: "Eve In-App Notifications Generator".into(),
            icon: "E".into(),
            color: "orange".into(),
            description: "Generates in-app notification copy for the Eve product.".into(),
            category: "Programming".into(),
            is_public: false,
            tool_count: 0,
            conversation_starters: default_starters(),
        },
        Assistant {
            id: "fitness-coach".into(),
            name: "Fitness Coach".into(),
            icon: "F".into(),
            color: "pink".into(),
            description: "Personalized workout and nutrition guidance.".into(),
            category: "Lifestyle".into(),
            is_public: true,
            tool_count: 1,
            conversation_starters: default_starters(),
        },
    ]
}
