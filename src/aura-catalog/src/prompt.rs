//! Prompt library.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Media type a prompt operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
    Document,
    Image,
    Text,
    Video,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaType::Audio => "audio",
            MediaType::Document => "document",
            MediaType::Image => "image",
            MediaType::Text => "text",
            MediaType::Video => "video",
        };
        f.write_str(s)
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "audio" => Ok(MediaType::Audio),
            "document" => Ok(MediaType::Document),
            "image" => Ok(MediaType::Image),
            "text" => Ok(MediaType::Text),
            "video" => Ok(MediaType::Video),
            other => Err(format!("unknown media type: {other}")),
        }
    }
}

/// A reusable prompt template in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub description: String,
    pub media: MediaType,
    pub category: String,
}

/// The browseable prompt library with search and media filters.
#[derive(Debug)]
pub struct PromptLibrary {
    prompts: Vec<Prompt>,
}

impl Default for PromptLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptLibrary {
    pub fn new() -> Self {
        Self {
            prompts: seed_prompts(),
        }
    }

    pub fn list(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Filters by free-text query (title or description) and by media
    /// types. An empty type list matches everything, as in the library
    /// page's filter bar.
    pub fn filter<'a>(&'a self, query: &str, media: &[MediaType]) -> Vec<&'a Prompt> {
        let needle = query.to_lowercase();
        self.prompts
            .iter()
            .filter(|p| {
                let matches_search = needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle);
                let matches_media = media.is_empty() || media.contains(&p.media);
                matches_search && matches_media
            })
            .collect()
    }
}

fn prompt(id: &str, title: &str, description: &str, media: MediaType, category: &str) -> Prompt {
    Prompt {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        media,
        category: category.into(),
    }
}

fn seed_prompts() -> Vec<Prompt> {
    vec![
        prompt(
            "1",
            "Ad copy from video",
            "Write a creative ad copy based on a video.",
            MediaType::Video,
            "marketing",
        ),
        prompt(
            "2",
            "Advertising Campaign",
            "The AI is tasked to create advertising campaigns for its clients.",
            MediaType::Text,
            "marketing",
        ),
        prompt(
            "3",
            "Airline reviews",
            "The prompt asks the model to write a summary based on customer reviews of an \
             airline company.",
            MediaType::Text,
            "analysis",
        ),
        prompt(
            "4",
            "Animal Information Chatbot",
            "The animal assistant chatbot answers questions about animals.",
            MediaType::Text,
            "education",
        ),
        prompt(
            "5",
            "Audio Summarization",
            "Summarize an audio file",
            MediaType::Audio,
            "transcription",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_round_trip() {
        for s in ["audio", "document", "image", "text", "video"] {
            let media: MediaType = s.parse().unwrap();
            assert_eq!(media.to_string(), s);
        }
        assert!("hologram".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let library = PromptLibrary::new();
        assert_eq!(library.filter("", &[]).len(), library.list().len());
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let library = PromptLibrary::new();
        assert_eq!(library.filter("airline", &[]).len(), 1);
        // "summary" appears in a description only.
        assert!(!library.filter("summary", &[]).is_empty());
        assert!(library.filter("no such prompt", &[]).is_empty());
    }

    #[test]
    fn test_media_filter() {
        let library = PromptLibrary::new();
        let texts = library.filter("", &[MediaType::Text]);
        assert_eq!(texts.len(), 3);
        let mixed = library.filter("", &[MediaType::Audio, MediaType::Video]);
        assert_eq!(mixed.len(), 2);
    }

    #[test]
    fn test_combined_filters() {
        let library = PromptLibrary::new();
        let hits = library.filter("campaign", &[MediaType::Text]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Advertising Campaign");
        assert!(library.filter("campaign", &[MediaType::Video]).is_empty());
    }
}
