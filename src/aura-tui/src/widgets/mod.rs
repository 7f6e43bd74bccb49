//! Transcript widgets.
//!
//! Each widget turns one piece of the transcript into styled lines;
//! the view concatenates and scrolls them.

mod message_cell;
mod thinking;
mod typing;

pub use message_cell::MessageCell;
pub use thinking::ThinkingContainer;
pub use typing::TypingIndicator;
