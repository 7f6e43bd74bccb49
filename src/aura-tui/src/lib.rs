//! Terminal chat interface for the Aura assistant platform.
//!
//! Renders the conversation transcript with simulated streaming
//! replies: a pulsing thinking container while reasoning text reveals,
//! then the response with a trailing cursor. All message mutation
//! happens on the event loop in [`run`].

pub mod app;
pub mod run;
pub mod terminal;
pub mod view;
pub mod widgets;

pub use app::ChatApp;
pub use run::run_chat;
pub use terminal::AuraTerminal;
