//! In-memory catalog for the Aura assistant platform prototype.
//!
//! Every registry here is seeded with the platform's demo data and
//! mutated only in process memory. Mutations log through `tracing` and
//! nothing is persisted; every admin action is a local state change.

mod api_key;
mod assistant;
mod category;
mod connector;
mod error;
mod model;
mod prompt;

pub use api_key::{ApiKey, ApiKeyRegistry, CreatedKey, SCOPES, Scope, ScopeSet, scope_sets};
pub use assistant::{Assistant, AssistantRegistry, DEFAULT_ASSISTANT_ID};
pub use category::{Category, CategoryRegistry};
pub use connector::{Connector, ConnectorRegistry, ConnectorStats, SyncReport};
pub use error::CatalogError;
pub use model::{Model, ModelCatalog};
pub use prompt::{MediaType, Prompt, PromptLibrary};
