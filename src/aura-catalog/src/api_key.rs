//! API keys and scopes (admin console).
//!
//! A key's secret is generated once at creation and returned in
//! [`CreatedKey`]; only the masked tail is retained afterwards.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::CatalogError;

/// Length of the random part of a generated secret.
const SECRET_LEN: usize = 32;

/// Prefix on every generated secret.
const SECRET_PREFIX: &str = "aura_sk_";

/// One grantable permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub admin_only: bool,
}

const fn scope(name: &'static str, description: &'static str, category: &'static str) -> Scope {
    Scope {
        name,
        description,
        category,
        admin_only: false,
    }
}

const fn admin_scope(name: &'static str, description: &'static str) -> Scope {
    Scope {
        name,
        description,
        category: "Admin",
        admin_only: true,
    }
}

/// All grantable scopes, grouped roughly by API surface.
pub const SCOPES: &[Scope] = &[
    scope("assistants:read", "View and list assistants", "Assistants"),
    scope("assistants:write", "Create and manage assistants", "Assistants"),
    scope("threads:read", "View chat threads", "Threads"),
    scope("threads:write", "Create and manage chat threads", "Threads"),
    scope("messages:read", "View messages in threads", "Messages"),
    scope("messages:write", "Create and send messages", "Messages"),
    scope("runs:execute", "Create and manage assistant runs", "Runs"),
    scope("chat", "Use chat functionality", "General"),
    scope("query", "Execute and manage searches", "General"),
    scope("documents:read", "View accessible documents", "Documents"),
    scope("documents:write", "Create and manage own documents", "Documents"),
    scope("personalization", "Manage personal settings", "General"),
    scope("tools:use", "Execute available tools", "Tools"),
    scope("notifications", "Manage notifications", "General"),
    admin_scope("admin:system", "Core system administration"),
    admin_scope("admin:users", "User management"),
    admin_scope("admin:content", "Content administration"),
    admin_scope("admin:integrations", "Integration management"),
    admin_scope("admin:ai", "AI system configuration"),
    admin_scope("admin:audit", "Monitoring and audit"),
];

/// A named bundle of scopes offered in the create-key dialog.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeSet {
    pub name: &'static str,
    pub description: &'static str,
    pub scopes: &'static [&'static str],
}

/// The predefined scope bundles.
pub fn scope_sets() -> &'static [ScopeSet] {
    const SETS: &[ScopeSet] = &[
        ScopeSet {
            name: "readonly",
            description: "Read-only access across the system",
            scopes: &[
                "assistants:read",
                "threads:read",
                "messages:read",
                "documents:read",
            ],
        },
        ScopeSet {
            name: "assistants:full",
            description: "Complete assistant management capabilities",
            scopes: &[
                "assistants:read",
                "assistants:write",
                "threads:read",
                "threads:write",
                "messages:read",
                "messages:write",
                "runs:execute",
            ],
        },
        ScopeSet {
            name: "standard",
            description: "Standard user functionality",
            scopes: &[
                "chat",
                "query",
                "documents:read",
                "personalization",
                "tools:use",
            ],
        },
        ScopeSet {
            name: "content-management",
            description: "Document creation and management",
            scopes: &["documents:read", "documents:write"],
        },
    ];
    SETS
}

/// A stored API key record. The full secret is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    /// Last four characters of the secret, for display.
    pub secret_tail: String,
    pub scopes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub revoked: bool,
}

impl ApiKey {
    /// Masked form shown in key listings.
    pub fn masked(&self) -> String {
        format!("{SECRET_PREFIX}...{}", self.secret_tail)
    }
}

/// A freshly created key together with its one-time secret.
#[derive(Debug)]
pub struct CreatedKey {
    pub record: ApiKey,
    /// Shown exactly once; not recoverable afterwards.
    pub secret: String,
}

/// In-memory API key registry.
#[derive(Debug, Default)]
pub struct ApiKeyRegistry {
    keys: Vec<ApiKey>,
}

impl ApiKeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[ApiKey] {
        &self.keys
    }

    pub fn get(&self, id: &str) -> Option<&ApiKey> {
        self.keys.iter().find(|k| k.id == id)
    }

    /// Creates a key with the given scopes. Unknown scope names are
    /// rejected before anything is stored.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        scopes: Vec<String>,
    ) -> Result<CreatedKey, CatalogError> {
        for s in &scopes {
            if !SCOPES.iter().any(|known| known.name == s) {
                return Err(CatalogError::UnknownScope(s.clone()));
            }
        }

        let random: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(SECRET_LEN)
            .map(char::from)
            .collect();
        let secret = format!("{SECRET_PREFIX}{random}");
        let secret_tail = secret[secret.len() - 4..].to_string();

        let record = ApiKey {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            secret_tail,
            scopes,
            created_at: Utc::now(),
            last_used: None,
            revoked: false,
        };
        info!(id = %record.id, name = %record.name, "api key created");
        self.keys.push(record.clone());
        Ok(CreatedKey { record, secret })
    }

    /// Creates a key from a predefined scope set.
    pub fn create_from_set(
        &mut self,
        name: impl Into<String>,
        set_name: &str,
    ) -> Result<CreatedKey, CatalogError> {
        let set = scope_sets()
            .iter()
            .find(|s| s.name == set_name)
            .ok_or_else(|| CatalogError::not_found("scope set", set_name))?;
        self.create(name, set.scopes.iter().map(|s| s.to_string()).collect())
    }

    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> Result<(), CatalogError> {
        let key = self
            .keys
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| CatalogError::not_found("api key", id))?;
        key.name = name.into();
        info!(%id, "api key renamed");
        Ok(())
    }

    /// Marks a use of the key, refusing revoked keys.
    pub fn touch(&mut self, id: &str) -> Result<(), CatalogError> {
        let key = self
            .keys
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| CatalogError::not_found("api key", id))?;
        if key.revoked {
            return Err(CatalogError::Revoked(key.name.clone()));
        }
        key.last_used = Some(Utc::now());
        Ok(())
    }

    /// Revokes a key. The record stays listed, marked revoked.
    pub fn revoke(&mut self, id: &str) -> Result<(), CatalogError> {
        let key = self
            .keys
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| CatalogError::not_found("api key", id))?;
        if key.revoked {
            return Err(CatalogError::Revoked(key.name.clone()));
        }
        key.revoked = true;
        info!(%id, "api key revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_secret_once() {
        let mut registry = ApiKeyRegistry::new();
        let created = registry
            .create("ci", vec!["chat".into(), "query".into()])
            .unwrap();
        assert!(created.secret.starts_with(SECRET_PREFIX));
        assert_eq!(created.secret.len(), SECRET_PREFIX.len() + SECRET_LEN);

        let stored = registry.get(&created.record.id).unwrap();
        assert_eq!(stored.masked(), format!("aura_sk_...{}", stored.secret_tail));
        assert!(created.secret.ends_with(&stored.secret_tail));
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let mut registry = ApiKeyRegistry::new();
        let err = registry
            .create("bad", vec!["chat".into(), "launch:missiles".into()])
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownScope(ref s) if s == "launch:missiles"));
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_create_from_predefined_set() {
        let mut registry = ApiKeyRegistry::new();
        let created = registry.create_from_set("reader", "readonly").unwrap();
        assert_eq!(created.record.scopes.len(), 4);
        assert!(created.record.scopes.contains(&"documents:read".to_string()));

        assert!(matches!(
            registry.create_from_set("x", "no-such-set"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_touch_and_revoke() {
        let mut registry = ApiKeyRegistry::new();
        let id = registry
            .create("svc", vec!["chat".into()])
            .unwrap()
            .record
            .id;

        registry.touch(&id).unwrap();
        assert!(registry.get(&id).unwrap().last_used.is_some());

        registry.revoke(&id).unwrap();
        assert!(registry.get(&id).unwrap().revoked);
        assert!(matches!(registry.touch(&id), Err(CatalogError::Revoked(_))));
        assert!(matches!(registry.revoke(&id), Err(CatalogError::Revoked(_))));
    }

    #[test]
    fn test_rename() {
        let mut registry = ApiKeyRegistry::new();
        let id = registry
            .create("old-name", vec!["chat".into()])
            .unwrap()
            .record
            .id;
        registry.rename(&id, "new-name").unwrap();
        assert_eq!(registry.get(&id).unwrap().name, "new-name");
    }

    #[test]
    fn test_admin_scopes_flagged() {
        let admin: Vec<_> = SCOPES.iter().filter(|s| s.admin_only).collect();
        assert_eq!(admin.len(), 6);
        assert!(admin.iter().all(|s| s.name.starts_with("admin:")));
        assert_eq!(SCOPES.len(), 20);
    }
}
