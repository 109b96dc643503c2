use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Grants held by an actor beyond organisation membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    /// Publish a dataset, making it live. Independent of organisation
    /// membership.
    PublishDecisionData,
}

/// The authenticated user a request acts as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    /// The organisation the actor belongs to. Service owners act across
    /// organisations and may have none.
    pub organisation_id: Option<String>,
    /// Service-wide administrators bypass organisation membership checks.
    pub service_owner: bool,
    #[serde(default)]
    pub permissions: BTreeSet<Permission>,
}

impl Actor {
    /// An organisation-level editor.
    pub fn member_of(id: impl Into<String>, organisation_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organisation_id: Some(organisation_id.into()),
            service_owner: false,
            permissions: BTreeSet::new(),
        }
    }

    /// A service-wide owner.
    pub fn service_owner(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organisation_id: None,
            service_owner: true,
            permissions: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    /// True when the actor may act for `organisation_id`: service owners
    /// always, everyone else only for their own organisation.
    pub fn acts_for(&self, organisation_id: &str) -> bool {
        self.service_owner || self.organisation_id.as_deref() == Some(organisation_id)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
