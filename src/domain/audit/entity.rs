// src/domain/audit/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::tenant::{OrganizationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            other => Err(DomainError::validation(format!("unknown audit action: {other}"))),
        }
    }
}

/// Domain nouns that can appear in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Organization,
    Market,
    Vertical,
    Company,
    Contact,
    Campaign,
    Activity,
    Asset,
    Result,
    PlaybookTemplate,
    PlaybookStep,
    DigitalSnapshot,
    EmailTemplate,
    DocumentTemplate,
    GeneratedDocument,
}

impl EntityType {
    pub const ALL: [EntityType; 15] = [
        EntityType::Organization,
        EntityType::Market,
        EntityType::Vertical,
        EntityType::Company,
        EntityType::Contact,
        EntityType::Campaign,
        EntityType::Activity,
        EntityType::Asset,
        EntityType::Result,
        EntityType::PlaybookTemplate,
        EntityType::PlaybookStep,
        EntityType::DigitalSnapshot,
        EntityType::EmailTemplate,
        EntityType::DocumentTemplate,
        EntityType::GeneratedDocument,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Organization => "organization",
            EntityType::Market => "market",
            EntityType::Vertical => "vertical",
            EntityType::Company => "company",
            EntityType::Contact => "contact",
            EntityType::Campaign => "campaign",
            EntityType::Activity => "activity",
            EntityType::Asset => "asset",
            EntityType::Result => "result",
            EntityType::PlaybookTemplate => "playbook_template",
            EntityType::PlaybookStep => "playbook_step",
            EntityType::DigitalSnapshot => "digital_snapshot",
            EntityType::EmailTemplate => "email_template",
            EntityType::DocumentTemplate => "document_template",
            EntityType::GeneratedDocument => "generated_document",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown entity type: {s}")))
    }
}

/// A row ready to be appended to the audit trail.
#[derive(Debug, Clone)]
pub struct NewAuditLogEntry {
    pub organization_id: Option<OrganizationId>,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub action: AuditAction,
    pub user_id: Option<UserId>,
    pub user_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub changed_fields: Option<Vec<String>>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    pub id: i64,
    pub organization_id: Option<OrganizationId>,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub action: AuditAction,
    pub user_id: Option<UserId>,
    pub user_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub changed_fields: Option<Vec<String>>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<Uuid>,
}
