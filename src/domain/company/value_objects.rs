// src/domain/company/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::validation("company id cannot be nil"))
        } else {
            Ok(Self(id))
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<CompanyId> for Uuid {
    fn from(value: CompanyId) -> Self {
        value.0
    }
}

const MAX_NAME_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "company name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Web domain of a company, stored lowercase without scheme or trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDomain(String);

impl CompanyDomain {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let raw = value.into();
        let mut value = raw.trim().to_ascii_lowercase();
        for scheme in ["https://", "http://"] {
            if let Some(stripped) = value.strip_prefix(scheme) {
                value = stripped.to_string();
            }
        }
        let value = value.trim_end_matches('/').to_string();

        if value.is_empty()
            || !value.contains('.')
            || value.starts_with('.')
            || value.ends_with('.')
            || value.chars().any(char::is_whitespace)
            || value.contains('/')
        {
            return Err(DomainError::validation(format!("invalid company domain: {raw}")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeCount(i32);

impl EmployeeCount {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value < 0 {
            Err(DomainError::validation("employee count cannot be negative"))
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
