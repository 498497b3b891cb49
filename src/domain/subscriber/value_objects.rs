// src/domain/subscriber/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use mongodb::bson::oid::ObjectId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(ObjectId);

impl SubscriberId {
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn to_hex(self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for SubscriberId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<SubscriberId> for ObjectId {
    fn from(value: SubscriberId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
