// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use mongodb::bson::oid::ObjectId;
use std::fmt;

/// Reserved category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Store-assigned post identifier. Opaque to callers; rendered as 24 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(ObjectId);

impl PostId {
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        ObjectId::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid post id: {value}")))
    }

    pub fn to_hex(self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl From<ObjectId> for PostId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<PostId> for ObjectId {
    fn from(value: PostId) -> Self {
        value.0
    }
}

/// Category facet. `All` is part of the public query surface, not a stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Exact(String),
}

impl CategoryFilter {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Exact(value)
        }
    }
}
