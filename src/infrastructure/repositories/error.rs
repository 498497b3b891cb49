use crate::domain::errors::DomainError;
use mongodb::error::{Error, ErrorKind};

pub fn map_mongo(err: Error) -> DomainError {
    match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(inner) => {
            DomainError::Persistence(format!("malformed document: {inner}"))
        }
        ErrorKind::BsonSerialization(inner) => {
            DomainError::Persistence(format!("unserializable document: {inner}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
