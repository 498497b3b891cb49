use crate::domain::subscriber::Subscriber;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubscriberDto {
    pub id: String,
    pub email: String,
}

impl From<Subscriber> for SubscriberDto {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            id: subscriber.id.to_hex(),
            email: subscriber.email.into_inner(),
        }
    }
}
