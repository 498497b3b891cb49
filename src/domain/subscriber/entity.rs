// src/domain/subscriber/entity.rs
use crate::domain::subscriber::value_objects::{SubscriberEmail, SubscriberId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: SubscriberEmail,
}

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
}
