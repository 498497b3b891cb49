// src/domain/subscriber/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::subscriber::entity::{NewSubscriber, Subscriber};
use async_trait::async_trait;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber>;
    async fn list_all(&self) -> DomainResult<Vec<Subscriber>>;
}
