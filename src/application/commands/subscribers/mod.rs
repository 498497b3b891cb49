use std::sync::Arc;

use crate::{
    application::{dto::SubscriberDto, error::ApplicationResult},
    domain::subscriber::{NewSubscriber, SubscriberEmail, SubscriberRepository},
};

pub struct SubscribeCommand {
    pub email: String,
}

pub struct SubscriberCommandService {
    repo: Arc<dyn SubscriberRepository>,
}

impl SubscriberCommandService {
    pub fn new(repo: Arc<dyn SubscriberRepository>) -> Self {
        Self { repo }
    }

    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let email = SubscriberEmail::new(command.email)?;
        let created = self.repo.insert(NewSubscriber { email }).await?;
        tracing::info!(subscriber_id = %created.id.to_hex(), "subscriber registered");
        Ok(created.into())
    }
}
