use std::sync::Arc;

use crate::{
    application::{dto::SubscriberDto, error::ApplicationResult},
    domain::subscriber::SubscriberRepository,
};

pub struct SubscriberQueryService {
    repo: Arc<dyn SubscriberRepository>,
}

impl SubscriberQueryService {
    pub fn new(repo: Arc<dyn SubscriberRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_subscribers(&self) -> ApplicationResult<Vec<SubscriberDto>> {
        let subscribers = self.repo.list_all().await?;
        Ok(subscribers.into_iter().map(Into::into).collect())
    }
}
