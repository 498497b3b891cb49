// src/infrastructure/repositories/mongo_subscriber.rs
use super::map_mongo;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscriber::{
    NewSubscriber, Subscriber, SubscriberEmail, SubscriberId, SubscriberRepository,
};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct MongoSubscriberRepository {
    collection: Collection<SubscriberDocument>,
}

impl MongoSubscriberRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SubscriberDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    email: String,
}

impl TryFrom<SubscriberDocument> for Subscriber {
    type Error = DomainError;

    fn try_from(document: SubscriberDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SubscriberId::from(document.id),
            email: SubscriberEmail::new(document.email)?,
        })
    }
}

#[async_trait]
impl SubscriberRepository for MongoSubscriberRepository {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let subscriber = Subscriber {
            id: SubscriberId::generate(),
            email: subscriber.email,
        };
        let document = SubscriberDocument {
            id: subscriber.id.into(),
            email: subscriber.email.as_str().to_string(),
        };

        self.collection
            .insert_one(document)
            .await
            .map_err(map_mongo)?;
        Ok(subscriber)
    }

    async fn list_all(&self) -> DomainResult<Vec<Subscriber>> {
        let cursor = self.collection.find(doc! {}).await.map_err(map_mongo)?;
        let documents: Vec<SubscriberDocument> = cursor.try_collect().await.map_err(map_mongo)?;

        // A blank address cannot be mailed; skip it instead of failing the whole list.
        Ok(documents
            .into_iter()
            .filter_map(|document| match Subscriber::try_from(document) {
                Ok(subscriber) => Some(subscriber),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed subscriber record");
                    None
                }
            })
            .collect())
    }
}
