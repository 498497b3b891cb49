// src/infrastructure/repositories/mod.rs
mod error;
mod mongo_post;
mod mongo_subscriber;

pub use error::map_mongo;
pub use mongo_post::MongoPostRepository;
pub use mongo_subscriber::MongoSubscriberRepository;
