pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewSubscriber, Subscriber};
pub use repository::SubscriberRepository;
pub use value_objects::{SubscriberEmail, SubscriberId};
