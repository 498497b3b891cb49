pub mod notifications;
pub mod posts;
pub mod subscribers;

pub use notifications::EmailNotification;
pub use posts::{PostDto, PostInput};
pub use subscribers::SubscriberDto;
