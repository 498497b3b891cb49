pub mod posts;
pub mod subscribers;
