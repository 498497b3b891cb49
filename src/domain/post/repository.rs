// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::{CategoryFilter, PostId};
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Assigns a fresh identifier and inserts the record.
    async fn create(&self, post: NewPost) -> DomainResult<Post>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    /// Full replacement of the record at `id`. `Ok(None)` when nothing was stored there.
    async fn update(&self, id: PostId, post: NewPost) -> DomainResult<Option<Post>>;
    /// Idempotent; removing an absent id is not an error.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<Post>>;
    async fn find_featured(&self) -> DomainResult<Vec<Post>>;
    /// Sorted by the string-encoded date, descending.
    async fn find_recent(&self, limit: u32) -> DomainResult<Vec<Post>>;
    async fn find_by_category(&self, filter: &CategoryFilter) -> DomainResult<Vec<Post>>;
    /// Case-insensitive substring match on title, excerpt, content or any tag.
    async fn search(&self, query: &str) -> DomainResult<Vec<Post>>;
    /// Posts other than `id` sharing its category or at least one tag, in store order.
    /// Fails with `NotFound` when `id` itself is absent.
    async fn find_related(&self, id: PostId, limit: u32) -> DomainResult<Vec<Post>>;
    /// Distinct category values, in store order.
    async fn distinct_categories(&self) -> DomainResult<Vec<String>>;
    /// Categories by post count descending, ties by name ascending.
    async fn popular_categories(&self, limit: u32) -> DomainResult<Vec<String>>;
}
