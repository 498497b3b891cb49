use super::{DEFAULT_RELATED_LIMIT, PostQueryService, list::to_dtos};
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::PostId,
};

pub struct ListRelatedPostsQuery {
    pub id: String,
    pub limit: u32,
}

impl PostQueryService {
    /// Same category or at least one shared tag, never the post itself.
    /// An unknown `id` is reported as not found by the repository.
    pub async fn list_related_posts(
        &self,
        query: ListRelatedPostsQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let id = PostId::parse(&query.id)?;
        let limit = Self::normalize_limit(query.limit, DEFAULT_RELATED_LIMIT);

        let related = self
            .read_repo
            .find_related(id, limit)
            .await?
            .into_iter()
            .filter(|post| post.id != id)
            .take(limit as usize)
            .collect();
        Ok(to_dtos(related))
    }
}
