use super::{PostQueryService, list::to_dtos};
use crate::application::{dto::PostDto, error::ApplicationResult};

pub struct SearchPostsQuery {
    pub query: String,
}

impl PostQueryService {
    /// A blank query browses everything, same as `list_posts`.
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        if query.query.trim().is_empty() {
            return self.list_posts().await;
        }

        let posts = self.read_repo.search(&query.query).await?;
        Ok(to_dtos(posts))
    }
}
