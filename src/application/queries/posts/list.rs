use super::{DEFAULT_RECENT_LIMIT, PostQueryService};
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{CategoryFilter, Post},
};

pub struct ListRecentPostsQuery {
    pub limit: u32,
}

pub struct ListPostsByCategoryQuery {
    pub category: String,
}

impl PostQueryService {
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.find_all().await?;
        Ok(to_dtos(posts))
    }

    pub async fn list_featured_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.find_featured().await?;
        Ok(to_dtos(posts))
    }

    pub async fn list_recent_posts(
        &self,
        query: ListRecentPostsQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let limit = Self::normalize_limit(query.limit, DEFAULT_RECENT_LIMIT);
        let posts = self.read_repo.find_recent(limit).await?;
        Ok(to_dtos(posts))
    }

    pub async fn list_posts_by_category(
        &self,
        query: ListPostsByCategoryQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let filter = CategoryFilter::new(query.category);
        let posts = self.read_repo.find_by_category(&filter).await?;
        Ok(to_dtos(posts))
    }
}

pub(super) fn to_dtos(posts: Vec<Post>) -> Vec<PostDto> {
    posts.into_iter().map(Into::into).collect()
}
