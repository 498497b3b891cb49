use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{errors::DomainError, post::PostId},
};

pub struct GetPostByIdQuery {
    pub id: String,
}

impl PostQueryService {
    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id = PostId::parse(&query.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::post_not_found)?;
        Ok(post.into())
    }
}
