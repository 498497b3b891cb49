use super::PostCommandService;
use crate::{
    application::{
        dto::{PostDto, PostInput},
        error::ApplicationResult,
    },
    domain::{errors::DomainError, post::PostId},
};

pub struct UpdatePostCommand {
    pub id: String,
    pub post: PostInput,
}

impl PostCommandService {
    /// Full replacement; the stored id is always the one from the command.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::parse(&command.id)?;
        let updated = self
            .write_repo
            .update(id, command.post.into())
            .await?
            .ok_or_else(DomainError::post_not_found)?;
        Ok(updated.into())
    }
}
