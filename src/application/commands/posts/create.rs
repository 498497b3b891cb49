use super::PostCommandService;
use crate::application::{
    dto::{PostDto, PostInput},
    error::ApplicationResult,
};

pub struct CreatePostCommand {
    pub post: PostInput,
}

impl PostCommandService {
    /// Persists the post and hands it to the notifier on a detached task. The
    /// returned result never depends on the fan-out.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let created = self.write_repo.create(command.post.into()).await?;
        tracing::info!(post_id = %created.id, category = %created.category, "post created");

        drop(self.notifier.spawn(created.clone()));
        Ok(created.into())
    }
}
