use std::sync::Arc;

use crate::{application::notifications::NewPostNotifier, domain::post::PostRepository};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostRepository>,
    pub(super) notifier: Arc<NewPostNotifier>,
}

impl PostCommandService {
    pub fn new(write_repo: Arc<dyn PostRepository>, notifier: Arc<NewPostNotifier>) -> Self {
        Self {
            write_repo,
            notifier,
        }
    }
}
