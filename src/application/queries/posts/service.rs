use std::sync::Arc;

use crate::domain::post::PostRepository;

pub const DEFAULT_RECENT_LIMIT: u32 = 3;
pub const DEFAULT_RELATED_LIMIT: u32 = 2;
pub const DEFAULT_POPULAR_LIMIT: u32 = 5;

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostRepository>) -> Self {
        Self { read_repo }
    }

    /// Zero means "use the default"; any positive limit is passed through.
    pub(super) const fn normalize_limit(limit: u32, default: u32) -> u32 {
        if limit == 0 { default } else { limit }
    }
}
