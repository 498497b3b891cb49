use crate::domain::post::Post;

/// Template data for the new-post announcement. Built from a freshly created
/// post and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotification {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub post_url: String,
}

impl EmailNotification {
    pub fn from_post(post: &Post, base_url: &str) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            category: post.category.clone(),
            read_time: post.read_time.clone(),
            tags: post.tags.clone(),
            post_url: format!("{}/blogs/{}", base_url.trim_end_matches('/'), post.id),
        }
    }
}
