use crate::domain::post::{NewPost, Post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub author_image: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub featured: bool,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            author: post.author,
            author_image: post.author_image,
            date: post.date,
            read_time: post.read_time,
            category: post.category,
            tags: post.tags,
            image: post.image,
            featured: post.featured,
        }
    }
}

/// Post body accepted on create and full update. Missing fields default to
/// empty values; any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub author_image: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub featured: bool,
}

impl From<PostInput> for NewPost {
    fn from(input: PostInput) -> Self {
        Self {
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            author: input.author,
            author_image: input.author_image,
            date: input.date,
            read_time: input.read_time,
            category: input.category,
            tags: input.tags,
            image: input.image,
            featured: input.featured,
        }
    }
}
