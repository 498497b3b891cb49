// src/domain/post/entity.rs
use crate::domain::post::value_objects::PostId;

/// Field set shared by creation and full replacement. Dates and read times are
/// stored as the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
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

impl Post {
    /// Attach an identifier to a field set. Used both for inserts and for full
    /// replacements, where the id always comes from the path and never from the body.
    pub fn with_id(id: PostId, fields: NewPost) -> Self {
        let NewPost {
            title,
            excerpt,
            content,
            author,
            author_image,
            date,
            read_time,
            category,
            tags,
            image,
            featured,
        } = fields;

        Self {
            id,
            title,
            excerpt,
            content,
            author,
            author_image,
            date,
            read_time,
            category,
            tags,
            image,
            featured,
        }
    }
}
