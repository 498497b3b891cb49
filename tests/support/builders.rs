// tests/support/builders.rs
use codercat_server::application::dto::PostInput;

/// A fully-populated post body; tweak fields with struct update syntax.
pub fn post_input(title: &str, category: &str, tags: &[&str]) -> PostInput {
    PostInput {
        title: title.to_string(),
        excerpt: format!("{title} excerpt"),
        content: format!("{title} content"),
        author: "Cat".to_string(),
        author_image: "https://img.test/cat.png".to_string(),
        date: "2024-01-01".to_string(),
        read_time: "5 min".to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        image: "https://img.test/cover.png".to_string(),
        featured: false,
    }
}

pub fn post_json(title: &str, category: &str, tags: &[&str]) -> serde_json::Value {
    serde_json::to_value(post_input(title, category, tags)).unwrap()
}
