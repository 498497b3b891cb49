// src/infrastructure/templates.rs
use crate::application::{
    ApplicationResult,
    dto::EmailNotification,
    error::ApplicationError,
    ports::template::{EmailTemplate, TemplateRenderer},
};
use askama::Template;

#[derive(Template)]
#[template(path = "email/new_post.html")]
struct NewPostTemplate<'a> {
    title: &'a str,
    excerpt: &'a str,
    author: &'a str,
    category: &'a str,
    read_time: &'a str,
    tags: &'a [String],
    post_url: &'a str,
}

impl<'a> From<&'a EmailNotification> for NewPostTemplate<'a> {
    fn from(data: &'a EmailNotification) -> Self {
        Self {
            title: &data.title,
            excerpt: &data.excerpt,
            author: &data.author,
            category: &data.category,
            read_time: &data.read_time,
            tags: &data.tags,
            post_url: &data.post_url,
        }
    }
}

/// Compiled-in HTML email templates.
#[derive(Debug, Default, Clone)]
pub struct AskamaTemplateRenderer;

impl TemplateRenderer for AskamaTemplateRenderer {
    fn render(
        &self,
        template: EmailTemplate,
        data: &EmailNotification,
    ) -> ApplicationResult<String> {
        let rendered = match template {
            EmailTemplate::NewPost => NewPostTemplate::from(data).render(),
        };

        rendered.map_err(|err| {
            ApplicationError::notification(format!("render template {}: {err}", template.name()))
        })
    }
}
