// src/application/ports/template.rs
use crate::application::{ApplicationResult, dto::EmailNotification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    NewPost,
}

impl EmailTemplate {
    pub fn name(self) -> &'static str {
        match self {
            Self::NewPost => "new_post",
        }
    }
}

pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        template: EmailTemplate,
        data: &EmailNotification,
    ) -> ApplicationResult<String>;
}
