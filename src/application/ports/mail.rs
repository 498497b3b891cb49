// src/application/ports/mail.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One HTML message addressed to every recipient at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEmail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send_html(&self, email: HtmlEmail) -> ApplicationResult<()>;
}
