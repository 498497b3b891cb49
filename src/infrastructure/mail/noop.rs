use crate::application::{
    ApplicationResult,
    ports::mail::{HtmlEmail, MailSender},
};
use async_trait::async_trait;

/// Stand-in used when no SMTP sender address is configured. Logs and drops.
#[derive(Debug, Default, Clone)]
pub struct NoopMailSender;

#[async_trait]
impl MailSender for NoopMailSender {
    async fn send_html(&self, email: HtmlEmail) -> ApplicationResult<()> {
        tracing::warn!(
            recipients = email.recipients.len(),
            subject = %email.subject,
            "smtp not configured, dropping email"
        );
        Ok(())
    }
}
