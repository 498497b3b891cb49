// src/infrastructure/mail/smtp.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::mail::{HtmlEmail, MailSender},
};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// Sender address; also the SMTP login.
    pub from: String,
    pub password: String,
}

pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    pub fn new(settings: &SmtpSettings) -> ApplicationResult<Self> {
        let from: Mailbox = settings.from.parse().map_err(|err| {
            ApplicationError::infrastructure(format!("invalid sender address: {err}"))
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|err| ApplicationError::infrastructure(format!("smtp relay: {err}")))?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.from.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send_html(&self, email: HtmlEmail) -> ApplicationResult<()> {
        let message = build_message(&self.from, email)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| ApplicationError::notification(format!("smtp send: {err}")))?;
        Ok(())
    }
}

/// One message, every recipient in the envelope only.
fn build_message(from: &Mailbox, email: HtmlEmail) -> ApplicationResult<Message> {
    let mut builder = Message::builder()
        .from(from.clone())
        .subject(email.subject)
        .header(ContentType::TEXT_HTML);

    let mut accepted = 0usize;
    for recipient in &email.recipients {
        match recipient.parse::<Mailbox>() {
            Ok(mailbox) => {
                builder = builder.bcc(mailbox);
                accepted += 1;
            }
            Err(err) => {
                tracing::warn!(recipient = %recipient, error = %err, "skipping invalid recipient");
            }
        }
    }

    if accepted == 0 {
        return Err(ApplicationError::notification("no valid recipients"));
    }

    builder
        .body(email.html_body)
        .map_err(|err| ApplicationError::notification(format!("build message: {err}")))
}
