// src/application/notifications/mod.rs
//! New-post announcement fan-out.
//!
//! After a post is stored, every subscriber receives one shared HTML message.
//! The work runs on its own task: the creating request neither waits for it
//! nor learns about its outcome, which is only visible in the logs.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::{
    application::{
        dto::EmailNotification,
        error::{ApplicationError, ApplicationResult},
        ports::{
            MailSenderPort, TemplateRendererPort,
            mail::HtmlEmail,
            template::EmailTemplate,
        },
        queries::subscribers::SubscriberQueryService,
    },
    domain::post::Post,
};

#[derive(Debug, Clone)]
pub struct NotificationSettings {
    /// Public site root used to build post links.
    pub base_url: String,
    /// Deadline for the mail-send call.
    pub send_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    NoSubscribers,
    Sent { recipients: usize },
}

pub struct NewPostNotifier {
    subscribers: Arc<SubscriberQueryService>,
    renderer: Arc<TemplateRendererPort>,
    mailer: Arc<MailSenderPort>,
    settings: NotificationSettings,
}

impl NewPostNotifier {
    pub fn new(
        subscribers: Arc<SubscriberQueryService>,
        renderer: Arc<TemplateRendererPort>,
        mailer: Arc<MailSenderPort>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            subscribers,
            renderer,
            mailer,
            settings,
        }
    }

    /// Run `notify` on a detached task. Failures are logged and never propagated.
    pub fn spawn(self: &Arc<Self>, post: Post) -> JoinHandle<()> {
        let notifier = Arc::clone(self);
        tokio::spawn(async move {
            match notifier.notify(&post).await {
                Ok(NotificationOutcome::NoSubscribers) => {
                    tracing::debug!(post_id = %post.id, "no subscribers, skipping announcement");
                }
                Ok(NotificationOutcome::Sent { recipients }) => {
                    tracing::info!(post_id = %post.id, recipients, "new post announcement sent");
                }
                Err(err) => {
                    tracing::error!(post_id = %post.id, error = %err, "new post announcement failed");
                }
            }
        })
    }

    pub async fn notify(&self, post: &Post) -> ApplicationResult<NotificationOutcome> {
        let recipients: Vec<String> = self
            .subscribers
            .list_subscribers()
            .await?
            .into_iter()
            .map(|subscriber| subscriber.email)
            .collect();

        if recipients.is_empty() {
            return Ok(NotificationOutcome::NoSubscribers);
        }

        let view = EmailNotification::from_post(post, &self.settings.base_url);
        let html_body = self.renderer.render(EmailTemplate::NewPost, &view)?;

        let count = recipients.len();
        let email = HtmlEmail {
            recipients,
            subject: format!("🚀 New Blog Post: {}", post.title),
            html_body,
        };

        tokio::time::timeout(self.settings.send_timeout, self.mailer.send_html(email))
            .await
            .map_err(|_| {
                ApplicationError::notification(format!(
                    "mail send timed out after {}s",
                    self.settings.send_timeout.as_secs()
                ))
            })??;

        Ok(NotificationOutcome::Sent { recipients: count })
    }
}
