// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, subscribers::SubscriberCommandService},
        notifications::{NewPostNotifier, NotificationSettings},
        ports::{MailSenderPort, TemplateRendererPort},
        queries::{posts::PostQueryService, subscribers::SubscriberQueryService},
    },
    domain::{post::PostRepository, subscriber::SubscriberRepository},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub subscriber_commands: Arc<SubscriberCommandService>,
    notifier: Arc<NewPostNotifier>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        renderer: Arc<TemplateRendererPort>,
        mailer: Arc<MailSenderPort>,
        notification_settings: NotificationSettings,
    ) -> Self {
        let subscriber_commands = Arc::new(SubscriberCommandService::new(Arc::clone(
            &subscriber_repo,
        )));
        let subscriber_queries = Arc::new(SubscriberQueryService::new(subscriber_repo));

        let notifier = Arc::new(NewPostNotifier::new(
            subscriber_queries,
            renderer,
            mailer,
            notification_settings,
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&notifier),
        ));
        let post_queries = Arc::new(PostQueryService::new(post_repo));

        Self {
            post_commands,
            post_queries,
            subscriber_commands,
            notifier,
        }
    }

    pub fn notifier(&self) -> Arc<NewPostNotifier> {
        Arc::clone(&self.notifier)
    }
}
