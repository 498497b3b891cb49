// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use codercat_server::application::ApplicationResult;
use codercat_server::application::dto::EmailNotification;
use codercat_server::application::error::ApplicationError;
use codercat_server::application::ports::mail::{HtmlEmail, MailSender};
use codercat_server::application::ports::template::{EmailTemplate, TemplateRenderer};
use codercat_server::domain::errors::{DomainError, DomainResult};
use codercat_server::domain::post::{CategoryFilter, NewPost, Post, PostId, PostRepository};
use codercat_server::domain::subscriber::{
    NewSubscriber, Subscriber, SubscriberId, SubscriberRepository,
};

/* -------------------------------- PostRepository -------------------------------- */

/// In-memory post store; insertion order stands in for store order.
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn filtered(&self, keep: impl Fn(&Post) -> bool) -> Vec<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|post| keep(post))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn create(&self, post: NewPost) -> DomainResult<Post> {
        let post = Post::with_id(PostId::generate(), post);
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.filtered(|post| post.id == id).into_iter().next())
    }

    async fn update(&self, id: PostId, post: NewPost) -> DomainResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();
        let Some(slot) = posts.iter_mut().find(|existing| existing.id == id) else {
            return Ok(None);
        };
        *slot = Post::with_id(id, post);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.posts.lock().unwrap().retain(|post| post.id != id);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Post>> {
        Ok(self.filtered(|_| true))
    }

    async fn find_featured(&self) -> DomainResult<Vec<Post>> {
        Ok(self.filtered(|post| post.featured))
    }

    async fn find_recent(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let mut posts = self.filtered(|_| true);
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_by_category(&self, filter: &CategoryFilter) -> DomainResult<Vec<Post>> {
        Ok(self.filtered(|post| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Exact(category) => post.category == *category,
        }))
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Post>> {
        let needle = query.to_lowercase();
        Ok(self.filtered(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle)
                || post
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        }))
    }

    async fn find_related(&self, id: PostId, limit: u32) -> DomainResult<Vec<Post>> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::post_not_found)?;
        let mut related = self.filtered(|post| {
            post.id != id
                && (post.category == current.category
                    || post.tags.iter().any(|tag| current.tags.contains(tag)))
        });
        related.truncate(limit as usize);
        Ok(related)
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for post in self.filtered(|_| true) {
            if !categories.contains(&post.category) {
                categories.push(post.category);
            }
        }
        Ok(categories)
    }

    async fn popular_categories(&self, limit: u32) -> DomainResult<Vec<String>> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for post in self.filtered(|_| true) {
            *counts.entry(post.category).or_default() += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .map(|(category, _)| category)
            .collect())
    }
}

/// Every call fails as if the store were unreachable.
pub struct UnavailablePostRepo;

#[async_trait]
impl PostRepository for UnavailablePostRepo {
    async fn create(&self, _post: NewPost) -> DomainResult<Post> {
        Err(unavailable())
    }
    async fn find_by_id(&self, _id: PostId) -> DomainResult<Option<Post>> {
        Err(unavailable())
    }
    async fn update(&self, _id: PostId, _post: NewPost) -> DomainResult<Option<Post>> {
        Err(unavailable())
    }
    async fn delete(&self, _id: PostId) -> DomainResult<()> {
        Err(unavailable())
    }
    async fn find_all(&self) -> DomainResult<Vec<Post>> {
        Err(unavailable())
    }
    async fn find_featured(&self) -> DomainResult<Vec<Post>> {
        Err(unavailable())
    }
    async fn find_recent(&self, _limit: u32) -> DomainResult<Vec<Post>> {
        Err(unavailable())
    }
    async fn find_by_category(&self, _filter: &CategoryFilter) -> DomainResult<Vec<Post>> {
        Err(unavailable())
    }
    async fn search(&self, _query: &str) -> DomainResult<Vec<Post>> {
        Err(unavailable())
    }
    async fn find_related(&self, _id: PostId, _limit: u32) -> DomainResult<Vec<Post>> {
        Err(unavailable())
    }
    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        Err(unavailable())
    }
    async fn popular_categories(&self, _limit: u32) -> DomainResult<Vec<String>> {
        Err(unavailable())
    }
}

fn unavailable() -> DomainError {
    DomainError::Persistence("store unavailable".into())
}

/* -------------------------------- SubscriberRepository -------------------------------- */

#[derive(Default)]
pub struct InMemorySubscriberRepo {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl InMemorySubscriberRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emails(&self) -> Vec<String> {
        self.subscribers
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.email.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepo {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let subscriber = Subscriber {
            id: SubscriberId::generate(),
            email: subscriber.email,
        };
        self.subscribers.lock().unwrap().push(subscriber.clone());
        Ok(subscriber)
    }

    async fn list_all(&self) -> DomainResult<Vec<Subscriber>> {
        Ok(self.subscribers.lock().unwrap().clone())
    }
}

/* -------------------------------- TemplateRenderer -------------------------------- */

/// Renders a predictable body and remembers the data it was given.
#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: Mutex<Vec<(EmailTemplate, EmailNotification)>>,
}

impl TemplateRenderer for RecordingRenderer {
    fn render(
        &self,
        template: EmailTemplate,
        data: &EmailNotification,
    ) -> ApplicationResult<String> {
        self.rendered
            .lock()
            .unwrap()
            .push((template, data.clone()));
        Ok(format!("<h1>{}</h1><a href=\"{}\">read</a>", data.title, data.post_url))
    }
}

pub struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(
        &self,
        template: EmailTemplate,
        _data: &EmailNotification,
    ) -> ApplicationResult<String> {
        Err(ApplicationError::notification(format!(
            "template {} missing",
            template.name()
        )))
    }
}

/* -------------------------------- MailSender -------------------------------- */

/// Records every send and forwards it to a channel so tests can await the
/// detached fan-out task.
pub struct RecordingMailSender {
    pub sent: Mutex<Vec<HtmlEmail>>,
    notify: mpsc::UnboundedSender<HtmlEmail>,
}

impl RecordingMailSender {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HtmlEmail>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                sent: Mutex::new(Vec::new()),
                notify: tx,
            },
            rx,
        )
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send_html(&self, email: HtmlEmail) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(email.clone());
        let _ = self.notify.send(email);
        Ok(())
    }
}

/// Counts attempts and always fails.
pub struct FailingMailSender {
    attempts: Mutex<usize>,
    notify: mpsc::UnboundedSender<()>,
}

impl FailingMailSender {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                attempts: Mutex::new(0),
                notify: tx,
            },
            rx,
        )
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MailSender for FailingMailSender {
    async fn send_html(&self, _email: HtmlEmail) -> ApplicationResult<()> {
        *self.attempts.lock().unwrap() += 1;
        let _ = self.notify.send(());
        Err(ApplicationError::notification("smtp connection refused"))
    }
}

/// Never finishes within any reasonable deadline.
pub struct HangingMailSender;

#[async_trait]
impl MailSender for HangingMailSender {
    async fn send_html(&self, _email: HtmlEmail) -> ApplicationResult<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}
