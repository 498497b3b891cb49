// src/application/ports/mod.rs
pub mod mail;
pub mod template;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type MailSenderPort = dyn mail::MailSender;
pub type TemplateRendererPort = dyn template::TemplateRenderer;
