mod noop;
mod smtp;

pub use noop::NoopMailSender;
pub use smtp::{SmtpMailSender, SmtpSettings};
