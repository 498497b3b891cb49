pub mod database;
pub mod mail;
pub mod repositories;
pub mod templates;
