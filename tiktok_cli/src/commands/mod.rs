//! CLI subcommand implementations.

pub mod auth;
pub mod post;
pub mod user;
pub mod videos;
pub mod webhook;
