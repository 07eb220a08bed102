//! Digest formatting and delivery.

mod email;
mod generator;

pub use email::EmailSender;
pub use generator::{ist, DigestGenerator};
