//! richmsg core: rich instant-messaging content and the XML card builder.
//!
//! This crate defines the rich message variants (app cards, JSON/XML service
//! messages, long-message and merged-forward references), their type tags,
//! and the builder that renders the templated XML card payload. It carries no
//! transport dependencies: the rendered text is handed to an external encoder.
//!
//! # Known limitation
//! Field values are interpolated into the XML template verbatim. Nothing is
//! escaped, so values containing `'`, `<`, `>` or `&` produce malformed XML.
//! Sanitizing input is the caller's job.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Construction and
//! rendering are infallible; the only `Result`s come from type-name lookup
//! and from deserializing message records.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod message;
pub mod xml;

/// Shared result type.
pub use error::{Result, RichMessageError};
pub use message::{
    LightApp, MessageKey, MessageType, RichContent, RichMessage, ServiceKind, ServiceMessage,
};
#[allow(deprecated)]
pub use xml::{build_xml_message, build_xml_message_default, ItemBuilder, XmlMessageBuilder};
