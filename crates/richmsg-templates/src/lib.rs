//! richmsg templates: ready-made XML cards and their configuration.
//!
//! [`share`] builds the standard link-share card. The constants it uses live
//! in [`ShareTemplate`], which can be overridden from a strict YAML file via
//! [`config::load_from_file`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod share;

pub use config::{ShareTemplate, TemplatesConfig};
pub use share::{share, share_with};
