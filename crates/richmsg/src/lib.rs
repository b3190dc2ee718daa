//! Top-level facade crate for richmsg.
//!
//! Re-exports the message model and the card templates so users can depend on a single crate.

pub mod core {
    pub use richmsg_core::*;
}

pub mod templates {
    pub use richmsg_templates::*;
}
