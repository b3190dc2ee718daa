//! Template config loader (strict parsing).

pub mod schema;

use std::fs;

use richmsg_core::error::{Result, RichMessageError};
use tracing::debug;

pub use schema::{ShareTemplate, TemplatesConfig};

pub fn load_from_file(path: &str) -> Result<TemplatesConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RichMessageError::Io(format!("read config failed: {e}")))?;
    let cfg = load_from_str(&s)?;
    debug!(path, "template config loaded");
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<TemplatesConfig> {
    let cfg: TemplatesConfig = serde_yaml::from_str(s)
        .map_err(|e| RichMessageError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
