//! # chatcode: Chat Widget Configuration
//!
//! `chatcode` builds the configuration of an embeddable Smartsupp chat widget and
//! guarantees that every constrained option holds one of its allowed values before
//! the configuration is handed to whatever renders the embed snippet.
//!
//! ## Building Blocks
//!
//! - Option enumerations and their string boundary ([`options`])
//! - The configuration state and its JSON document form ([`config`])
//! - The validating builder ([`builder`])
//! - Error handling ([`error`])
//!
//! ## Flow
//!
//! ```text
//! defaults / JSON document → WidgetConfigBuilder setters → WidgetConfig → renderer
//! ```
//!
//! The renderer is outside this crate. [`WidgetConfig`] is plain data that can be
//! read field by field or serialized with `serde`.

pub mod builder;
pub mod config;
pub mod error;
pub mod options;

// Re-exports
pub use builder::*;
pub use config::*;
pub use error::*;
pub use options::*;
