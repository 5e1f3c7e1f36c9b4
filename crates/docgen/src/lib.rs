//! Declaration/comment correlation and type resolution
//!
//! This crate turns compiled protobuf descriptors into template-ready
//! documentation contexts. For every message, field, and service
//! declaration it looks up the comment authored above the declaration
//! in the original `.proto` source (via the `SourceCodeInfo` path
//! table), extracts documentation flags from the comment text, and
//! resolves field wire types to cross-referenceable labels.
//!
//! All lookups degrade to well-defined defaults: a declaration without
//! a comment gets no description, a field with an unrecognized type tag
//! gets the "Unknown" label. Nothing in here returns an error.

mod builder;
mod flags;
mod locator;
mod sink;
mod types;

pub use builder::{build_file, build_message, build_service};
pub use flags::{clean, parse, ParsedComment, MANDATORY_MARKER};
pub use locator::{comment_at, field_path, locate, message_path, service_path};
pub use sink::CommentLog;
pub use types::resolve_type;
