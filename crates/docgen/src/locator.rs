//! Structural-path construction and source comment lookup
//!
//! `SourceCodeInfo` correlates source comments to declarations through
//! paths: a path is the sequence of (field tag, index) pairs that walks
//! from the file descriptor down to a declaration. The tags used here
//! are descriptor.proto's own field numbers: `message_type` is field 4
//! and `service` is field 6 of `FileDescriptorProto`, `field` is field 2
//! of `DescriptorProto`.

use prost_types::source_code_info::Location;
use prost_types::SourceCodeInfo;

/// FileDescriptorProto.message_type
pub const MESSAGE_TYPE_TAG: i32 = 4;

/// FileDescriptorProto.service
pub const SERVICE_TAG: i32 = 6;

/// DescriptorProto.field
pub const FIELD_TAG: i32 = 2;

/// Path of the i-th top-level message declaration
pub fn message_path(index: usize) -> Vec<i32> {
    vec![MESSAGE_TYPE_TAG, index as i32]
}

/// Path of the i-th top-level service declaration
pub fn service_path(index: usize) -> Vec<i32> {
    vec![SERVICE_TAG, index as i32]
}

/// Path of the j-th field of the message located at `message_path`
pub fn field_path(message_path: &[i32], index: usize) -> Vec<i32> {
    let mut path = message_path.to_vec();
    path.push(FIELD_TAG);
    path.push(index as i32);
    path
}

/// Find the location recorded for `path`
///
/// Entries are scanned in table order and the first exact path match
/// wins; duplicate paths are tolerated.
pub fn locate<'a>(info: Option<&'a SourceCodeInfo>, path: &[i32]) -> Option<&'a Location> {
    info?.location.iter().find(|location| location.path == path)
}

/// Comment attached to the declaration at `path`
///
/// Prefers the leading comment and falls back to the trailing comment;
/// a missing location or a location without comments yields `None`.
pub fn comment_at<'a>(info: Option<&'a SourceCodeInfo>, path: &[i32]) -> Option<&'a str> {
    let location = locate(info, path)?;
    location
        .leading_comments
        .as_deref()
        .or(location.trailing_comments.as_deref())
}
