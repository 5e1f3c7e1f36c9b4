//! Per-declaration documentation context assembly

use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, ServiceDescriptorProto,
    SourceCodeInfo,
};
use protodoc_common::{DocContext, FieldContext, MessageContext, ServiceContext};

use crate::flags;
use crate::locator;
use crate::sink::CommentLog;
use crate::types;

/// Build the documentation contexts for one schema file
///
/// Messages come first in declaration order, then services. Each
/// context maps to exactly one output file.
pub fn build_file(file: &FileDescriptorProto, log: &mut CommentLog) -> Vec<DocContext> {
    let info = file.source_code_info.as_ref();

    let messages = file
        .message_type
        .iter()
        .enumerate()
        .map(|(index, message)| DocContext::Message(build_message(message, index, info, log)));

    let services = file
        .service
        .iter()
        .enumerate()
        .map(|(index, service)| DocContext::Service(build_service(service, index, info)));

    messages.chain(services).collect()
}

/// Build the context for one message declaration
pub fn build_message(
    message: &DescriptorProto,
    index: usize,
    info: Option<&SourceCodeInfo>,
    log: &mut CommentLog,
) -> MessageContext {
    if let Some(info) = info {
        for location in &info.location {
            log.record(&location.path, location.leading_comments.as_deref());
        }
    }

    let message_path = locator::message_path(index);
    let description = flags::parse(locator::comment_at(info, &message_path)).text;

    let fields = message
        .field
        .iter()
        .enumerate()
        .map(|(field_index, field)| build_field(field, field_index, info, &message_path))
        .collect();

    MessageContext {
        name: message.name().to_string(),
        description,
        fields,
    }
}

fn build_field(
    field: &FieldDescriptorProto,
    index: usize,
    info: Option<&SourceCodeInfo>,
    message_path: &[i32],
) -> FieldContext {
    let path = locator::field_path(message_path, index);
    let parsed = flags::parse(locator::comment_at(info, &path));

    FieldContext {
        name: field.name().to_string(),
        type_label: types::resolve_type(field),
        description: parsed.text,
        flags: parsed.flags,
    }
}

/// Build the context for one service declaration
pub fn build_service(
    service: &ServiceDescriptorProto,
    index: usize,
    info: Option<&SourceCodeInfo>,
) -> ServiceContext {
    let path = locator::service_path(index);
    let description = flags::parse(locator::comment_at(info, &path)).text;

    ServiceContext {
        name: service.name().to_string(),
        description,
        // TODO: populate from service.method once the method section of
        // the service template is settled; emitted empty for now so the
        // shape of existing documents does not change.
        methods: Vec::new(),
    }
}
