//! Template-ready documentation contexts
//!
//! One context is produced per message or service declaration and is
//! rendered into exactly one output file. Contexts are built once and
//! never mutated; by the time a description lands here it has already
//! been cleaned of markup by the flag parser.

use serde::Serialize;

/// Boolean annotations extracted from a declaration comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldFlags {
    pub mandatory: bool,
}

/// One documented message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldContext {
    pub name: String,
    pub type_label: String,
    pub description: Option<String>,
    pub flags: FieldFlags,
}

/// One documented message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageContext {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldContext>,
}

/// One documented RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodContext {
    pub name: String,
}

/// One documented service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceContext {
    pub name: String,
    pub description: Option<String>,
    pub methods: Vec<MethodContext>,
}

/// Documentation context for a single declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DocContext {
    Message(MessageContext),
    Service(ServiceContext),
}

impl DocContext {
    /// Declaration name as written in the schema
    pub fn name(&self) -> &str {
        match self {
            DocContext::Message(message) => &message.name,
            DocContext::Service(service) => &service.name,
        }
    }

    /// Template this context renders through
    pub fn template_id(&self) -> &'static str {
        match self {
            DocContext::Message(_) => "message",
            DocContext::Service(_) => "service",
        }
    }

    /// Output file name, derived deterministically from the declaration name
    pub fn file_name(&self) -> String {
        format!("{}-{}.adoc", self.template_id(), self.name())
    }
}

/// A named output file handed back to the host compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let message = DocContext::Message(MessageContext {
            name: "Order".to_string(),
            description: None,
            fields: vec![],
        });
        assert_eq!(message.file_name(), "message-Order.adoc");
        assert_eq!(message.template_id(), "message");

        let service = DocContext::Service(ServiceContext {
            name: "Greeter".to_string(),
            description: None,
            methods: vec![],
        });
        assert_eq!(service.file_name(), "service-Greeter.adoc");
        assert_eq!(service.template_id(), "service");
    }
}
