//! Integration test for AsciiDoc rendering

use protodoc_common::{
    DocContext, FieldContext, FieldFlags, MessageContext, ServiceContext,
};
use protodoc_render::DocRenderer;
use tempfile::TempDir;

fn order_context() -> DocContext {
    DocContext::Message(MessageContext {
        name: "Order".to_string(),
        description: Some("One customer order".to_string()),
        fields: vec![
            FieldContext {
                name: "id".to_string(),
                type_label: "int64".to_string(),
                description: Some("Unique id. ".to_string()),
                flags: FieldFlags { mandatory: true },
            },
            FieldContext {
                name: "customerRef".to_string(),
                type_label: "<<message-Customer>>".to_string(),
                description: None,
                flags: FieldFlags { mandatory: false },
            },
        ],
    })
}

fn greeter_context() -> DocContext {
    DocContext::Service(ServiceContext {
        name: "Greeter".to_string(),
        description: Some("Says hello".to_string()),
        methods: vec![],
    })
}

#[test]
fn test_render_message() {
    let renderer = DocRenderer::new().unwrap();
    let file = renderer.render(&order_context()).unwrap();

    assert_eq!(file.name, "message-Order.adoc");
    assert!(file.content.contains("= Order"));
    assert!(file.content.contains("One customer order"));
    assert!(file.content.contains("| id"));
    assert!(file.content.contains("| int64"));
    assert!(file.content.contains("yes"));
    assert!(file.content.contains("| customerRef"));
    assert!(file.content.contains("| <<message-Customer>>"));
    assert!(file.content.contains("no"));
}

#[test]
fn test_render_message_without_description() {
    let renderer = DocRenderer::new().unwrap();
    let context = DocContext::Message(MessageContext {
        name: "Empty".to_string(),
        description: None,
        fields: vec![],
    });

    let file = renderer.render(&context).unwrap();

    assert_eq!(file.name, "message-Empty.adoc");
    assert!(file.content.contains("= Empty"));
    assert!(!file.content.contains("|==="), "no field table without fields");
}

#[test]
fn test_render_service() {
    let renderer = DocRenderer::new().unwrap();
    let file = renderer.render(&greeter_context()).unwrap();

    assert_eq!(file.name, "service-Greeter.adoc");
    assert!(file.content.contains("= Greeter"));
    assert!(file.content.contains("Says hello"));
    assert!(
        !file.content.contains("== Methods"),
        "empty method list renders no method section"
    );
}

#[test]
fn test_generate_to_directory() {
    let renderer = DocRenderer::new().unwrap();
    let contexts = vec![order_context(), greeter_context()];

    let temp_dir = TempDir::new().unwrap();
    let result = renderer.generate_to_directory(&contexts, temp_dir.path());
    assert!(result.is_ok(), "Generation failed: {:?}", result);

    assert!(temp_dir.path().join("message-Order.adoc").exists());
    assert!(temp_dir.path().join("service-Greeter.adoc").exists());

    let order = std::fs::read_to_string(temp_dir.path().join("message-Order.adoc")).unwrap();
    assert!(order.contains("= Order"));
}

#[test]
fn test_render_is_deterministic() {
    let renderer = DocRenderer::new().unwrap();
    let context = order_context();

    let first = renderer.render(&context).unwrap();
    let second = renderer.render(&context).unwrap();

    assert_eq!(first, second);
}
