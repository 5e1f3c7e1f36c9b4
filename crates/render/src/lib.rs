//! AsciiDoc rendering for documentation contexts
//!
//! This crate turns `DocContext` values into named `.adoc` files,
//! either in-memory (plugin mode hands them back to the host compiler)
//! or written to a directory (standalone CLI mode).

mod templates;

use std::fs;
use std::path::Path;

use protodoc_common::{DocContext, GeneratorError, OutputFile, Result};
use tera::Tera;

/// Documentation renderer
///
/// Holds the loaded template set; one renderer serves a whole
/// generation request.
pub struct DocRenderer {
    tera: Tera,
}

impl DocRenderer {
    /// Load the embedded templates
    pub fn new() -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { tera })
    }

    /// Render one context into its named output file
    pub fn render(&self, context: &DocContext) -> Result<OutputFile> {
        let template_context = match context {
            DocContext::Message(message) => tera::Context::from_serialize(message),
            DocContext::Service(service) => tera::Context::from_serialize(service),
        }
        .map_err(|e| GeneratorError::Render(format!("Context error: {}", e)))?;

        let content = self
            .tera
            .render(context.template_id(), &template_context)
            .map_err(|e| GeneratorError::Render(format!("Template error: {}", e)))?;

        Ok(OutputFile {
            name: context.file_name(),
            content,
        })
    }

    /// Render every context and write the results under `output_dir`
    pub fn generate_to_directory(&self, contexts: &[DocContext], output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir).map_err(|e| {
            GeneratorError::Render(format!("Failed to create output directory: {}", e))
        })?;

        for context in contexts {
            let file = self.render(context)?;
            let output_path = output_dir.join(&file.name);
            fs::write(output_path, file.content)
                .map_err(|e| GeneratorError::Render(format!("Failed to write {}: {}", file.name, e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protodoc_common::MessageContext;

    #[test]
    fn test_renderer_creation() {
        let result = DocRenderer::new();
        assert!(result.is_ok());
    }

    #[test]
    fn test_render_names_file_after_declaration() {
        let renderer = DocRenderer::new().unwrap();
        let context = DocContext::Message(MessageContext {
            name: "Order".to_string(),
            description: None,
            fields: vec![],
        });

        let file = renderer.render(&context).unwrap();
        assert_eq!(file.name, "message-Order.adoc");
    }
}
