//! Template loading and management

use protodoc_common::{GeneratorError, Result};
use tera::Tera;

/// Load the embedded message and service templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template("message", include_str!("../templates/message.adoc.tera"))
        .map_err(|e| GeneratorError::Render(format!("Failed to load message template: {}", e)))?;

    tera.add_raw_template("service", include_str!("../templates/service.adoc.tera"))
        .map_err(|e| GeneratorError::Render(format!("Failed to load service template: {}", e)))?;

    Ok(tera)
}
