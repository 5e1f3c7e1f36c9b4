//! protodoc CLI
//!
//! AsciiDoc documentation generator for protobuf schemas. With no
//! subcommand the binary acts as a protoc plugin: it reads a
//! `CodeGeneratorRequest` from stdin and writes a
//! `CodeGeneratorResponse` to stdout, so `protoc --adoc_out=docs/
//! api.proto` works once the binary is on PATH. The subcommands run the
//! same pipeline standalone against a serialized `FileDescriptorSet`.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use prost::Message;
use prost_types::compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::{FileDescriptorProto, FileDescriptorSet};
use protodoc_common::DocContext;
use protodoc_docgen::CommentLog;
use protodoc_render::DocRenderer;

#[derive(Parser)]
#[command(name = "protoc-gen-adoc")]
#[command(version, about = "Generate AsciiDoc documentation from compiled protobuf schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .adoc files from a serialized FileDescriptorSet
    #[command(after_help = "EXAMPLES:\n  \
        # Compile the schema with source comments, then generate docs\n  \
        protoc --descriptor_set_out=api.pb --include_source_info api.proto\n  \
        protoc-gen-adoc generate --descriptor-set api.pb --output ./docs\n\n  \
        # Keep the comment correlation log for debugging\n  \
        protoc-gen-adoc generate --descriptor-set api.pb --log-file protodoc.log")]
    Generate {
        /// Path to the FileDescriptorSet (protoc --descriptor_set_out)
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./docs")]
        output: PathBuf,

        /// Write the (path, comment) diagnostic log to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Parse a FileDescriptorSet and print the documentation contexts as JSON
    #[command(after_help = "EXAMPLES:\n  \
        protoc-gen-adoc parse --descriptor-set api.pb")]
    Parse {
        /// Path to the FileDescriptorSet (protoc --descriptor_set_out)
        #[arg(short, long)]
        descriptor_set: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => plugin_command(),
        Some(Commands::Generate {
            descriptor_set,
            output,
            log_file,
        }) => generate_command(&descriptor_set, &output, log_file.as_deref()),
        Some(Commands::Parse { descriptor_set }) => parse_command(&descriptor_set),
    }
}

/// Run as a protoc plugin over stdin/stdout
///
/// stdout carries the encoded response and nothing else; anything the
/// host compiler should show the user goes through the error path.
fn plugin_command() -> Result<()> {
    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read CodeGeneratorRequest from stdin")?;

    let request = CodeGeneratorRequest::decode(input.as_slice())
        .context("Failed to decode CodeGeneratorRequest")?;

    let mut log = comment_log_from_parameter(request.parameter())?;
    let contexts = build_contexts(&request.proto_file, &mut log);

    let renderer = DocRenderer::new().context("Failed to load templates")?;
    let mut files = Vec::new();
    for context in &contexts {
        let rendered = renderer
            .render(context)
            .with_context(|| format!("Failed to render {}", context.file_name()))?;
        files.push(code_generator_response::File {
            name: Some(rendered.name),
            content: Some(rendered.content),
            ..Default::default()
        });
    }

    let response = CodeGeneratorResponse {
        file: files,
        ..Default::default()
    };

    let mut out = Vec::new();
    response
        .encode(&mut out)
        .context("Failed to encode CodeGeneratorResponse")?;
    std::io::stdout()
        .write_all(&out)
        .context("Failed to write CodeGeneratorResponse to stdout")?;

    Ok(())
}

/// Generate documentation files from a descriptor set on disk
fn generate_command(descriptor_set: &Path, output: &Path, log_file: Option<&Path>) -> Result<()> {
    println!(
        "{} Reading descriptor set: {}",
        "→".cyan(),
        descriptor_set.display()
    );

    let file_set = read_descriptor_set(descriptor_set)?;

    let mut log = match log_file {
        Some(path) => CommentLog::to_file(path)
            .with_context(|| format!("Failed to open comment log {}", path.display()))?,
        None => CommentLog::disabled(),
    };

    let contexts = build_contexts(&file_set.file, &mut log);
    println!(
        "{} Built {} documentation contexts",
        "✓".green(),
        contexts.len()
    );

    let renderer = DocRenderer::new().context("Failed to load templates")?;
    renderer
        .generate_to_directory(&contexts, output)
        .context("Failed to write documentation files")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for context in &contexts {
        println!("  📄 {}/{}", output.display(), context.file_name());
    }

    Ok(())
}

/// Print the documentation contexts for a descriptor set as JSON
fn parse_command(descriptor_set: &Path) -> Result<()> {
    let file_set = read_descriptor_set(descriptor_set)?;

    let mut log = CommentLog::disabled();
    let contexts = build_contexts(&file_set.file, &mut log);

    let json =
        serde_json::to_string_pretty(&contexts).context("Failed to serialize contexts")?;
    println!("{}", json);

    Ok(())
}

fn read_descriptor_set(path: &Path) -> Result<FileDescriptorSet> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read descriptor set {}", path.display()))?;

    FileDescriptorSet::decode(bytes.as_slice()).context("Failed to decode FileDescriptorSet")
}

/// Build contexts for every schema file, flattened in request order
fn build_contexts(files: &[FileDescriptorProto], log: &mut CommentLog) -> Vec<DocContext> {
    files
        .iter()
        .flat_map(|file| protodoc_docgen::build_file(file, log))
        .collect()
}

/// Parse the plugin parameter (protoc --adoc_opt=log=PATH)
///
/// The comment log stays disabled unless the caller asks for it.
fn comment_log_from_parameter(parameter: &str) -> Result<CommentLog> {
    for option in parameter.split(',').filter(|option| !option.is_empty()) {
        if let Some(path) = option.strip_prefix("log=") {
            return CommentLog::to_file(Path::new(path))
                .with_context(|| format!("Failed to open comment log {}", path));
        }
    }

    Ok(CommentLog::disabled())
}
