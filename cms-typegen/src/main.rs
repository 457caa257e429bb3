//! # cms-typegen
//!
//! Generate TypeScript types from headless-CMS API schema documents.
//!
//! ## Usage
//!
//! ```bash
//! # Print generated types to stdout
//! cms-typegen ./schemas
//!
//! # Write one .ts file per schema plus the shared reference types
//! cms-typegen ./schemas ./src/types
//!
//! # Preview what would be written
//! cms-typegen ./schemas ./src/types --dry-run
//! ```

use clap::Parser;
use colored::Colorize;
use inflector::Inflector;
use std::path::PathBuf;
use std::process::ExitCode;

use cms_typegen::{
    config::ConfigManager,
    document::SchemaDocument,
    error::CliResult,
    generator::{self, TypeGenerator},
    scanner::SchemaScanner,
    writer::{EmitResult, OutputTarget, OutputWriter},
};

#[derive(Parser)]
#[command(name = "cms-typegen")]
#[command(version, about = "Generate TypeScript types from CMS API schema documents", long_about = None)]
struct Cli {
    /// Directory containing api-<name>-<suffix>.json schema documents
    src_dir: PathBuf,

    /// Output directory for generated files; prints to stdout when omitted
    dest_dir: Option<PathBuf>,

    /// Preview changes without writing files
    #[arg(long)]
    dry_run: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = ConfigManager::load(cli.config.as_deref())?;

    eprintln!("{}", "Scanning for schema documents...".cyan());
    let scanner = SchemaScanner::new(&cli.src_dir);
    let schemas = scanner.scan()?;

    if schemas.is_empty() {
        eprintln!("{}", "No schema documents found.".yellow());
        return Ok(());
    }
    eprintln!(
        "  Found {} schema document(s)",
        schemas.len().to_string().green()
    );

    let target = match &cli.dest_dir {
        Some(dir) => OutputTarget::Directory(dir.clone()),
        None => OutputTarget::Stdout,
    };
    let writer = OutputWriter::new(target, cli.dry_run);
    let generator = TypeGenerator::new(&config.output.shared_module);

    // The shared reference types go out first so generated imports always
    // have a file to point at. Stdout mode prints the schemas only.
    if writer.targets_directory() {
        let shared_file = format!("{}.ts", config.output.shared_module);
        report(&writer.emit(&shared_file, generator::SHARED_TYPES)?);
    }

    for schema in &schemas {
        let doc = SchemaDocument::load(&schema.path)?;
        let singular = if config.naming.singularize {
            schema.name.to_singular()
        } else {
            schema.name.clone()
        };
        let type_name = generator::pascal_case(&singular);

        eprintln!(
            "{} {} -> {}",
            "Generating".cyan(),
            schema.file_name,
            type_name.green()
        );
        let content = generator.generate(&type_name, &doc)?;
        report(&writer.emit(&format!("{singular}.ts"), &content)?);
    }

    Ok(())
}

/// Report the outcome of one emitted file.
fn report(result: &EmitResult) {
    match result {
        EmitResult::Written { path, bytes } => {
            eprintln!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        EmitResult::Printed => {}
        EmitResult::DryRun { path, content } => {
            eprintln!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            eprintln!("{}", "─".repeat(60).dimmed());
            eprint!("{content}");
            eprintln!("{}", "─".repeat(60).dimmed());
        }
    }
}
