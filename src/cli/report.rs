//! Report formatting and printing utilities.
//!
//! Separate from the resolver to allow docview to be used as a library.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::resolve::{Metadata, MetadataSource, Resolution, ResolvedDeclaration};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Shown in place of an empty value.
const EMPTY_VALUE: &str = "-";

/// Resolved declarations of one input file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    #[serde(rename = "file")]
    pub path: PathBuf,
    pub declarations: Vec<ResolvedDeclaration>,
}

pub fn print_text(reports: &[FileReport], explain: bool) {
    print_text_to(reports, explain, &mut io::stdout().lock());
}

/// Indented, one line per declaration followed by its metadata.
///
/// ```text
/// api/users.json
///   class UserController
///     title: User management
///     method create
///       operation name: Create user
/// ```
pub fn print_text_to<W: Write>(reports: &[FileReport], explain: bool, writer: &mut W) {
    for report in reports {
        let _ = writeln!(writer, "{}", report.path.display().to_string().bold());

        for decl in &report.declarations {
            let indent = "  ".repeat(decl.depth + 1);
            let _ = writeln!(
                writer,
                "{}{} {}",
                indent,
                decl.kind.to_string().cyan(),
                decl.name.bold()
            );
            print_metadata(&decl.metadata, &indent, explain, writer);
        }
    }

    print_summary(reports, writer);
}

pub fn print_json(reports: &[FileReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

fn print_metadata<W: Write>(metadata: &Metadata, indent: &str, explain: bool, writer: &mut W) {
    let mut line = |label: &str, value: String, source: Option<MetadataSource>| {
        let value = if value.is_empty() {
            EMPTY_VALUE.dimmed().to_string()
        } else {
            value
        };
        let source = match source {
            Some(source) if explain => format!(" ({})", source).dimmed().to_string(),
            _ => String::new(),
        };
        let _ = writeln!(writer, "{}  {}: {}{}", indent, label, value, source);
    };

    match metadata {
        Metadata::Class { title } => {
            line("title", title.value.clone(), title.source);
        }
        Metadata::Method {
            operation_name,
            description,
        } => {
            line("operation name", operation_name.value.clone(), operation_name.source);
            line("description", description.value.clone(), description.source);
        }
        Metadata::Field {
            description,
            excluded,
            required,
        } => {
            line("description", description.value.clone(), description.source);
            line("excluded", flag(excluded), excluded.source);
            line("required", flag(required), required.source);
        }
        Metadata::Parameter { required } => {
            line("required", flag(required), required.source);
        }
    }
}

fn flag(resolution: &Resolution<bool>) -> String {
    resolution.value.to_string()
}

fn print_summary<W: Write>(reports: &[FileReport], writer: &mut W) {
    let declarations: usize = reports.iter().map(|r| r.declarations.len()).sum();
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Resolved {} {} in {} {}",
            declarations,
            if declarations == 1 {
                "declaration"
            } else {
                "declarations"
            },
            reports.len(),
            if reports.len() == 1 { "file" } else { "files" }
        )
        .green()
    );
}
