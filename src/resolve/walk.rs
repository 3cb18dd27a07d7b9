//! Depth-first resolution of a declaration tree.
//!
//! Each declaration is resolved with the settings of its owning project.
//! Members without an `owningProject` inherit the nearest ancestor's.
//! Top-level declarations are independent and are resolved in parallel; the
//! output keeps document order.

use rayon::prelude::*;
use serde::Serialize;

use super::{
    Resolution, explain_excluded_field, explain_field_description, explain_method_description,
    explain_operation_name, explain_required_field, explain_required_parameter, explain_title,
};
use crate::config::Config;
use crate::model::{Declaration, DeclarationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// Nesting level, 0 for top-level declarations.
    #[serde(skip)]
    pub depth: usize,
    #[serde(flatten)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum Metadata {
    Class {
        title: Resolution<String>,
    },
    Method {
        operation_name: Resolution<String>,
        description: Resolution<String>,
    },
    Field {
        description: Resolution<String>,
        excluded: Resolution<bool>,
        required: Resolution<bool>,
    },
    Parameter {
        required: Resolution<bool>,
    },
}

/// Resolve `declarations` and all of their members.
pub fn resolve_tree(declarations: &[Declaration], config: &Config) -> Vec<ResolvedDeclaration> {
    declarations
        .par_iter()
        .map(|decl| {
            let mut out = Vec::new();
            walk(decl, config, None, 0, &mut out);
            out
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn walk<'a>(
    decl: &'a Declaration,
    config: &Config,
    inherited_project: Option<&'a str>,
    depth: usize,
    out: &mut Vec<ResolvedDeclaration>,
) {
    let project = decl.owning_project.as_deref().or(inherited_project);
    out.push(resolve_one(decl, config, project, depth));

    for child in &decl.children {
        walk(child, config, project, depth + 1, out);
    }
}

fn resolve_one(
    decl: &Declaration,
    config: &Config,
    project: Option<&str>,
    depth: usize,
) -> ResolvedDeclaration {
    let settings = config.settings_for(project);

    let metadata = match decl.kind {
        DeclarationKind::Class => Metadata::Class {
            title: explain_title(decl, settings),
        },
        DeclarationKind::Method => Metadata::Method {
            operation_name: explain_operation_name(decl, settings),
            description: explain_method_description(decl, settings),
        },
        DeclarationKind::Field => Metadata::Field {
            description: explain_field_description(decl),
            excluded: explain_excluded_field(decl, settings),
            required: explain_required_field(decl, settings),
        },
        DeclarationKind::Parameter => Metadata::Parameter {
            required: explain_required_parameter(decl, settings),
        },
    };

    ResolvedDeclaration {
        kind: decl.kind,
        name: decl.simple_name.clone(),
        depth,
        metadata,
    }
}
