//! Metadata resolution.
//!
//! Each resolver walks a fixed, settings-gated [`Chain`] of sources and
//! returns the first usable value. Resolvers never fail: when every source is
//! absent they return `""` or `false`, except the operation name, which falls
//! back to the method's own identifier.
//!
//! ## Module Structure
//!
//! - `chain`: Ordered fallback combinator and [`MetadataSource`]
//! - `walk`: Depth-first resolution of a declaration tree
//!
//! The `explain_*` functions return the value together with its source; the
//! `resolve_*` / `is_*` functions return only the value.

pub mod chain;
pub mod walk;


use std::fmt::Debug;

use tracing::debug;

pub use chain::{Candidate, Chain, MetadataSource, Resolution};
pub use walk::{Metadata, ResolvedDeclaration, resolve_tree};

use crate::annotation::{SwaggerAnnotation, is_annotated_with};
use crate::comment::{body_text, has_tag, tag_value};
use crate::config::Settings;
use crate::model::{Declaration, Modifier};

/// Document title of a class.
///
/// Comment tag, then qualified name (skipped for anonymous and local
/// classes), then simple name; each gated by its `title*` setting.
pub fn explain_title(class: &Declaration, settings: &Settings) -> Resolution<String> {
    let resolution = Chain::<String>::new()
        .step(
            MetadataSource::CommentTag,
            settings.title_use_comment_tag,
            || Some(tag_value(class.doc_comment(), &settings.title_tag)),
        )
        .step(
            MetadataSource::QualifiedName,
            settings.title_use_full_class_name,
            || class.qualified_name.as_deref(),
        )
        .step(
            MetadataSource::SimpleName,
            settings.title_use_simple_class_name,
            || Some(class.simple_name.as_str()),
        )
        .or_default();

    log_resolution("title", class, &resolution);
    resolution
}

pub fn resolve_title(class: &Declaration, settings: &Settings) -> String {
    explain_title(class, settings).value
}

/// Operation name of a method. Never blank for a named method.
pub fn explain_operation_name(method: &Declaration, settings: &Settings) -> Resolution<String> {
    let resolution = Chain::<String>::new()
        .step(
            MetadataSource::Swagger3Operation,
            settings.name_use_swagger3,
            || SwaggerAnnotation::Operation.attribute(method, "name"),
        )
        .step(
            MetadataSource::Swagger2ApiOperation,
            settings.name_use_swagger2,
            || SwaggerAnnotation::ApiOperation.attribute(method, "value"),
        )
        .step(
            MetadataSource::CommentTag,
            settings.name_use_comment_tag,
            || Some(tag_value(method.doc_comment(), &settings.name_tag)),
        )
        .or_else(MetadataSource::SimpleName, || method.simple_name.clone());

    log_resolution("operation name", method, &resolution);
    resolution
}

pub fn resolve_operation_name(method: &Declaration, settings: &Settings) -> String {
    explain_operation_name(method, settings).value
}

/// Description of a method: Swagger v3, Swagger v2, then the comment body.
pub fn explain_method_description(
    method: &Declaration,
    settings: &Settings,
) -> Resolution<String> {
    let resolution = Chain::<String>::new()
        .step(
            MetadataSource::Swagger3Operation,
            settings.desc_use_swagger3,
            || SwaggerAnnotation::Operation.attribute(method, "description"),
        )
        .step(
            MetadataSource::Swagger2ApiOperation,
            settings.desc_use_swagger2,
            || SwaggerAnnotation::ApiOperation.attribute(method, "notes"),
        )
        .or_else(MetadataSource::CommentBody, || {
            body_text(method.doc_comment())
        });

    log_resolution("method description", method, &resolution);
    resolution
}

pub fn resolve_method_description(method: &Declaration, settings: &Settings) -> String {
    explain_method_description(method, settings).value
}

/// Description of a field. Comment body only; annotations are not read.
pub fn explain_field_description(field: &Declaration) -> Resolution<String> {
    let resolution = Chain::<String>::new()
        .step(MetadataSource::CommentBody, true, || {
            field.doc_comment().map(|c| body_text(Some(c)))
        })
        .or_default();

    log_resolution("field description", field, &resolution);
    resolution
}

/// `settings` is accepted for symmetry with the other resolvers.
pub fn resolve_field_description(field: &Declaration, _settings: &Settings) -> String {
    explain_field_description(field).value
}

/// Whether a field is left out of the document: listed by name, `static`,
/// or carrying one of the exclude annotations.
pub fn explain_excluded_field(field: &Declaration, settings: &Settings) -> Resolution<bool> {
    let resolution = Chain::<bool>::new()
        .check(MetadataSource::ExcludedName, true, || {
            settings.exclude_field_names.contains(&field.simple_name)
        })
        .check(MetadataSource::StaticModifier, true, || {
            field.has_modifier(Modifier::Static)
        })
        .check(MetadataSource::ExcludeAnnotation, true, || {
            is_annotated_with(field, &settings.exclude_field_annotation_ids)
        })
        .or_default();

    log_resolution("excluded", field, &resolution);
    resolution
}

pub fn is_excluded_field(field: &Declaration, settings: &Settings) -> bool {
    explain_excluded_field(field, settings).value
}

/// Whether a field is required.
///
/// With `requiredUseCommentTag`, a field that has no doc comment at all
/// counts as required; a field whose comment lacks the required tag does not.
pub fn explain_required_field(field: &Declaration, settings: &Settings) -> Resolution<bool> {
    let resolution = Chain::<bool>::new()
        .check(MetadataSource::RequiredAnnotation, true, || {
            is_annotated_with(field, &settings.required_field_annotation_ids)
        })
        .check(MetadataSource::Swagger3Schema, true, || {
            declares_required(field, SwaggerAnnotation::Schema)
        })
        .check(MetadataSource::Swagger2ApiModelProperty, true, || {
            declares_required(field, SwaggerAnnotation::ApiModelProperty)
        })
        .check(
            MetadataSource::MissingComment,
            settings.required_use_comment_tag,
            || field.doc_comment().is_none(),
        )
        .check(
            MetadataSource::RequiredTag,
            settings.required_use_comment_tag,
            || has_tag(field.doc_comment(), &settings.required_tag_name),
        )
        .or_default();

    log_resolution("required", field, &resolution);
    resolution
}

pub fn is_required_field(field: &Declaration, settings: &Settings) -> bool {
    explain_required_field(field, settings).value
}

/// Whether a parameter is required. Only the required annotations count;
/// Swagger attributes and comment tags are not consulted for parameters.
pub fn explain_required_parameter(param: &Declaration, settings: &Settings) -> Resolution<bool> {
    let resolution = Chain::<bool>::new()
        .check(MetadataSource::RequiredAnnotation, true, || {
            is_annotated_with(param, &settings.required_field_annotation_ids)
        })
        .or_default();

    log_resolution("required", param, &resolution);
    resolution
}

pub fn is_required_parameter(param: &Declaration, settings: &Settings) -> bool {
    explain_required_parameter(param, settings).value
}

/// `required` attribute text containing `true`; anything else is falsy.
fn declares_required(decl: &Declaration, annotation: SwaggerAnnotation) -> bool {
    annotation
        .attribute(decl, "required")
        .is_some_and(|text| text.contains("true"))
}

fn log_resolution<T: Debug>(metadata: &str, decl: &Declaration, resolution: &Resolution<T>) {
    debug!(
        kind = %decl.kind,
        name = %decl.simple_name,
        value = ?resolution.value,
        source = ?resolution.source,
        "resolved {}",
        metadata
    );
}
