//! Annotation lookups.
//!
//! Swagger annotations are read through [`SwaggerAnnotation`], a closed table
//! of the four annotation shapes the resolver understands and the attributes
//! each one carries. User-configured annotations (required/excluded markers)
//! are only ever tested for presence via [`is_annotated_with`].

use std::collections::BTreeSet;

use crate::model::{Annotation, Declaration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwaggerAnnotation {
    /// Swagger v2 `@ApiOperation`
    ApiOperation,
    /// Swagger v2 `@ApiModelProperty`
    ApiModelProperty,
    /// Swagger v3 `@Operation`
    Operation,
    /// Swagger v3 `@Schema`
    Schema,
}

impl SwaggerAnnotation {
    pub const fn id(self) -> &'static str {
        match self {
            SwaggerAnnotation::ApiOperation => "io.swagger.annotations.ApiOperation",
            SwaggerAnnotation::ApiModelProperty => "io.swagger.annotations.ApiModelProperty",
            SwaggerAnnotation::Operation => "io.swagger.v3.oas.annotations.Operation",
            SwaggerAnnotation::Schema => "io.swagger.v3.oas.annotations.media.Schema",
        }
    }

    /// Attributes the resolver is allowed to read from this annotation.
    pub const fn known_attributes(self) -> &'static [&'static str] {
        match self {
            SwaggerAnnotation::ApiOperation => &["value", "notes"],
            SwaggerAnnotation::ApiModelProperty => &["required"],
            SwaggerAnnotation::Operation => &["name", "description"],
            SwaggerAnnotation::Schema => &["required"],
        }
    }

    /// Read attribute `name` from this annotation on `decl`.
    ///
    /// Returns `None` for attributes outside [`Self::known_attributes`], even
    /// if the provider reported them.
    pub fn attribute<'a>(self, decl: &'a Declaration, name: &str) -> Option<&'a str> {
        if !self.known_attributes().contains(&name) {
            return None;
        }
        attribute(decl, self.id(), name)
    }
}

/// First annotation on `decl` whose identifier is `annotation_id`.
pub fn find_annotation<'a>(decl: &'a Declaration, annotation_id: &str) -> Option<&'a Annotation> {
    decl.annotations.iter().find(|a| a.id == annotation_id)
}

/// Literal text of `attribute_name` on the first `annotation_id` annotation.
///
/// Later annotations with the same identifier are not consulted, even when
/// the first one lacks the attribute.
pub fn attribute<'a>(
    decl: &'a Declaration,
    annotation_id: &str,
    attribute_name: &str,
) -> Option<&'a str> {
    find_annotation(decl, annotation_id)?
        .attributes
        .get(attribute_name)
        .map(String::as_str)
}

/// True if any annotation on `decl` matches one of `annotation_ids`.
pub fn is_annotated_with(decl: &Declaration, annotation_ids: &BTreeSet<String>) -> bool {
    decl.annotations
        .iter()
        .any(|a| annotation_ids.contains(&a.id))
}
