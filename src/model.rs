//! Declaration model handed to the resolver by the syntax-tree provider.
//!
//! The provider is external; this module only describes the shape of what it
//! exposes. Everything here deserializes from the camelCase JSON that the
//! `docview resolve` command reads.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comment::DocComment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Method,
    Field,
    Parameter,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
            DeclarationKind::Parameter => "parameter",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Transient,
    Volatile,
    Default,
}

/// A source-language annotation, e.g. `@ApiOperation(value = "Create user")`.
///
/// `id` is the identifier reported by the provider (normally the fully
/// qualified annotation name). Attribute values are kept as literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Annotation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// A class, method, field or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub simple_name: String,
    /// Classes only. Absent for anonymous and local classes.
    #[serde(default)]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc_comment: Option<DocComment>,
    #[serde(default)]
    pub owning_project: Option<String>,
    /// Members: methods and fields of a class, parameters of a method.
    #[serde(default)]
    pub children: Vec<Declaration>,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, simple_name: impl Into<String>) -> Self {
        Self {
            kind,
            simple_name: simple_name.into(),
            qualified_name: None,
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            doc_comment: None,
            owning_project: None,
            children: Vec::new(),
        }
    }

    pub fn class(simple_name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Class, simple_name)
    }

    pub fn method(simple_name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Method, simple_name)
    }

    pub fn field(simple_name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Field, simple_name)
    }

    pub fn parameter(simple_name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Parameter, simple_name)
    }

    pub fn with_qualified_name(mut self, name: impl Into<String>) -> Self {
        self.qualified_name = Some(name.into());
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_doc_comment(mut self, comment: impl Into<DocComment>) -> Self {
        self.doc_comment = Some(comment.into());
        self
    }

    pub fn with_child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn doc_comment(&self) -> Option<&DocComment> {
        self.doc_comment.as_ref()
    }
}

/// Top-level shape of a declarations file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeclarationDocument {
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}
