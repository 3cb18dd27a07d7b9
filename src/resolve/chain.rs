//! Ordered fallback over configuration-gated sources.
//!
//! Every resolver is a [`Chain`]: a fixed sequence of `(enabled, supplier)`
//! steps. Disabled steps are skipped without calling their supplier, and once
//! a step yields a usable value the remaining suppliers never run.

use std::fmt;

use serde::Serialize;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetadataSource {
    CommentTag,
    CommentBody,
    QualifiedName,
    SimpleName,
    Swagger3Operation,
    Swagger2ApiOperation,
    Swagger3Schema,
    Swagger2ApiModelProperty,
    ExcludedName,
    StaticModifier,
    ExcludeAnnotation,
    RequiredAnnotation,
    RequiredTag,
    MissingComment,
}

impl MetadataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataSource::CommentTag => "comment-tag",
            MetadataSource::CommentBody => "comment-body",
            MetadataSource::QualifiedName => "qualified-name",
            MetadataSource::SimpleName => "simple-name",
            MetadataSource::Swagger3Operation => "swagger3-operation",
            MetadataSource::Swagger2ApiOperation => "swagger2-api-operation",
            MetadataSource::Swagger3Schema => "swagger3-schema",
            MetadataSource::Swagger2ApiModelProperty => "swagger2-api-model-property",
            MetadataSource::ExcludedName => "excluded-name",
            MetadataSource::StaticModifier => "static-modifier",
            MetadataSource::ExcludeAnnotation => "exclude-annotation",
            MetadataSource::RequiredAnnotation => "required-annotation",
            MetadataSource::RequiredTag => "required-tag",
            MetadataSource::MissingComment => "missing-comment",
        }
    }
}

impl fmt::Display for MetadataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value a chain step may produce.
pub trait Candidate {
    /// Whether this value ends the chain.
    fn is_usable(&self) -> bool;
}

impl Candidate for String {
    fn is_usable(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Candidate for bool {
    fn is_usable(&self) -> bool {
        *self
    }
}

/// Resolved value plus the source that produced it.
///
/// `source` is `None` when nothing usable was found and `value` is the
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<T> {
    pub value: T,
    pub source: Option<MetadataSource>,
}

#[derive(Debug)]
pub struct Chain<T> {
    found: Option<Resolution<T>>,
}

impl<T: Candidate> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Candidate> Chain<T> {
    pub fn new() -> Self {
        Self { found: None }
    }

    /// Try `supplier` if `enabled` and nothing earlier has resolved.
    pub fn step<V, F>(mut self, source: MetadataSource, enabled: bool, supplier: F) -> Self
    where
        V: Into<T>,
        F: FnOnce() -> Option<V>,
    {
        if self.found.is_some() || !enabled {
            return self;
        }
        let value: Option<T> = supplier().map(Into::into);
        if let Some(value) = value.filter(|v| v.is_usable()) {
            self.found = Some(Resolution {
                value,
                source: Some(source),
            });
        }
        self
    }

    /// Terminal fallback, applied whenever no step resolved.
    pub fn or_else<F>(self, source: MetadataSource, fallback: F) -> Resolution<T>
    where
        F: FnOnce() -> T,
    {
        self.found.unwrap_or_else(|| {
            let value = fallback();
            let source = value.is_usable().then_some(source);
            Resolution { value, source }
        })
    }
}

impl<T: Candidate + Default> Chain<T> {
    pub fn or_default(self) -> Resolution<T> {
        self.found.unwrap_or_else(|| Resolution {
            value: T::default(),
            source: None,
        })
    }
}

impl Chain<bool> {
    /// Boolean step: resolves to `true` as soon as `predicate` holds.
    pub fn check<F>(self, source: MetadataSource, enabled: bool, predicate: F) -> Self
    where
        F: FnOnce() -> bool,
    {
        self.step(source, enabled, || Some(predicate()))
    }
}
