//! Which block comments survive raking.

use crate::constants::{ANNOTATION_RE, DOC_LICENSE_TAG_RE, DOC_START_RE, LICENSE_START_RE};
use serde::Serialize;

/// Kind of block comment, as far as the policy is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentClass {
    /// `/*! ... */`, or a doc comment carrying an `@license` tag
    License,
    /// `/** ... */`
    Doc,
    /// Carries a `__PURE__` or `__NO_SIDE_EFFECTS__` annotation
    Annotation,
    /// Anything else
    Plain,
}

impl CommentClass {
    /// Classify the literal text of a block comment.
    #[must_use]
    pub fn of(comment: &str) -> Self {
        if LICENSE_START_RE().is_match(comment) {
            Self::License
        } else if DOC_START_RE().is_match(comment) {
            if DOC_LICENSE_TAG_RE().is_match(comment) {
                Self::License
            } else {
                Self::Doc
            }
        } else if ANNOTATION_RE().is_match(comment) {
            Self::Annotation
        } else {
            Self::Plain
        }
    }
}

/// Options deciding which block comments are kept.
///
/// Plain comments are always removed, and line comments never reach the
/// policy at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentPolicy {
    /// Keep license comments
    pub keep_licenses: bool,
    /// Keep JSDoc/TSDoc comments
    pub keep_docs: bool,
    /// Keep bundler annotations
    pub keep_annotations: bool,
}

impl CommentPolicy {
    /// Whether `comment` should be removed.
    #[must_use]
    pub fn should_remove(&self, comment: &str) -> bool {
        match CommentClass::of(comment) {
            CommentClass::License => !self.keep_licenses,
            CommentClass::Doc => !self.keep_docs,
            CommentClass::Annotation => !self.keep_annotations,
            CommentClass::Plain => true,
        }
    }
}
