//! Document sanitization.
//!
//! Sanitization is silent: documents the request may not see are reported
//! as [`Sanitized::Denied`] or dropped from collections, never as errors.

use super::action::Action;
use super::engine::PermissionEngine;
use super::options::RequestOptions;
use crate::document::{pick_paths, Document};
use tracing::debug;

/// Outcome of sanitizing a single document.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitized<D> {
    /// The document with only its authorized fields left.
    Visible(D),
    /// Nothing in the document is visible to the request.
    Denied,
}

impl<D> Sanitized<D> {
    /// Check if the document was denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Sanitized::Denied)
    }

    /// Convert into the visible document, if any.
    pub fn into_visible(self) -> Option<D> {
        match self {
            Sanitized::Visible(doc) => Some(doc),
            Sanitized::Denied => None,
        }
    }
}

/// Documents handed to the sanitizer: one record or a result set.
#[derive(Debug, Clone, PartialEq)]
pub enum Documents<D> {
    /// A single, possibly absent, document.
    Single(Option<D>),
    /// A collection of documents.
    Collection(Vec<D>),
}

impl<D> Documents<D> {
    /// A single present document.
    pub fn single(doc: D) -> Self {
        Documents::Single(Some(doc))
    }

    /// A collection of documents.
    pub fn collection(docs: impl IntoIterator<Item = D>) -> Self {
        Documents::Collection(docs.into_iter().collect())
    }
}

/// Sanitized documents, in the shape they were handed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Redacted<D> {
    /// Result for a single document.
    Single(Sanitized<D>),
    /// Visible documents of a collection, denied ones dropped.
    Collection(Vec<D>),
}

impl<D> Redacted<D> {
    /// Check if this is a single-document result.
    pub fn is_single(&self) -> bool {
        matches!(self, Redacted::Single(_))
    }

    /// Flatten into the visible documents.
    pub fn into_vec(self) -> Vec<D> {
        match self {
            Redacted::Single(sanitized) => sanitized.into_visible().into_iter().collect(),
            Redacted::Collection(docs) => docs,
        }
    }
}

impl<D> From<Documents<D>> for Redacted<D> {
    /// Pass documents through unchanged, keeping their shape.
    fn from(docs: Documents<D>) -> Self {
        match docs {
            Documents::Single(Some(doc)) => Redacted::Single(Sanitized::Visible(doc)),
            Documents::Single(None) => Redacted::Single(Sanitized::Denied),
            Documents::Collection(docs) => Redacted::Collection(docs),
        }
    }
}

impl PermissionEngine {
    /// Redact one document down to its readable fields.
    ///
    /// The document's fields are replaced in place and the same value is
    /// returned; the pre-sanitization fields are gone afterwards. With
    /// `options.permissions` set, the permission summary computed from the
    /// original fields is attached under the configured field.
    pub fn sanitize_one<D: Document>(
        &self,
        options: &RequestOptions,
        doc: Option<D>,
    ) -> Sanitized<D> {
        let fields = doc.as_ref().map(|d| d.fields());
        let authorized = self.authorized_fields(options, Action::Read, fields);

        let Some(mut doc) = doc else {
            debug!("No document to sanitize");
            return Sanitized::Denied;
        };
        if authorized.is_empty() {
            debug!("No readable fields, document denied");
            return Sanitized::Denied;
        }

        let restricted = pick_paths(doc.fields(), &authorized);
        if restricted.is_empty() {
            debug!(
                authorized = authorized.len(),
                "No readable field present, document denied"
            );
            return Sanitized::Denied;
        }

        let summary = options
            .permissions
            .then(|| self.embed_permissions(options, Some(doc.fields())));

        doc.replace_fields(restricted);
        if let Some(summary) = summary {
            doc.attach_permissions(&self.config.permissions_field, summary);
        }

        Sanitized::Visible(doc)
    }

    /// Redact a single document or a collection, preserving the shape.
    pub fn sanitize_many<D: Document>(
        &self,
        options: &RequestOptions,
        docs: Documents<D>,
    ) -> Redacted<D> {
        match docs {
            Documents::Single(doc) => Redacted::Single(self.sanitize_one(options, doc)),
            Documents::Collection(docs) => {
                let total = docs.len();
                let visible: Vec<D> = docs
                    .into_iter()
                    .filter_map(|doc| self.sanitize_one(options, Some(doc)).into_visible())
                    .collect();

                debug!(total, visible = visible.len(), "Sanitized document collection");
                Redacted::Collection(visible)
            }
        }
    }
}
