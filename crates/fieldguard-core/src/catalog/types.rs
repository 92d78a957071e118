//! Path classification shared by all schema oracles.

/// How a schema classifies a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A stored, declared field.
    Real,
    /// A declared computed field.
    Virtual,
    /// A parent of declared dotted paths (`address` for `address.city`).
    Nested,
    /// Not declared anywhere in the schema.
    AdhocOrUndefined,
}

impl PathKind {
    /// Whether the path is known to the schema in any form.
    pub fn is_declared(self) -> bool {
        self != PathKind::AdhocOrUndefined
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathKind::Real => write!(f, "real"),
            PathKind::Virtual => write!(f, "virtual"),
            PathKind::Nested => write!(f, "nested"),
            PathKind::AdhocOrUndefined => write!(f, "adhocOrUndefined"),
        }
    }
}

/// Field-existence oracle supplied by the host schema.
pub trait SchemaPaths: Send + Sync {
    /// Classify a (possibly dotted) field path.
    fn path_kind(&self, path: &str) -> PathKind;

    /// Whether the path is a genuinely declared field.
    fn is_declared(&self, path: &str) -> bool {
        self.path_kind(path).is_declared()
    }
}

impl<F> SchemaPaths for F
where
    F: Fn(&str) -> PathKind + Send + Sync,
{
    fn path_kind(&self, path: &str) -> PathKind {
        self(path)
    }
}
