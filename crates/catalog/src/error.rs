use std::path::PathBuf;

use thiserror::Error;

use crate::object::{AstroObject, Kind};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures while loading catalogue files and building their hierarchies
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("document contains no root element")]
    EmptyDocument,

    #[error("element <{tag}> is never closed")]
    UnclosedElement { tag: String },

    #[error("expected a <system> root element, found <{tag}>")]
    UnexpectedRoot { tag: String },

    #[error("unknown record kind <{tag}>")]
    UnknownRecordKind { tag: String },

    #[error("<system> nested inside <{parent}>")]
    NestedSystem { parent: String },

    #[error("{parent} '{parent_name}' cannot contain a {child}")]
    IllegalChild {
        parent: Kind,
        parent_name: String,
        child: Kind,
    },

    #[error("{kind} record has no name")]
    MissingName { kind: Kind },

    #[error("duplicate system name '{name}'")]
    DuplicateSystem { name: String },

    #[error("catalogue cannot hold {incoming} more objects ({existing} already loaded)")]
    CatalogFull { existing: usize, incoming: usize },

    #[error("invalid loader configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Entry {
        path: PathBuf,
        #[source]
        source: Box<CatalogError>,
    },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unexpected_root(tag: impl Into<String>) -> Self {
        Self::UnexpectedRoot { tag: tag.into() }
    }

    pub fn unknown_record_kind(tag: impl Into<String>) -> Self {
        Self::UnknownRecordKind { tag: tag.into() }
    }

    pub fn duplicate_system(name: impl Into<String>) -> Self {
        Self::DuplicateSystem { name: name.into() }
    }

    /// Attach the catalogue file an error came from
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::Entry {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// A `star.` path was resolved on an object with no Star above it.
///
/// This is a property of the hierarchy, not missing data: a planet orbiting
/// a binary barycentre has no host star whose attributes could be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{object} has no star ancestor to resolve '{path}'")]
pub struct HierarchyError {
    pub object: String,
    pub path: String,
}

impl HierarchyError {
    pub fn no_star_ancestor(object: AstroObject<'_>, path: impl Into<String>) -> Self {
        Self {
            object: object.to_string(),
            path: path.into(),
        }
    }
}

/// Failures of the dotted-path resolver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error("'{path}' is not a known {kind} parameter")]
    UnknownPath { kind: Kind, path: String },

    #[error("object list mixes {first} and {other} objects")]
    MixedKinds { first: Kind, other: Kind },
}

impl ResolveError {
    pub fn unknown_path(kind: Kind, path: impl Into<String>) -> Self {
        Self::UnknownPath {
            kind,
            path: path.into(),
        }
    }
}
