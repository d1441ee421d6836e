//! Error types for descriptor reading and writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or writing a project descriptor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlError {
    /// Failed to read a descriptor from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a descriptor to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// Serialization to the in-memory buffer failed.
    #[error("failed to serialize XML: {0}")]
    Serialize(#[from] std::io::Error),

    /// The document has no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The root element is not `Project`.
    #[error("expected <Project> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    /// The document ended inside an element.
    #[error("unexpected end of document inside <{element}>")]
    UnexpectedEof { element: String },

    /// An entity or character reference that cannot be resolved.
    #[error("unknown reference '&{name};'")]
    UnknownReference { name: String },

    /// Serialized output is not valid UTF-8.
    #[error("serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, XmlError>;
