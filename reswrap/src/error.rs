//! All error types for the reswrap crate.
//!
//! These are returned from all fallible operations (document parsing, wrapper
//! emission, build-property and language resolution).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid language `{0}`")]
    InvalidLanguage(String),

    /// The emitter closed more indentation levels than it opened.
    #[error("indent level cannot drop below zero")]
    IndentUnderflow,
}

impl Error {
    /// Creates a new malformed-document error
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedDocument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_xml_parse_error() {
        let xml_error = quick_xml::Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        let error = Error::from(xml_error);
        assert!(error.to_string().starts_with("XML parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_malformed_document_error() {
        let error = Error::malformed("unclosed element `root`");
        assert_eq!(
            error.to_string(),
            "malformed document: unclosed element `root`"
        );
    }

    #[test]
    fn test_invalid_language_error() {
        let error = Error::InvalidLanguage("en us".to_string());
        assert_eq!(error.to_string(), "invalid language `en us`");
    }

    #[test]
    fn test_indent_underflow_error() {
        assert_eq!(
            Error::IndentUnderflow.to_string(),
            "indent level cannot drop below zero"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidName("".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidName"));
    }
}
