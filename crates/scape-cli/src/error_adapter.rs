//! Error adapter for converting ScapeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};

use scape::{ModelError, ScapeError};

/// Adapter that renders a [`ScapeError`] as a miette diagnostic.
///
/// Scape errors carry no source spans, so only a code and an optional
/// help message are attached.
pub struct ErrorAdapter<'a>(pub &'a ScapeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ScapeError::Io(_) => "scape::io",
            ScapeError::Config(_) => "scape::config",
            ScapeError::Model(err) => match err {
                ModelError::EmptyGraph { .. } => "scape::empty_graph",
                ModelError::CrossScapeReference { .. } => "scape::cross_scape",
                ModelError::InvalidParentTarget { .. } => "scape::invalid_parent",
                ModelError::DanglingReference { .. } => "scape::dangling_reference",
                ModelError::UnknownScape(_) | ModelError::UnknownElement(_) => "scape::unknown",
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            ScapeError::Model(ModelError::EmptyGraph { .. }) => {
                "use a size of at least 1 so the scape has a node to draw from"
            }
            ScapeError::Config(_) => {
                "check the file passed with --config or scape/config.toml in the working directory"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use scape::identifier::{ElementId, ScapeId};

    use super::*;

    fn code_of(err: &ScapeError) -> String {
        ErrorAdapter(err)
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_codes() {
        let cases = [
            (
                ScapeError::Io(io::Error::other("boom")),
                "scape::io",
            ),
            (
                ScapeError::Config("bad".to_string()),
                "scape::config",
            ),
            (
                ModelError::EmptyGraph {
                    scape: ScapeId::new(1),
                }
                .into(),
                "scape::empty_graph",
            ),
            (
                ModelError::InvalidParentTarget {
                    parent: ElementId::new(4),
                }
                .into(),
                "scape::invalid_parent",
            ),
            (
                ModelError::UnknownElement(ElementId::new(9)).into(),
                "scape::unknown",
            ),
        ];

        for (err, expected) in &cases {
            assert_eq!(code_of(err), *expected);
        }
    }

    #[test]
    fn test_help_for_empty_graph() {
        let err: ScapeError = ModelError::EmptyGraph {
            scape: ScapeId::new(2),
        }
        .into();
        let adapter = ErrorAdapter(&err);

        assert!(adapter.help().is_some());
        assert_eq!(adapter.to_string(), "scape 2 has no nodes");
    }

    #[test]
    fn test_no_help_for_io() {
        let err = ScapeError::Io(io::Error::other("disk"));

        assert!(ErrorAdapter(&err).help().is_none());
    }
}
