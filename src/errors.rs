//! Conversion errors.
//!
//! Every failure here means the converter and the external tree disagree
//! about the shape of the input. None of them is a property of the user's
//! program, so there is no recovery: the unit being converted is abandoned
//! and the error is handed to the driver, which may render it against the
//! unit's source through [`ConvertError::into_report`].

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

use crate::ast::SourcePosition;
use crate::syntax::{Role, SyntaxKind};

// ============================================================================
// SOURCE CONTEXT
// ============================================================================

/// Named source text used to render an error.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceContext {
    pub fn from_file(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("{kind} must be converted through the unit entry point")]
    #[diagnostic(code(treebridge::convert::wrong_entry_point))]
    WrongEntryPoint {
        kind: SyntaxKind,
        #[label("reached the generic converter")]
        span: SourceSpan,
    },

    #[error("unsupported construct: {kind}")]
    #[diagnostic(
        code(treebridge::convert::unsupported),
        help("the upstream parser produces a kind this converter does not know")
    )]
    UnsupportedConstruct {
        kind: SyntaxKind,
        #[label("no conversion for this node")]
        span: SourceSpan,
    },

    #[error("{kind} is missing its required {role}")]
    #[diagnostic(code(treebridge::convert::missing_child))]
    MissingChild {
        kind: SyntaxKind,
        role: Role,
        #[label("missing {role}")]
        span: SourceSpan,
    },

    #[error("invalid {kind}: {detail}")]
    #[diagnostic(code(treebridge::convert::invalid_structure))]
    InvalidStructure {
        kind: &'static str,
        detail: String,
        #[label("invalid structure")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(treebridge::convert::type_mismatch))]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        #[label("converted to {found}")]
        span: SourceSpan,
    },

    #[error("malformed literal {token}: {reason}")]
    #[diagnostic(code(treebridge::convert::malformed_literal))]
    MalformedLiteral {
        token: String,
        reason: &'static str,
        #[label("malformed literal")]
        span: SourceSpan,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    EntryPoint,
    Dispatch,
    Validation,
    Shape,
}

impl ConvertError {
    pub fn wrong_entry_point(kind: SyntaxKind, position: SourcePosition) -> Self {
        Self::WrongEntryPoint {
            kind,
            span: position.into(),
        }
    }

    pub fn unsupported(kind: SyntaxKind, position: SourcePosition) -> Self {
        Self::UnsupportedConstruct {
            kind,
            span: position.into(),
        }
    }

    pub fn missing_child(kind: SyntaxKind, role: Role, position: SourcePosition) -> Self {
        Self::MissingChild {
            kind,
            role,
            span: position.into(),
        }
    }

    pub fn invalid(kind: &'static str, detail: impl Into<String>, position: SourcePosition) -> Self {
        Self::InvalidStructure {
            kind,
            detail: detail.into(),
            span: position.into(),
        }
    }

    pub fn type_mismatch(
        expected: &'static str,
        found: &'static str,
        position: SourcePosition,
    ) -> Self {
        Self::TypeMismatch {
            expected,
            found,
            span: position.into(),
        }
    }

    pub fn malformed_literal(
        token: impl Into<String>,
        reason: &'static str,
        position: SourcePosition,
    ) -> Self {
        Self::MalformedLiteral {
            token: token.into(),
            reason,
            span: position.into(),
        }
    }

    /// Error category for test assertions and driver triage.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WrongEntryPoint { .. } => ErrorCategory::EntryPoint,
            Self::UnsupportedConstruct { .. } => ErrorCategory::Dispatch,
            Self::MissingChild { .. } | Self::InvalidStructure { .. } => ErrorCategory::Validation,
            Self::TypeMismatch { .. } | Self::MalformedLiteral { .. } => ErrorCategory::Shape,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::WrongEntryPoint { span, .. }
            | Self::UnsupportedConstruct { span, .. }
            | Self::MissingChild { span, .. }
            | Self::InvalidStructure { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::MalformedLiteral { span, .. } => *span,
        }
    }

    /// Attach the unit's text so the error renders with context.
    pub fn into_report(self, source: SourceContext) -> miette::Report {
        miette::Report::new(self).with_source_code(source.to_named_source())
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
