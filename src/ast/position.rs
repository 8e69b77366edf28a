use serde::{Deserialize, Serialize};

/// Location of a node in its source text.
///
/// `line` is only present when the node was converted as part of a full
/// compilation unit; a detached sub-tree has offsets but no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourcePosition {
    pub start: usize,
    pub length: usize,
    pub line: Option<u32>,
}

impl SourcePosition {
    pub fn new(start: usize, length: usize) -> Self {
        Self {
            start,
            length,
            line: None,
        }
    }

    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

impl From<SourcePosition> for miette::SourceSpan {
    fn from(position: SourcePosition) -> Self {
        miette::SourceSpan::from((position.start, position.length))
    }
}

/// A canonical node value together with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub position: SourcePosition,
}

impl<T> Spanned<T> {
    pub fn new(value: T, position: SourcePosition) -> Self {
        Self { value, position }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            position: self.position,
        }
    }

    pub fn as_ref(&self) -> Spanned<&T> {
        Spanned {
            value: &self.value,
            position: self.position,
        }
    }
}
