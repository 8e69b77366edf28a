use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::decl::PackageDeclaration;
use super::doc::Comment;
use super::{Decl, Spanned};

/// Root of a converted source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub source_path: String,
    pub main_type_name: String,
    /// Raw text of the file; comments are positions into it.
    pub source: Arc<str>,
    pub package: Option<Spanned<PackageDeclaration>>,
    pub types: Vec<Decl>,
    /// Comments not attached to any declaration.
    pub comments: Vec<Spanned<Comment>>,
}

impl CompilationUnit {
    /// Source text covered by `comment`, if its range lies inside the file.
    pub fn comment_text(&self, comment: &Spanned<Comment>) -> Option<&str> {
        self.source.get(comment.position.start..comment.position.end())
    }

    /// The top-level type named like the file.
    pub fn main_type(&self) -> Option<&Decl> {
        self.types.iter().find(|decl| {
            decl.value
                .type_core()
                .is_some_and(|core| core.name.value.identifier == self.main_type_name)
        })
    }
}
