use crate::ast::{Javadoc, Spanned, TagElement, TextElement};
use crate::errors::Result;
use crate::syntax::{Role, SyntaxNode};

use super::TreeConverter;

/// Text of a doc fragment. Member and method references are kept as their
/// written text.
pub(super) fn text_element(node: SyntaxNode<'_>) -> TextElement {
    TextElement {
        text: node.token().unwrap_or_default().to_string(),
    }
}

impl TreeConverter<'_> {
    pub(super) fn javadoc(&self, node: SyntaxNode<'_>) -> Result<Javadoc> {
        Ok(Javadoc {
            tags: self.list(node, Role::Tag, Spanned::into_tag_element)?,
        })
    }

    pub(super) fn tag_element(&self, node: SyntaxNode<'_>) -> Result<TagElement> {
        Ok(TagElement {
            tag_name: node.token().map(str::to_string),
            fragments: self.list(node, Role::Fragment, Spanned::into_doc_fragment)?,
        })
    }
}
