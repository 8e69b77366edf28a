use serde::{Deserialize, Serialize};

use super::expr::Name;
use super::Spanned;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Javadoc {
    pub tags: Vec<Spanned<TagElement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Comment {
    Block,
    Line,
    Javadoc(Javadoc),
}

impl Comment {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Comment::Block => "BlockComment",
            Comment::Line => "LineComment",
            Comment::Javadoc(_) => "Javadoc",
        }
    }
}

/// `@tag fragment...`; the first tag of a doc block may have no name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TagElement {
    pub tag_name: Option<String>,
    pub fragments: Vec<Spanned<DocElement>>,
}

/// Raw documentation text. Also stands in for member and method references
/// inside doc comments, which carry no structure the translator needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextElement {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocElement {
    Tag(TagElement),
    Text(TextElement),
    Name(Name),
}

impl DocElement {
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocElement::Tag(_) => "TagElement",
            DocElement::Text(_) => "TextElement",
            DocElement::Name(_) => "Name",
        }
    }
}
