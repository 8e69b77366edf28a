//! Annotation conversion.
//!
//! Marker and single-member annotations whose written type name is exactly
//! [`PROPERTY_ANNOTATION`] become [`AnnotationKind::Property`], carrying the
//! attribute list parsed from the resolved annotation's `value` member. The
//! match is on the name as written: `@a.b.Property` is an ordinary
//! annotation, while any type spelled `Property` matches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Annotation, AnnotationKind, MemberValuePair, Spanned};
use crate::binding::AnnotationRef;
use crate::errors::Result;
use crate::syntax::{Role, SyntaxNode};

use super::TreeConverter;

/// Written type name of the accessor-exposing annotation.
pub const PROPERTY_ANNOTATION: &str = "Property";

static ATTRIBUTE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

/// Attributes of a resolved property annotation, in first-seen order.
///
/// The `value` member is a comma separated string such as
/// `"nonatomic, readonly"`. Empty entries and repeats are dropped; a missing
/// annotation or value yields no attributes.
pub fn parse_property_attributes(mirror: Option<&AnnotationRef>) -> Vec<String> {
    let Some(value) = mirror
        .and_then(|mirror| mirror.value("value"))
        .and_then(|value| value.as_str())
    else {
        return Vec::new();
    };

    let mut attributes: Vec<String> = Vec::new();
    for attribute in ATTRIBUTE_SEPARATOR.split(value) {
        if !attribute.is_empty() && !attributes.iter().any(|seen| seen == attribute) {
            attributes.push(attribute.to_string());
        }
    }
    attributes
}

impl TreeConverter<'_> {
    /// Fields every annotation shape shares, with the shape decided by `kind`.
    fn annotation(
        &self,
        node: SyntaxNode<'_>,
        kind: impl FnOnce() -> Result<AnnotationKind>,
    ) -> Result<Annotation> {
        let type_name = self.required(node, Role::TypeName, Spanned::into_name)?;
        let mirror = self.env.resolver.annotation_of(node);
        let kind = if type_name.value.full_name() == PROPERTY_ANNOTATION {
            AnnotationKind::Property {
                attributes: parse_property_attributes(mirror.as_ref()),
            }
        } else {
            kind()?
        };
        Ok(Annotation {
            type_name,
            mirror,
            constant: self.constant_of(node),
            kind,
        })
    }

    pub(super) fn marker_annotation(&self, node: SyntaxNode<'_>) -> Result<Annotation> {
        self.annotation(node, || Ok(AnnotationKind::Marker))
    }

    /// A property annotation written with an argument keeps only the parsed
    /// attributes; the argument expression itself is not converted.
    pub(super) fn single_member_annotation(&self, node: SyntaxNode<'_>) -> Result<Annotation> {
        self.annotation(node, || {
            Ok(AnnotationKind::SingleMember {
                value: Box::new(self.required(node, Role::Value, Spanned::into_expression)?),
            })
        })
    }

    pub(super) fn normal_annotation(&self, node: SyntaxNode<'_>) -> Result<Annotation> {
        let type_name = self.required(node, Role::TypeName, Spanned::into_name)?;
        let values = self.list(node, Role::Value, Spanned::into_member_value_pair)?;
        Ok(Annotation {
            type_name,
            mirror: self.env.resolver.annotation_of(node),
            constant: self.constant_of(node),
            kind: AnnotationKind::Normal { values },
        })
    }

    pub(super) fn member_value_pair(&self, node: SyntaxNode<'_>) -> Result<MemberValuePair> {
        Ok(MemberValuePair {
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            value: self.required(node, Role::Value, Spanned::into_expression)?,
        })
    }
}
