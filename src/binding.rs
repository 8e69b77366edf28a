//! Resolved semantic facts and the resolver capability that supplies them.
//!
//! The converter asks a [`BindingResolver`] for at most one fact per need and
//! stores the returned handle on the output node. Handles are cheap `Arc`
//! clones, so a resolved type may be shared by many nodes without the tree
//! itself sharing any structure.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::syntax::{NodeId, SyntaxNode};

// ============================================================================
// RESOLVER CAPABILITY
// ============================================================================

/// Read-only mapping from external nodes to resolved facts.
///
/// Implementations must tolerate whatever concurrency the caller imposes;
/// the converter itself only ever reads through `&self`.
pub trait BindingResolver {
    /// Resolved type of a type node or an expression.
    fn type_of(&self, node: SyntaxNode<'_>) -> Option<TypeRef>;

    /// Declared or referenced element: the type of a type declaration, the
    /// target of a call, field access or name, a constructor selected by
    /// overload resolution, a package.
    fn element_of(&self, node: SyntaxNode<'_>) -> Option<ElementRef>;

    /// Compile-time constant value of an expression.
    fn constant_of(&self, node: SyntaxNode<'_>) -> Option<ConstantValue>;

    /// Resolved annotation instance.
    fn annotation_of(&self, node: SyntaxNode<'_>) -> Option<AnnotationRef>;

    /// Variable element declared by an enum constant. Defaults to
    /// [`BindingResolver::element_of`], which resolvers that distinguish the
    /// constant's constructor from its field override.
    fn variable_of(&self, node: SyntaxNode<'_>) -> Option<ElementRef> {
        self.element_of(node)
    }
}

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeKind {
    Primitive,
    Declared,
    Array { component: TypeRef },
    Intersection { bounds: Vec<TypeRef> },
    Union { alternatives: Vec<TypeRef> },
    TypeVariable,
    Null,
    Void,
    /// The resolver could not determine the type.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
}

/// Shared handle to a resolved type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRef(Arc<TypeDescriptor>);

impl TypeRef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeRef(Arc::new(TypeDescriptor {
            name: name.into(),
            kind,
        }))
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Primitive)
    }

    pub fn declared(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Declared)
    }

    pub fn array_of(component: TypeRef) -> Self {
        let name = format!("{}[]", component.name());
        Self::new(name, TypeKind::Array { component })
    }

    pub fn intersection(bounds: Vec<TypeRef>) -> Self {
        let name = bounds
            .iter()
            .map(TypeRef::name)
            .collect::<Vec<_>>()
            .join(" & ");
        Self::new(name, TypeKind::Intersection { bounds })
    }

    /// Marker carried forward when resolution failed.
    pub fn unresolved() -> Self {
        Self::new("<unresolved>", TypeKind::Unresolved)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.0.kind
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self.0.kind, TypeKind::Unresolved)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.0.kind, TypeKind::Primitive)
    }

    /// Component type of an array type.
    pub fn component_type(&self) -> Option<&TypeRef> {
        match &self.0.kind {
            TypeKind::Array { component } => Some(component),
            _ => None,
        }
    }

    /// True when both handles point at the same descriptor.
    pub fn same_handle(&self, other: &TypeRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// ELEMENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Package,
    Type,
    Method,
    Constructor,
    Field,
    EnumConstant,
    Parameter,
    LocalVariable,
    AnnotationMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub kind: ElementKind,
    pub name: String,
    pub qualified_name: String,
}

/// Shared handle to a declared element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRef(Arc<ElementDescriptor>);

impl ElementRef {
    pub fn new(kind: ElementKind, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name.as_str())
            .to_string();
        ElementRef(Arc::new(ElementDescriptor {
            kind,
            name,
            qualified_name,
        }))
    }

    pub fn kind(&self) -> ElementKind {
        self.0.kind
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn qualified_name(&self) -> &str {
        &self.0.qualified_name
    }
}

// ============================================================================
// CONSTANTS
// ============================================================================

/// Compile-time constant value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValue {
    Bool(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ConstantValue::Byte(_)
                | ConstantValue::Short(_)
                | ConstantValue::Int(_)
                | ConstantValue::Long(_)
                | ConstantValue::Float(_)
                | ConstantValue::Double(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDescriptor {
    pub annotation_type: TypeRef,
    /// Explicitly written member values, in source order.
    pub values: Vec<(String, ConstantValue)>,
}

/// Shared handle to a resolved annotation instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRef(Arc<AnnotationDescriptor>);

impl AnnotationRef {
    pub fn new(annotation_type: TypeRef, values: Vec<(String, ConstantValue)>) -> Self {
        AnnotationRef(Arc::new(AnnotationDescriptor {
            annotation_type,
            values,
        }))
    }

    pub fn annotation_type(&self) -> &TypeRef {
        &self.0.annotation_type
    }

    pub fn values(&self) -> &[(String, ConstantValue)] {
        &self.0.values
    }

    pub fn value(&self, member: &str) -> Option<&ConstantValue> {
        self.0
            .values
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, value)| value)
    }
}

// ============================================================================
// TABLE RESOLVER
// ============================================================================

/// Resolver backed by precomputed per-node tables.
#[derive(Debug, Clone, Default)]
pub struct ResolutionTable {
    types: HashMap<NodeId, TypeRef>,
    elements: HashMap<NodeId, ElementRef>,
    variables: HashMap<NodeId, ElementRef>,
    constants: HashMap<NodeId, ConstantValue>,
    annotations: HashMap<NodeId, AnnotationRef>,
}

impl ResolutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type(&mut self, node: NodeId, ty: TypeRef) -> &mut Self {
        self.types.insert(node, ty);
        self
    }

    pub fn set_element(&mut self, node: NodeId, element: ElementRef) -> &mut Self {
        self.elements.insert(node, element);
        self
    }

    pub fn set_variable(&mut self, node: NodeId, element: ElementRef) -> &mut Self {
        self.variables.insert(node, element);
        self
    }

    pub fn set_constant(&mut self, node: NodeId, value: ConstantValue) -> &mut Self {
        self.constants.insert(node, value);
        self
    }

    pub fn set_annotation(&mut self, node: NodeId, annotation: AnnotationRef) -> &mut Self {
        self.annotations.insert(node, annotation);
        self
    }
}

impl BindingResolver for ResolutionTable {
    fn type_of(&self, node: SyntaxNode<'_>) -> Option<TypeRef> {
        self.types.get(&node.id()).cloned()
    }

    fn element_of(&self, node: SyntaxNode<'_>) -> Option<ElementRef> {
        self.elements.get(&node.id()).cloned()
    }

    fn constant_of(&self, node: SyntaxNode<'_>) -> Option<ConstantValue> {
        self.constants.get(&node.id()).cloned()
    }

    fn annotation_of(&self, node: SyntaxNode<'_>) -> Option<AnnotationRef> {
        self.annotations.get(&node.id()).cloned()
    }

    fn variable_of(&self, node: SyntaxNode<'_>) -> Option<ElementRef> {
        self.variables
            .get(&node.id())
            .or_else(|| self.elements.get(&node.id()))
            .cloned()
    }
}
