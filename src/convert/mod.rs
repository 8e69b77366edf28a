//! External-tree to canonical-AST conversion.
//!
//! [`TreeConverter::convert`] is the generic path: it positions a node,
//! dispatches on its kind to one builder, validates the result, and returns
//! it. Builders gather every child first and construct their node once, so a
//! caller never sees a partially built value. Compilation units carry context
//! the generic path does not have and go through [`convert_unit`] instead.
//!
//! Conversion recurses over tree depth, except for runs of one infix
//! operator, which are flattened with an explicit stack (see `infix`).

mod annotations;
mod decls;
mod docs;
mod exprs;
mod infix;
mod literals;
pub(crate) mod position;
mod stmts;
mod types;
mod unit;

pub use annotations::{parse_property_attributes, PROPERTY_ANNOTATION};
pub use literals::{unescape_char, unescape_string};
pub use unit::convert_unit;

use tracing::debug;

use crate::ast::{
    Annotation, Comment, DeclarationHeader, DocElement, Expression, Name, SourcePosition, Spanned,
    Statement, Stmt, TreeNode, Type,
};
use crate::binding::{ConstantValue, ElementRef, TypeRef};
use crate::config::Environment;
use crate::errors::{ConvertError, Result};
use crate::syntax::{LineTable, Role, SyntaxKind, SyntaxNode};
use crate::validate::{require, validate};

use self::position::position_in;

type Narrow<T> = fn(Spanned<TreeNode>) -> Result<Spanned<T>>;

/// Converts external nodes into canonical AST nodes.
///
/// Holds only borrowed, read-only context, so one converter may be reused for
/// any number of nodes and independent converters never observe each other.
#[derive(Debug, Clone, Copy)]
pub struct TreeConverter<'r> {
    env: Environment<'r>,
    lines: Option<&'r LineTable>,
}

impl<'r> TreeConverter<'r> {
    pub fn new(env: &Environment<'r>) -> Self {
        Self {
            env: *env,
            lines: None,
        }
    }

    /// Line table used for trees that were built without one.
    pub(crate) fn with_fallback_lines(self, lines: Option<&'r LineTable>) -> Self {
        Self { lines, ..self }
    }

    pub(crate) fn position(&self, node: SyntaxNode<'_>) -> SourcePosition {
        position_in(node, self.lines)
    }

    /// Converts `node`; an absent node converts to an absent result.
    pub fn convert(&self, node: Option<SyntaxNode<'_>>) -> Result<Option<Spanned<TreeNode>>> {
        node.map(|node| self.convert_node(node)).transpose()
    }

    /// Converts a node that must produce a statement.
    pub fn convert_statement(&self, node: Option<SyntaxNode<'_>>) -> Result<Option<Stmt>> {
        self.convert(node)?.map(Spanned::into_statement).transpose()
    }

    pub(crate) fn convert_node(&self, node: SyntaxNode<'_>) -> Result<Spanned<TreeNode>> {
        let position = self.position(node);
        let value = self.dispatch(node, position)?;
        let built = Spanned::new(value, position);
        validate(&built)?;
        Ok(built)
    }

    /// One arm per external kind. The match is exhaustive, so a kind added to
    /// [`SyntaxKind`] does not build until it is handled here.
    fn dispatch(&self, node: SyntaxNode<'_>, position: SourcePosition) -> Result<TreeNode> {
        use SyntaxKind as K;
        use TreeNode as N;

        Ok(match node.kind() {
            // Declarations
            K::AnnotationTypeDeclaration => N::Declaration(self.annotation_type_declaration(node)?),
            K::AnnotationTypeMemberDeclaration => N::Declaration(self.annotation_type_member(node)?),
            K::AnonymousClassDeclaration => N::AnonymousClass(self.anonymous_class(node)?),
            K::CatchClause => N::CatchClause(self.catch_clause(node)?),
            K::Dimension => N::Dimension(self.dimension(node)?),
            K::EnumConstantDeclaration => N::Declaration(self.enum_constant(node)?),
            K::EnumDeclaration => N::Declaration(self.enum_declaration(node)?),
            K::FieldDeclaration => N::Declaration(self.field_declaration(node)?),
            K::Initializer => N::Declaration(self.initializer(node)?),
            K::MethodDeclaration => N::Declaration(self.method_declaration(node)?),
            K::PackageDeclaration => N::Package(self.package_declaration(node)?),
            K::SingleVariableDeclaration => N::Variable(self.single_variable(node)?),
            K::TypeDeclaration => N::Declaration(self.type_declaration(node)?),
            K::VariableDeclarationFragment => N::Variable(self.fragment(node)?),

            // Statements
            K::AssertStatement => N::Statement(self.assert_statement(node)?),
            K::Block => N::Statement(Statement::Block(self.block(node)?)),
            K::BreakStatement => N::Statement(self.break_statement(node)?),
            K::ConstructorInvocation => N::Statement(self.constructor_invocation(node)?),
            K::ContinueStatement => N::Statement(self.continue_statement(node)?),
            K::DoStatement => N::Statement(self.do_statement(node)?),
            K::EmptyStatement => N::Statement(Statement::Empty),
            K::EnhancedForStatement => N::Statement(self.enhanced_for(node)?),
            K::ExpressionStatement => N::Statement(self.expression_statement(node)?),
            K::ForStatement => N::Statement(self.for_statement(node)?),
            K::IfStatement => N::Statement(self.if_statement(node)?),
            K::LabeledStatement => N::Statement(self.labeled_statement(node)?),
            K::ReturnStatement => N::Statement(self.return_statement(node)?),
            K::SuperConstructorInvocation => N::Statement(self.super_constructor_invocation(node)?),
            K::SwitchCase => N::Statement(self.switch_case(node)?),
            K::SwitchStatement => N::Statement(self.switch_statement(node)?),
            K::SynchronizedStatement => N::Statement(self.synchronized_statement(node)?),
            K::ThrowStatement => N::Statement(self.throw_statement(node)?),
            K::TryStatement => N::Statement(self.try_statement(node)?),
            K::TypeDeclarationStatement => N::Statement(self.type_declaration_statement(node)?),
            K::VariableDeclarationStatement => {
                N::Statement(self.variable_declaration_statement(node)?)
            }
            K::WhileStatement => N::Statement(self.while_statement(node)?),

            // Annotations
            K::MarkerAnnotation => N::Expression(Expression::Annotation(self.marker_annotation(node)?)),
            K::MemberValuePair => N::MemberValuePair(self.member_value_pair(node)?),
            K::NormalAnnotation => N::Expression(Expression::Annotation(self.normal_annotation(node)?)),
            K::SingleMemberAnnotation => {
                N::Expression(Expression::Annotation(self.single_member_annotation(node)?))
            }

            // Expressions
            K::ArrayAccess => N::Expression(self.array_access(node)?),
            K::ArrayCreation => N::Expression(self.array_creation(node)?),
            K::ArrayInitializer => N::Expression(Expression::ArrayInitializer(self.array_initializer(node)?)),
            K::Assignment => N::Expression(self.assignment(node, position)?),
            K::BooleanLiteral => N::Expression(self.boolean_literal(node)),
            K::CastExpression => N::Expression(self.cast_expression(node)?),
            K::CharacterLiteral => N::Expression(self.character_literal(node, position)?),
            K::ClassInstanceCreation => N::Expression(self.class_instance_creation(node)?),
            K::ConditionalExpression => N::Expression(self.conditional_expression(node)?),
            K::CreationReference => N::Expression(self.creation_reference(node)?),
            K::ExpressionMethodReference => N::Expression(self.expression_method_reference(node)?),
            K::FieldAccess => N::Expression(self.field_access(node)?),
            K::InfixExpression => N::Expression(Expression::Infix(self.infix_expression(node, position)?)),
            K::InstanceofExpression => N::Expression(self.instanceof_expression(node)?),
            K::LambdaExpression => N::Expression(Expression::Lambda(self.lambda_expression(node)?)),
            K::MethodInvocation => N::Expression(self.method_invocation(node)?),
            K::NullLiteral => N::Expression(Expression::NullLiteral { ty: self.type_of(node) }),
            K::NumberLiteral => N::Expression(self.number_literal(node, position)?),
            K::ParenthesizedExpression => N::Expression(self.parenthesized_expression(node)?),
            K::PostfixExpression => N::Expression(self.postfix_expression(node, position)?),
            K::PrefixExpression => N::Expression(self.prefix_expression(node, position)?),
            K::QualifiedName => N::Expression(Expression::Name(self.qualified_name(node)?)),
            K::SimpleName => N::Expression(Expression::Name(Name::Simple(self.simple_name(node)))),
            K::StringLiteral => N::Expression(self.string_literal(node, position)?),
            K::SuperFieldAccess => N::Expression(self.super_field_access(node)?),
            K::SuperMethodInvocation => N::Expression(self.super_method_invocation(node)?),
            K::SuperMethodReference => N::Expression(self.super_method_reference(node)?),
            K::ThisExpression => N::Expression(self.this_expression(node)?),
            K::TypeLiteral => N::Expression(self.type_literal(node)?),
            K::TypeMethodReference => N::Expression(self.type_method_reference(node)?),
            K::VariableDeclarationExpression => {
                N::Expression(self.variable_declaration_expression(node)?)
            }

            // Types
            K::ArrayType => N::Type(Type::Array(self.array_type(node, position))),
            K::IntersectionType => N::Type(self.intersection_type(node)?),
            K::NameQualifiedType => N::Type(self.name_qualified_type(node)?),
            K::ParameterizedType => N::Type(self.parameterized_type(node)?),
            K::PrimitiveType => N::Type(self.primitive_type(node)?),
            K::QualifiedType => N::Type(self.qualified_type(node)?),
            K::SimpleType => N::Type(self.simple_type(node)?),
            K::UnionType => N::Type(self.union_type(node)?),

            // Comments and documentation
            K::BlockComment => N::Comment(Comment::Block),
            K::Javadoc => N::Comment(Comment::Javadoc(self.javadoc(node)?)),
            K::LineComment => N::Comment(Comment::Line),
            K::TagElement => N::DocElement(DocElement::Tag(self.tag_element(node)?)),
            K::TextElement => N::DocElement(DocElement::Text(docs::text_element(node))),
            // Only ever found inside doc comments; nothing below them is needed.
            K::MemberRef | K::MethodRef | K::MethodRefParameter => {
                N::DocElement(DocElement::Text(docs::text_element(node)))
            }

            K::CompilationUnit => return Err(ConvertError::wrong_entry_point(node.kind(), position)),
            K::ImportDeclaration | K::Modifier | K::TypeParameter | K::WildcardType => {
                return Err(ConvertError::unsupported(node.kind(), position))
            }
        })
    }

    // ========================================================================
    // CHILD HELPERS
    // ========================================================================

    fn required<T>(
        &self,
        node: SyntaxNode<'_>,
        role: Role,
        narrow: Narrow<T>,
    ) -> Result<Spanned<T>> {
        narrow(self.convert_node(require(node, role, self.lines)?)?)
    }

    fn optional<T>(
        &self,
        node: SyntaxNode<'_>,
        role: Role,
        narrow: Narrow<T>,
    ) -> Result<Option<Spanned<T>>> {
        node.child(role)
            .map(|child| self.convert_node(child).and_then(narrow))
            .transpose()
    }

    fn list<T>(
        &self,
        node: SyntaxNode<'_>,
        role: Role,
        narrow: Narrow<T>,
    ) -> Result<Vec<Spanned<T>>> {
        node.children(role)
            .map(|child| self.convert_node(child).and_then(narrow))
            .collect()
    }

    /// Annotations written among a declaration's modifiers.
    fn modifier_annotations(&self, node: SyntaxNode<'_>) -> Result<Vec<Spanned<Annotation>>> {
        node.children(Role::Modifier)
            .filter(|modifier| modifier.kind().is_annotation())
            .map(|modifier| self.convert_node(modifier).and_then(Spanned::into_annotation))
            .collect()
    }

    /// Modifier bits, annotations and documentation of a body declaration.
    fn header(&self, node: SyntaxNode<'_>) -> Result<DeclarationHeader> {
        Ok(DeclarationHeader {
            modifiers: node.modifiers(),
            annotations: self.modifier_annotations(node)?,
            javadoc: self.optional(node, Role::Javadoc, Spanned::into_javadoc)?,
        })
    }

    // ========================================================================
    // RESOLUTION
    // ========================================================================

    /// Resolved type, or the unresolved marker when the resolver has none.
    fn type_of(&self, node: SyntaxNode<'_>) -> TypeRef {
        self.env.resolver.type_of(node).unwrap_or_else(|| {
            debug!(kind = %node.kind(), offset = node.start(), "unresolved type carried forward");
            TypeRef::unresolved()
        })
    }

    fn element_of(&self, node: SyntaxNode<'_>) -> Option<ElementRef> {
        self.env.resolver.element_of(node)
    }

    fn constant_of(&self, node: SyntaxNode<'_>) -> Option<ConstantValue> {
        self.env.resolver.constant_of(node)
    }
}
