// tests/conversion_tests.rs

mod common;

use common::{convert, convert_fixture, Fixture};
use treebridge::ast::{
    BodyDeclaration, DocElement, Expression, LambdaBody, Name, SourcePosition, Statement, TreeNode,
    Type,
};
use treebridge::binding::{ElementKind, ElementRef, ResolutionTable, TypeRef};
use treebridge::syntax::{
    AssignmentOperator, Flag, InfixOperator, Modifiers, NodeBuilder, NodeId, PostfixOperator,
    PrefixOperator, Role, SyntaxKind, SyntaxTreeBuilder,
};
use treebridge::{ConvertError, Environment, ErrorCategory, TreeConverter};

// ---
// Dispatch
// ---

#[test]
fn absent_node_converts_to_nothing() {
    let table = ResolutionTable::new();
    let env = Environment::new(&table);
    let converter = TreeConverter::new(&env);
    assert_eq!(converter.convert(None), Ok(None));
    assert_eq!(converter.convert_statement(None), Ok(None));
}

#[test]
fn every_kind_has_a_dispatch_outcome() {
    for kind in SyntaxKind::ALL {
        let mut b = SyntaxTreeBuilder::new();
        let id = b.node(kind, 0, 1).build();
        let tree = b.finish().unwrap();
        let table = ResolutionTable::new();

        match (kind, convert(&tree, &table, id)) {
            (SyntaxKind::CompilationUnit, Err(err)) => {
                assert_eq!(err.category(), ErrorCategory::EntryPoint)
            }
            (
                SyntaxKind::ImportDeclaration
                | SyntaxKind::Modifier
                | SyntaxKind::TypeParameter
                | SyntaxKind::WildcardType,
                Err(err),
            ) => assert_eq!(err.category(), ErrorCategory::Dispatch),
            (_, Err(err)) => assert!(
                matches!(err.category(), ErrorCategory::Validation | ErrorCategory::Shape),
                "{kind}: unexpected {err:?}"
            ),
            (SyntaxKind::CompilationUnit, Ok(_)) => panic!("unit converted generically"),
            (_, Ok(_)) => {}
        }
    }
}

/// Starts a one-character node of `kind` at the next free offset.
fn at(fx: &mut Fixture, kind: SyntaxKind) -> NodeBuilder<'_> {
    let start = fx.claim(1);
    fx.builder.node(kind, start, 1)
}

fn fragment(fx: &mut Fixture, identifier: &str) -> NodeId {
    let name = fx.name(identifier);
    at(fx, SyntaxKind::VariableDeclarationFragment)
        .child(Role::Name, name)
        .build()
}

fn parameter(fx: &mut Fixture, identifier: &str) -> NodeId {
    let ty = fx.primitive_type("int");
    let name = fx.name(identifier);
    at(fx, SyntaxKind::SingleVariableDeclaration)
        .child(Role::Type, ty)
        .child(Role::Name, name)
        .build()
}

fn this(fx: &mut Fixture) -> NodeId {
    at(fx, SyntaxKind::ThisExpression).build()
}

/// Smallest well-formed node of `kind`, or `None` for kinds the generic
/// converter refuses.
fn minimal_instance(fx: &mut Fixture, kind: SyntaxKind) -> Option<NodeId> {
    use SyntaxKind as K;

    let id = match kind {
        K::CompilationUnit
        | K::ImportDeclaration
        | K::Modifier
        | K::TypeParameter
        | K::WildcardType => return None,

        // Declarations
        K::AnnotationTypeDeclaration | K::EnumDeclaration | K::TypeDeclaration => {
            let name = fx.name("T");
            at(fx, kind).child(Role::Name, name).build()
        }
        K::AnnotationTypeMemberDeclaration => {
            let ty = fx.primitive_type("int");
            let name = fx.name("value");
            let default = fx.int(0);
            at(fx, kind)
                .child(Role::Type, ty)
                .child(Role::Name, name)
                .child(Role::Default, default)
                .build()
        }
        K::AnonymousClassDeclaration => at(fx, kind).build(),
        K::CatchClause => {
            let exception = parameter(fx, "e");
            let body = fx.block(&[]);
            at(fx, kind)
                .child(Role::Exception, exception)
                .child(Role::Body, body)
                .build()
        }
        K::Dimension => at(fx, kind).build(),
        K::EnumConstantDeclaration => {
            let name = fx.name("RED");
            at(fx, kind).child(Role::Name, name).build()
        }
        K::FieldDeclaration => {
            let ty = fx.primitive_type("int");
            let x = fragment(fx, "x");
            at(fx, kind).child(Role::Type, ty).child(Role::Fragment, x).build()
        }
        K::Initializer => {
            let body = fx.block(&[]);
            at(fx, kind).child(Role::Body, body).build()
        }
        K::MethodDeclaration => {
            let name = fx.name("run");
            at(fx, kind).child(Role::Name, name).build()
        }
        K::PackageDeclaration => {
            let name = fx.name("p");
            at(fx, kind).child(Role::Name, name).build()
        }
        K::SingleVariableDeclaration => parameter(fx, "x"),
        K::VariableDeclarationFragment => fragment(fx, "x"),

        // Statements
        K::AssertStatement | K::ExpressionStatement | K::ThrowStatement => {
            let expression = fx.int_var("x");
            at(fx, kind).child(Role::Expression, expression).build()
        }
        K::Block => fx.block(&[]),
        K::BreakStatement
        | K::ContinueStatement
        | K::EmptyStatement
        | K::ReturnStatement
        | K::SwitchCase
        | K::ConstructorInvocation
        | K::SuperConstructorInvocation => at(fx, kind).build(),
        K::DoStatement | K::WhileStatement => {
            let expression = fx.int_var("x");
            let body = fx.block(&[]);
            at(fx, kind)
                .child(Role::Expression, expression)
                .child(Role::Body, body)
                .build()
        }
        K::EnhancedForStatement => {
            let item = parameter(fx, "item");
            let items = fx.name("items");
            let body = fx.block(&[]);
            at(fx, kind)
                .child(Role::Parameter, item)
                .child(Role::Expression, items)
                .child(Role::Body, body)
                .build()
        }
        K::ForStatement => {
            let body = fx.block(&[]);
            at(fx, kind).child(Role::Body, body).build()
        }
        K::IfStatement => {
            let condition = fx.int_var("x");
            let then = fx.block(&[]);
            at(fx, kind)
                .child(Role::Expression, condition)
                .child(Role::ThenStatement, then)
                .build()
        }
        K::LabeledStatement => {
            let label = fx.name("outer");
            let body = fx.block(&[]);
            at(fx, kind).child(Role::Label, label).child(Role::Body, body).build()
        }
        K::SwitchStatement => {
            let expression = fx.int_var("x");
            at(fx, kind).child(Role::Expression, expression).build()
        }
        K::SynchronizedStatement => {
            let lock = this(fx);
            let body = fx.block(&[]);
            at(fx, kind).child(Role::Expression, lock).child(Role::Body, body).build()
        }
        K::TryStatement => {
            let body = fx.block(&[]);
            let finally = fx.block(&[]);
            at(fx, kind).child(Role::Body, body).child(Role::Finally, finally).build()
        }
        K::TypeDeclarationStatement => {
            let name = fx.name("Local");
            let local = at(fx, K::TypeDeclaration).child(Role::Name, name).build();
            at(fx, kind).child(Role::Declaration, local).build()
        }
        K::VariableDeclarationStatement | K::VariableDeclarationExpression => {
            let ty = fx.primitive_type("int");
            let x = fragment(fx, "x");
            at(fx, kind).child(Role::Type, ty).child(Role::Fragment, x).build()
        }

        // Annotations
        K::MarkerAnnotation => {
            let name = fx.name("Deprecated");
            at(fx, kind).child(Role::TypeName, name).build()
        }
        K::NormalAnnotation => {
            let name = fx.name("Retention");
            at(fx, kind).child(Role::TypeName, name).build()
        }
        K::SingleMemberAnnotation => {
            let name = fx.name("SuppressWarnings");
            let value = fx.string("\"all\"");
            at(fx, kind)
                .child(Role::TypeName, name)
                .child(Role::Value, value)
                .build()
        }
        K::MemberValuePair => {
            let name = fx.name("value");
            let value = fx.int(1);
            at(fx, kind).child(Role::Name, name).child(Role::Value, value).build()
        }

        // Expressions
        K::ArrayAccess => {
            let array = fx.name("xs");
            let index = fx.int(0);
            at(fx, kind).child(Role::Array, array).child(Role::Index, index).build()
        }
        K::ArrayCreation => {
            let ty = fx.type_node(K::ArrayType, TypeRef::array_of(TypeRef::primitive("int")));
            let size = fx.int(3);
            at(fx, kind).child(Role::Type, ty).child(Role::Dimension, size).build()
        }
        K::ArrayInitializer => {
            let one = fx.int(1);
            at(fx, kind).child(Role::Expression, one).build()
        }
        K::Assignment => {
            let left = fx.int_var("x");
            let right = fx.int(1);
            at(fx, kind)
                .operator(AssignmentOperator::Assign)
                .child(Role::LeftHandSide, left)
                .child(Role::RightHandSide, right)
                .build()
        }
        K::BooleanLiteral | K::NullLiteral | K::ThisExpression => at(fx, kind).build(),
        K::CastExpression => {
            let ty = fx.primitive_type("long");
            let operand = fx.int(1);
            at(fx, kind).child(Role::Type, ty).child(Role::Expression, operand).build()
        }
        K::CharacterLiteral => at(fx, kind).token("'c'").build(),
        K::ClassInstanceCreation | K::CreationReference | K::TypeLiteral => {
            let ty = fx.simple_type("java.lang.Object");
            at(fx, kind).child(Role::Type, ty).build()
        }
        K::ConditionalExpression => {
            let condition = fx.int_var("c");
            let then = fx.int(1);
            let otherwise = fx.int(2);
            at(fx, kind)
                .child(Role::Expression, condition)
                .child(Role::ThenExpression, then)
                .child(Role::ElseExpression, otherwise)
                .build()
        }
        K::ExpressionMethodReference | K::FieldAccess => {
            let target = this(fx);
            let name = fx.name("size");
            at(fx, kind)
                .child(Role::Expression, target)
                .child(Role::Name, name)
                .build()
        }
        K::InfixExpression => {
            let a = fx.int_var("a");
            let b = fx.int_var("b");
            fx.infix(InfixOperator::Plus, a, b)
        }
        K::InstanceofExpression => {
            let value = fx.name("o");
            let ty = fx.simple_type("java.lang.String");
            at(fx, kind)
                .child(Role::LeftOperand, value)
                .child(Role::RightOperand, ty)
                .build()
        }
        K::LambdaExpression => {
            let body = fx.int(0);
            at(fx, kind).child(Role::Body, body).build()
        }
        K::MethodInvocation
        | K::SuperFieldAccess
        | K::SuperMethodInvocation
        | K::SuperMethodReference => {
            let name = fx.name("get");
            at(fx, kind).child(Role::Name, name).build()
        }
        K::NumberLiteral => fx.int(7),
        K::ParenthesizedExpression => {
            let inner = fx.int_var("x");
            at(fx, kind).child(Role::Expression, inner).build()
        }
        K::PostfixExpression => {
            let operand = fx.int_var("i");
            at(fx, kind)
                .operator(PostfixOperator::Increment)
                .child(Role::Operand, operand)
                .build()
        }
        K::PrefixExpression => {
            let operand = fx.int_var("i");
            at(fx, kind)
                .operator(PrefixOperator::Minus)
                .child(Role::Operand, operand)
                .build()
        }
        K::QualifiedName => {
            let qualifier = fx.name("java");
            let name = fx.name("util");
            at(fx, kind)
                .child(Role::Qualifier, qualifier)
                .child(Role::Name, name)
                .build()
        }
        K::SimpleName => fx.name("x"),
        K::StringLiteral => fx.string("\"s\""),
        K::TypeMethodReference => {
            let ty = fx.simple_type("java.lang.String");
            let name = fx.name("valueOf");
            at(fx, kind).child(Role::Type, ty).child(Role::Name, name).build()
        }

        // Types
        K::ArrayType => fx.type_node(kind, TypeRef::array_of(TypeRef::primitive("int"))),
        K::IntersectionType | K::UnionType => {
            let first = fx.simple_type("java.lang.Runnable");
            let second = fx.simple_type("java.io.Serializable");
            at(fx, kind).children(Role::Type, [first, second]).build()
        }
        K::NameQualifiedType => {
            let qualifier = fx.name("java");
            let name = fx.name("Object");
            at(fx, kind)
                .child(Role::Qualifier, qualifier)
                .child(Role::Name, name)
                .build()
        }
        K::ParameterizedType => {
            let base = fx.simple_type("java.util.List");
            at(fx, kind).child(Role::Type, base).build()
        }
        K::PrimitiveType => fx.primitive_type("int"),
        K::QualifiedType | K::SimpleType => fx.type_node(kind, TypeRef::declared("a.B")),

        // Comments and documentation
        K::BlockComment | K::LineComment | K::Javadoc => at(fx, kind).build(),
        K::TagElement => at(fx, kind).token("@return").build(),
        K::TextElement | K::MemberRef | K::MethodRef | K::MethodRefParameter => {
            at(fx, kind).token("text").build()
        }
    };
    Some(id)
}

#[test]
fn every_converted_kind_accepts_a_minimal_instance() {
    let mut converted = 0;
    for kind in SyntaxKind::ALL {
        let mut fx = Fixture::new();
        let Some(id) = minimal_instance(&mut fx, kind) else {
            continue;
        };
        let node = convert_fixture(fx, id)
            .unwrap_or_else(|err| panic!("{kind}: minimal instance rejected: {err:?}"));

        let expected = match kind {
            // Doc-internal references keep only their text.
            SyntaxKind::MemberRef | SyntaxKind::MethodRef | SyntaxKind::MethodRefParameter => {
                "TextElement".to_string()
            }
            other => other.to_string(),
        };
        assert_eq!(node.value.kind_name(), expected, "{kind}");
        converted += 1;
    }
    assert_eq!(converted, SyntaxKind::ALL.len() - 5);
}

#[test]
fn compilation_unit_needs_its_own_entry_point() {
    let mut b = SyntaxTreeBuilder::new();
    let unit = b.node(SyntaxKind::CompilationUnit, 0, 10).build();
    let tree = b.finish().unwrap();
    let err = convert(&tree, &ResolutionTable::new(), unit).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::WrongEntryPoint {
            kind: SyntaxKind::CompilationUnit,
            ..
        }
    ));
}

// ---
// Declarations
// ---

#[test]
fn method_declaration_keeps_signature_and_body() {
    let mut fx = Fixture::new();
    let void = fx.primitive_type("void");
    let name = fx.name("run");
    let param_type = fx.primitive_type("int");
    let param_name = fx.name("x");
    let param = fx
        .builder
        .node(SyntaxKind::SingleVariableDeclaration, 20, 5)
        .child(Role::Type, param_type)
        .child(Role::Name, param_name)
        .build();
    let thrown = fx.simple_type("java.io.IOException");
    let x = fx.int_var("x");
    let ret = fx
        .builder
        .node(SyntaxKind::ReturnStatement, 30, 9)
        .child(Role::Expression, x)
        .build();
    let body = fx.block(&[ret]);
    let method = fx
        .builder
        .node(SyntaxKind::MethodDeclaration, 0, 40)
        .modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
        .child(Role::ReturnType, void)
        .child(Role::Name, name)
        .child(Role::Parameter, param)
        .child(Role::ThrownException, thrown)
        .child(Role::Body, body)
        .build();
    fx.table
        .set_element(method, ElementRef::new(ElementKind::Method, "p.A.run"));

    let decl = convert_fixture(fx, method).unwrap().into_declaration().unwrap();
    assert_eq!(decl.position, SourcePosition::new(0, 40));
    let BodyDeclaration::Method(method) = decl.value else {
        panic!("expected a method");
    };
    assert!(!method.is_constructor);
    assert!(method.header.modifiers.contains(Modifiers::STATIC));
    assert_eq!(method.name.value.identifier, "run");
    assert_eq!(method.element.unwrap().qualified_name(), "p.A.run");
    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.parameters[0].position, SourcePosition::new(20, 5));
    assert_eq!(method.thrown_exceptions[0].value.type_ref().name(), "java.io.IOException");
    let body = method.body.unwrap();
    assert!(matches!(
        &body.value.statements[0].value,
        Statement::Return { expression: Some(_) }
    ));
}

#[test]
fn type_declaration_collects_members_in_order() {
    let mut fx = Fixture::new();
    let class_name = fx.name("Point");
    let field_type = fx.primitive_type("int");
    let x = fx.name("x");
    let x_fragment = fx
        .builder
        .node(SyntaxKind::VariableDeclarationFragment, 0, 1)
        .child(Role::Name, x)
        .build();
    let y = fx.name("y");
    let y_fragment = fx
        .builder
        .node(SyntaxKind::VariableDeclarationFragment, 0, 1)
        .child(Role::Name, y)
        .build();
    let field = fx
        .builder
        .node(SyntaxKind::FieldDeclaration, 0, 10)
        .modifiers(Modifiers::PRIVATE)
        .child(Role::Type, field_type)
        .children(Role::Fragment, [x_fragment, y_fragment])
        .build();
    let block = fx.block(&[]);
    let init = fx
        .builder
        .node(SyntaxKind::Initializer, 0, 2)
        .modifiers(Modifiers::STATIC)
        .child(Role::Body, block)
        .build();
    let iface = fx.simple_type("Comparable");
    let class = fx
        .builder
        .node(SyntaxKind::TypeDeclaration, 0, 50)
        .child(Role::Name, class_name)
        .child(Role::SuperInterface, iface)
        .children(Role::BodyDeclaration, [field, init])
        .build();

    let decl = convert_fixture(fx, class).unwrap().into_declaration().unwrap();
    let BodyDeclaration::Type(ty) = decl.value else {
        panic!("expected a type declaration");
    };
    assert!(!ty.is_interface);
    assert!(ty.superclass.is_none());
    assert_eq!(ty.super_interfaces.len(), 1);
    assert_eq!(ty.core.name.value.identifier, "Point");
    let kinds: Vec<_> = ty.core.body_declarations.iter().map(|d| d.value.kind_name()).collect();
    assert_eq!(kinds, ["FieldDeclaration", "Initializer"]);
    match &ty.core.body_declarations[0].value {
        BodyDeclaration::Field { fragments, .. } => {
            let names: Vec<_> = fragments.iter().map(|f| f.value.name.value.identifier.as_str()).collect();
            assert_eq!(names, ["x", "y"]);
        }
        other => panic!("expected a field, got {}", other.kind_name()),
    }
}

#[test]
fn enum_constants_record_variable_and_constructor() {
    let mut fx = Fixture::new();
    let enum_name = fx.name("Color");
    let red = fx.name("RED");
    let arg = fx.int(1);
    let constant = fx
        .builder
        .node(SyntaxKind::EnumConstantDeclaration, 0, 6)
        .child(Role::Name, red)
        .child(Role::Argument, arg)
        .build();
    let decl = fx
        .builder
        .node(SyntaxKind::EnumDeclaration, 0, 30)
        .child(Role::Name, enum_name)
        .child(Role::EnumConstant, constant)
        .build();
    fx.table
        .set_variable(constant, ElementRef::new(ElementKind::EnumConstant, "Color.RED"))
        .set_element(constant, ElementRef::new(ElementKind::Constructor, "Color.<init>"));

    let converted = convert_fixture(fx, decl).unwrap().into_declaration().unwrap();
    let BodyDeclaration::Enum(decl) = converted.value else {
        panic!("expected an enum");
    };
    let red = &decl.constants[0].value;
    assert_eq!(red.name.value.identifier, "RED");
    assert_eq!(red.variable.as_ref().unwrap().kind(), ElementKind::EnumConstant);
    assert_eq!(red.constructor.as_ref().unwrap().kind(), ElementKind::Constructor);
    assert_eq!(red.arguments.len(), 1);
}

// ---
// Statements
// ---

#[test]
fn if_statement_converts_both_branches() {
    let mut fx = Fixture::new();
    let cond = fx.builder.node(SyntaxKind::BooleanLiteral, 4, 4).flag(Flag::True).build();
    let then_branch = fx.builder.node(SyntaxKind::EmptyStatement, 10, 1).build();
    let else_branch = fx.block(&[]);
    let stmt = fx
        .builder
        .node(SyntaxKind::IfStatement, 0, 20)
        .child(Role::Expression, cond)
        .child(Role::ThenStatement, then_branch)
        .child(Role::ElseStatement, else_branch)
        .build();
    let (tree, table) = fx.finish();

    let env = Environment::new(&table);
    let stmt = TreeConverter::new(&env)
        .convert_statement(tree.get(stmt))
        .unwrap()
        .unwrap();
    let Statement::If {
        expression,
        then_statement,
        else_statement,
    } = stmt.value
    else {
        panic!("expected an if statement");
    };
    assert!(matches!(expression.value, Expression::BooleanLiteral { value: true, .. }));
    assert_eq!(then_statement.value, Statement::Empty);
    assert!(matches!(else_statement.unwrap().value, Statement::Block(_)));
}

#[test]
fn switch_default_case_has_no_expression() {
    let mut fx = Fixture::new();
    let selector = fx.int_var("n");
    let one = fx.int(1);
    let case_one = fx
        .builder
        .node(SyntaxKind::SwitchCase, 0, 7)
        .child(Role::Expression, one)
        .build();
    let brk = fx.builder.node(SyntaxKind::BreakStatement, 0, 6).build();
    let default = fx.builder.node(SyntaxKind::SwitchCase, 0, 8).build();
    let switch = fx
        .builder
        .node(SyntaxKind::SwitchStatement, 0, 40)
        .child(Role::Expression, selector)
        .children(Role::Statement, [case_one, brk, default])
        .build();

    let stmt = convert_fixture(fx, switch).unwrap().into_statement().unwrap();
    let Statement::Switch { statements, .. } = stmt.value else {
        panic!("expected a switch");
    };
    assert!(matches!(statements[0].value, Statement::SwitchCase { expression: Some(_) }));
    assert!(matches!(statements[1].value, Statement::Break { label: None }));
    assert!(matches!(statements[2].value, Statement::SwitchCase { expression: None }));
}

#[test]
fn try_statement_keeps_catch_clauses() {
    let mut fx = Fixture::new();
    let exception_type = fx.simple_type("java.lang.Exception");
    let exception_name = fx.name("e");
    let exception = fx
        .builder
        .node(SyntaxKind::SingleVariableDeclaration, 0, 11)
        .child(Role::Type, exception_type)
        .child(Role::Name, exception_name)
        .build();
    let catch_body = fx.block(&[]);
    let clause = fx
        .builder
        .node(SyntaxKind::CatchClause, 0, 20)
        .child(Role::Exception, exception)
        .child(Role::Body, catch_body)
        .build();
    let body = fx.block(&[]);
    let finally = fx.block(&[]);
    let try_stmt = fx
        .builder
        .node(SyntaxKind::TryStatement, 0, 60)
        .child(Role::Body, body)
        .child(Role::CatchClause, clause)
        .child(Role::Finally, finally)
        .build();

    let stmt = convert_fixture(fx, try_stmt).unwrap().into_statement().unwrap();
    let Statement::Try {
        resources,
        catch_clauses,
        finally,
        ..
    } = stmt.value
    else {
        panic!("expected a try statement");
    };
    assert!(resources.is_empty());
    assert_eq!(catch_clauses[0].value.exception.value.name.value.identifier, "e");
    assert!(finally.is_some());
}

// ---
// Expressions
// ---

#[test]
fn method_invocation_records_target_and_arguments() {
    let mut fx = Fixture::new();
    let receiver = fx.name("list");
    let name = fx.name("add");
    let arg = fx.string("\"x\"");
    let call = fx
        .builder
        .node(SyntaxKind::MethodInvocation, 0, 15)
        .child(Role::Expression, receiver)
        .child(Role::Name, name)
        .child(Role::Argument, arg)
        .build();
    fx.table
        .set_element(call, ElementRef::new(ElementKind::Method, "java.util.List.add"))
        .set_type(call, TypeRef::primitive("boolean"));

    let expr = convert_fixture(fx, call).unwrap().into_expression().unwrap();
    let Expression::MethodInvocation {
        method,
        expression,
        name,
        arguments,
        ty,
    } = expr.value
    else {
        panic!("expected a method invocation");
    };
    assert_eq!(method.unwrap().name(), "add");
    assert!(expression.is_some());
    assert_eq!(name.value.identifier, "add");
    assert!(matches!(&arguments[0].value, Expression::StringLiteral { value, .. } if value == "x"));
    assert_eq!(ty.name(), "boolean");
}

#[test]
fn qualified_names_nest_left() {
    let mut fx = Fixture::new();
    let java = fx.name("java");
    let util = fx.name("util");
    let inner = fx
        .builder
        .node(SyntaxKind::QualifiedName, 0, 9)
        .child(Role::Qualifier, java)
        .child(Role::Name, util)
        .build();
    let list = fx.name("List");
    let outer = fx
        .builder
        .node(SyntaxKind::QualifiedName, 0, 14)
        .child(Role::Qualifier, inner)
        .child(Role::Name, list)
        .build();

    let expr = convert_fixture(fx, outer).unwrap().into_expression().unwrap();
    let Expression::Name(name) = expr.value else {
        panic!("expected a name");
    };
    assert_eq!(name.full_name(), "java.util.List");
    assert_eq!(name.simple_identifier(), "List");
}

#[test]
fn lambda_bodies_may_be_blocks_or_expressions() {
    let mut fx = Fixture::new();
    let param_name = fx.name("x");
    let param = fx
        .builder
        .node(SyntaxKind::VariableDeclarationFragment, 0, 1)
        .child(Role::Name, param_name)
        .build();
    let body = fx.int_var("x");
    let expr_lambda = fx
        .builder
        .node(SyntaxKind::LambdaExpression, 0, 6)
        .child(Role::Parameter, param)
        .child(Role::Body, body)
        .build();
    let block = fx.block(&[]);
    let block_lambda = fx
        .builder
        .node(SyntaxKind::LambdaExpression, 10, 8)
        .child(Role::Body, block)
        .build();
    let (tree, table) = fx.finish();

    match convert(&tree, &table, expr_lambda).unwrap().value {
        TreeNode::Expression(Expression::Lambda(lambda)) => {
            assert_eq!(lambda.parameters.len(), 1);
            assert!(matches!(lambda.body, LambdaBody::Expression(_)));
            assert!(lambda.ty.is_unresolved());
        }
        other => panic!("expected a lambda, got {}", other.kind_name()),
    }
    match convert(&tree, &table, block_lambda).unwrap().value {
        TreeNode::Expression(Expression::Lambda(lambda)) => {
            assert!(matches!(lambda.body, LambdaBody::Block(_)));
        }
        other => panic!("expected a lambda, got {}", other.kind_name()),
    }
}

#[test]
fn cast_retypes_a_parameterless_lambda_to_its_target() {
    let mut fx = Fixture::new();
    let target = TypeRef::intersection(vec![
        TypeRef::declared("java.lang.Runnable"),
        TypeRef::declared("java.io.Serializable"),
    ]);
    let runnable = fx.simple_type("java.lang.Runnable");
    let serializable = fx.simple_type("java.io.Serializable");
    let cast_type = fx
        .builder
        .node(SyntaxKind::IntersectionType, 1, 40)
        .children(Role::Type, [runnable, serializable])
        .build();
    fx.table.set_type(cast_type, target.clone());
    let body = fx.block(&[]);
    let lambda = fx
        .builder
        .node(SyntaxKind::LambdaExpression, 43, 8)
        .child(Role::Body, body)
        .build();
    // What the resolver inferred on its own.
    fx.table.set_type(lambda, TypeRef::declared("java.lang.Runnable"));
    let cast = fx
        .builder
        .node(SyntaxKind::CastExpression, 0, 51)
        .child(Role::Type, cast_type)
        .child(Role::Expression, lambda)
        .build();

    let expr = convert_fixture(fx, cast).unwrap().into_expression().unwrap();
    let Expression::Cast {
        type_node,
        expression,
        ..
    } = expr.value
    else {
        panic!("expected a cast");
    };
    assert!(matches!(type_node.value, Type::Intersection { .. }));
    let Expression::Lambda(lambda) = expression.value else {
        panic!("expected a lambda");
    };
    assert_eq!(lambda.ty, target);
    assert_eq!(lambda.ty.name(), "java.lang.Runnable & java.io.Serializable");
}

#[test]
fn array_type_component_comes_from_resolution() {
    let mut fx = Fixture::new();
    // The written element type is ignored.
    let element = fx.simple_type("Ignored");
    let array = fx
        .builder
        .node(SyntaxKind::ArrayType, 5, 9)
        .child(Role::ElementType, element)
        .build();
    fx.table.set_type(
        array,
        TypeRef::array_of(TypeRef::array_of(TypeRef::primitive("int"))),
    );

    let ty = convert_fixture(fx, array).unwrap().into_type().unwrap();
    let Type::Array(outer) = ty.value else {
        panic!("expected an array type");
    };
    assert_eq!(outer.ty.name(), "int[][]");
    assert_eq!(outer.component.position, SourcePosition::new(5, 9));
    let Type::Array(inner) = &outer.component.value else {
        panic!("expected a nested array type");
    };
    assert!(matches!(inner.component.value, Type::Primitive { .. }));
}

#[test]
fn literals_carry_values_and_types() {
    let mut fx = Fixture::new();
    let number = fx.int(42);
    let text = fx.string(r#""tab\there""#);
    let ch = fx.builder.node(SyntaxKind::CharacterLiteral, 0, 3).token(r"'\n'").build();
    let null = fx.builder.node(SyntaxKind::NullLiteral, 0, 4).build();
    let (tree, table) = fx.finish();

    match convert(&tree, &table, number).unwrap().value {
        TreeNode::Expression(Expression::NumberLiteral { token, value, ty }) => {
            assert_eq!(token, "42");
            assert!(value.unwrap().is_numeric());
            assert_eq!(ty.name(), "int");
        }
        other => panic!("unexpected {}", other.kind_name()),
    }
    assert!(matches!(
        convert(&tree, &table, text).unwrap().value,
        TreeNode::Expression(Expression::StringLiteral { ref value, .. }) if value == "tab\there"
    ));
    assert!(matches!(
        convert(&tree, &table, ch).unwrap().value,
        TreeNode::Expression(Expression::CharacterLiteral { value: '\n', .. })
    ));
    assert!(matches!(
        convert(&tree, &table, null).unwrap().value,
        TreeNode::Expression(Expression::NullLiteral { .. })
    ));
}

#[test]
fn malformed_string_token_is_fatal() {
    let mut fx = Fixture::new();
    let text = fx.string(r#""bad \q escape""#);
    let err = convert_fixture(fx, text).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Shape);
    assert!(matches!(
        err,
        ConvertError::MalformedLiteral { reason: "unknown escape sequence", .. }
    ));
}

#[test]
fn mixed_operators_keep_their_nesting() {
    let mut fx = Fixture::new();
    let a = fx.int_var("a");
    let b = fx.int_var("b");
    let times = fx.infix(InfixOperator::Times, a, b);
    let c = fx.int_var("c");
    let plus = fx.infix(InfixOperator::Plus, times, c);

    let expr = convert_fixture(fx, plus).unwrap().into_expression().unwrap();
    let Expression::Infix(infix) = expr.value else {
        panic!("expected an infix expression");
    };
    assert_eq!(infix.operator, InfixOperator::Plus);
    assert_eq!(infix.operands.len(), 2);
    assert!(matches!(
        &infix.operands[0].value,
        Expression::Infix(inner) if inner.operator == InfixOperator::Times
    ));
}

// ---
// Documentation
// ---

#[test]
fn javadoc_tags_hold_text_and_names() {
    let mut fx = Fixture::new();
    let summary = fx.builder.node(SyntaxKind::TextElement, 4, 10).token("Adds two.").build();
    let first = fx.builder.node(SyntaxKind::TagElement, 4, 10).child(Role::Fragment, summary).build();
    let see_target = fx.name("List");
    let see = fx
        .builder
        .node(SyntaxKind::TagElement, 16, 9)
        .token("@see")
        .child(Role::Fragment, see_target)
        .build();
    let doc = fx
        .builder
        .node(SyntaxKind::Javadoc, 0, 30)
        .children(Role::Tag, [first, see])
        .build();

    let node = convert_fixture(fx, doc).unwrap();
    let TreeNode::Comment(treebridge::ast::Comment::Javadoc(doc)) = node.value else {
        panic!("expected a doc comment");
    };
    assert_eq!(doc.tags.len(), 2);
    assert_eq!(doc.tags[0].value.tag_name, None);
    assert!(matches!(
        &doc.tags[0].value.fragments[0].value,
        DocElement::Text(text) if text.text == "Adds two."
    ));
    assert_eq!(doc.tags[1].value.tag_name.as_deref(), Some("@see"));
    assert!(matches!(
        &doc.tags[1].value.fragments[0].value,
        DocElement::Name(Name::Simple(name)) if name.identifier == "List"
    ));
}
