//! Loads trees in the Shift JSON format: every node is an object whose `type`
//! names its kind, field names are camelCase, and absent optional children as
//! well as elided array positions are `null`.
//!
//! Boolean flags (`isGenerator`, `isStatic`, regexp flags, ...) default to
//! `false` when missing. Children and sequences are required.

use serde_json::{Map, Value};

use crate::{
    err::AstError,
    kind::NodeKind,
    ops::{
        BinaryOperator, CompoundAssignmentOperator, UnaryOperator, UpdateOperator,
        VariableDeclarationKind,
    },
    tree::*,
};

pub(crate) struct JsonNode<'a> {
    kind: NodeKind,
    fields: &'a Map<String, Value>,
}

impl<'a> JsonNode<'a> {
    fn new(value: &'a Value) -> Result<Self, AstError> {
        let fields = value.as_object().ok_or(AstError::NotANode)?;
        let name = fields
            .get("type")
            .and_then(Value::as_str)
            .ok_or(AstError::NotANode)?;
        let kind =
            NodeKind::from_name(name).ok_or_else(|| AstError::UnknownKind(name.to_owned()))?;
        Ok(Self { kind, fields })
    }

    fn expect_kind(&self, kind: NodeKind) -> Result<(), AstError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    fn unexpected(&self, expected: &'static str) -> AstError {
        AstError::UnexpectedKind {
            expected,
            found: self.kind,
        }
    }

    fn invalid(&self, field: &'static str) -> AstError {
        AstError::InvalidField {
            kind: self.kind,
            field,
        }
    }

    fn field(&self, field: &'static str) -> Result<&'a Value, AstError> {
        self.fields.get(field).ok_or(AstError::MissingField {
            kind: self.kind,
            field,
        })
    }

    /// `None` for both a missing field and an explicit `null`.
    fn present(&self, field: &'static str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    fn string(&self, field: &'static str) -> Result<String, AstError> {
        self.field(field)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(field))
    }

    fn opt_string(&self, field: &'static str) -> Result<Option<String>, AstError> {
        self.present(field)
            .map(|v| v.as_str().map(str::to_owned).ok_or_else(|| self.invalid(field)))
            .transpose()
    }

    fn flag(&self, field: &'static str) -> Result<bool, AstError> {
        match self.present(field) {
            Some(v) => v.as_bool().ok_or_else(|| self.invalid(field)),
            None => Ok(false),
        }
    }

    fn number(&self, field: &'static str) -> Result<f64, AstError> {
        self.field(field)?
            .as_f64()
            .ok_or_else(|| self.invalid(field))
    }

    fn operator<T>(&self, field: &'static str, parse: fn(&str) -> Option<T>) -> Result<T, AstError> {
        self.field(field)?
            .as_str()
            .and_then(parse)
            .ok_or_else(|| self.invalid(field))
    }

    fn array(&self, field: &'static str) -> Result<&'a Vec<Value>, AstError> {
        self.field(field)?
            .as_array()
            .ok_or_else(|| self.invalid(field))
    }

    fn child<T: FromJson>(&self, field: &'static str) -> Result<T, AstError> {
        T::from_json(self.field(field)?)
    }

    fn opt_child<T: FromJson>(&self, field: &'static str) -> Result<Option<T>, AstError> {
        self.present(field).map(T::from_json).transpose()
    }

    fn list<T: FromJson>(&self, field: &'static str) -> Result<Vec<T>, AstError> {
        self.array(field)?.iter().map(T::from_json).collect()
    }

    fn sparse<T: FromJson>(&self, field: &'static str) -> Result<Vec<Option<T>>, AstError> {
        self.array(field)?
            .iter()
            .map(|v| {
                if v.is_null() {
                    Ok(None)
                } else {
                    T::from_json(v).map(Some)
                }
            })
            .collect()
    }
}

pub(crate) trait FromJson: Sized {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError>;

    fn from_json(value: &Value) -> Result<Self, AstError> {
        Self::from_node(&JsonNode::new(value)?)
    }
}

fn boxed<T: FromJson>(node: &JsonNode<'_>) -> Result<Box<T>, AstError> {
    T::from_node(node).map(Box::new)
}

macro_rules! from_json {
    ($node: ident |$n: ident| $body: expr) => {
        impl FromJson for $node {
            fn from_node($n: &JsonNode<'_>) -> Result<Self, AstError> {
                $n.expect_kind(NodeKind::$node)?;
                Ok($body)
            }
        }
    };
}

// ----- node structs -----

from_json!(Module |n| Module {
    directives: n.list("directives")?,
    items: n.list("items")?,
});

from_json!(Script |n| Script {
    directives: n.list("directives")?,
    statements: n.list("statements")?,
});

from_json!(Directive |n| Directive {
    raw_value: n.string("rawValue")?,
});

from_json!(BindingIdentifier |n| BindingIdentifier {
    name: n.string("name")?,
});

from_json!(BindingWithDefault |n| BindingWithDefault {
    binding: n.child("binding")?,
    init: n.child("init")?,
});

from_json!(ArrayBinding |n| ArrayBinding {
    elements: n.sparse("elements")?,
    rest: n.opt_child("rest")?,
});

from_json!(ObjectBinding |n| ObjectBinding {
    properties: n.list("properties")?,
});

from_json!(BindingPropertyIdentifier |n| BindingPropertyIdentifier {
    binding: n.child("binding")?,
    init: n.opt_child("init")?,
});

from_json!(BindingPropertyProperty |n| BindingPropertyProperty {
    name: n.child("name")?,
    binding: n.child("binding")?,
});

from_json!(AssignmentTargetIdentifier |n| AssignmentTargetIdentifier {
    name: n.string("name")?,
});

from_json!(AssignmentTargetWithDefault |n| AssignmentTargetWithDefault {
    binding: n.child("binding")?,
    init: n.child("init")?,
});

from_json!(ArrayAssignmentTarget |n| ArrayAssignmentTarget {
    elements: n.sparse("elements")?,
    rest: n.opt_child("rest")?,
});

from_json!(ObjectAssignmentTarget |n| ObjectAssignmentTarget {
    properties: n.list("properties")?,
});

from_json!(AssignmentTargetPropertyIdentifier |n| AssignmentTargetPropertyIdentifier {
    binding: n.child("binding")?,
    init: n.opt_child("init")?,
});

from_json!(AssignmentTargetPropertyProperty |n| AssignmentTargetPropertyProperty {
    name: n.child("name")?,
    binding: n.child("binding")?,
});

from_json!(StaticMemberAssignmentTarget |n| StaticMemberAssignmentTarget {
    object: n.child("object")?,
    property: n.string("property")?,
});

from_json!(ComputedMemberAssignmentTarget |n| ComputedMemberAssignmentTarget {
    object: n.child("object")?,
    expression: n.child("expression")?,
});

from_json!(ClassDeclaration |n| ClassDeclaration {
    name: n.child("name")?,
    super_class: n.opt_child("super")?,
    elements: n.list("elements")?,
});

from_json!(ClassExpression |n| ClassExpression {
    name: n.opt_child("name")?,
    super_class: n.opt_child("super")?,
    elements: n.list("elements")?,
});

from_json!(ClassElement |n| ClassElement {
    is_static: n.flag("isStatic")?,
    method: n.child("method")?,
});

from_json!(Import |n| Import {
    module_specifier: n.string("moduleSpecifier")?,
    default_binding: n.opt_child("defaultBinding")?,
    named_imports: n.list("namedImports")?,
});

from_json!(ImportNamespace |n| ImportNamespace {
    module_specifier: n.string("moduleSpecifier")?,
    default_binding: n.opt_child("defaultBinding")?,
    namespace_binding: n.child("namespaceBinding")?,
});

from_json!(ImportSpecifier |n| ImportSpecifier {
    name: n.opt_string("name")?,
    binding: n.child("binding")?,
});

from_json!(ExportAllFrom |n| ExportAllFrom {
    module_specifier: n.string("moduleSpecifier")?,
});

from_json!(ExportFrom |n| ExportFrom {
    named_exports: n.list("namedExports")?,
    module_specifier: n.string("moduleSpecifier")?,
});

from_json!(ExportLocals |n| ExportLocals {
    named_exports: n.list("namedExports")?,
});

from_json!(Export |n| Export {
    declaration: n.child("declaration")?,
});

from_json!(ExportDefault |n| ExportDefault {
    body: n.child("body")?,
});

from_json!(ExportFromSpecifier |n| ExportFromSpecifier {
    name: n.string("name")?,
    exported_name: n.opt_string("exportedName")?,
});

from_json!(ExportLocalSpecifier |n| ExportLocalSpecifier {
    name: n.child("name")?,
    exported_name: n.opt_string("exportedName")?,
});

from_json!(Method |n| Method {
    is_generator: n.flag("isGenerator")?,
    name: n.child("name")?,
    params: n.child("params")?,
    body: n.child("body")?,
});

from_json!(Getter |n| Getter {
    name: n.child("name")?,
    body: n.child("body")?,
});

from_json!(Setter |n| Setter {
    name: n.child("name")?,
    param: n.child("param")?,
    body: n.child("body")?,
});

from_json!(DataProperty |n| DataProperty {
    name: n.child("name")?,
    expression: n.child("expression")?,
});

from_json!(ShorthandProperty |n| ShorthandProperty {
    name: n.child("name")?,
});

from_json!(ComputedPropertyName |n| ComputedPropertyName {
    expression: n.child("expression")?,
});

from_json!(StaticPropertyName |n| StaticPropertyName {
    value: n.string("value")?,
});

from_json!(FormalParameters |n| FormalParameters {
    items: n.list("items")?,
    rest: n.opt_child("rest")?,
});

from_json!(FunctionBody |n| FunctionBody {
    directives: n.list("directives")?,
    statements: n.list("statements")?,
});

from_json!(FunctionDeclaration |n| FunctionDeclaration {
    is_generator: n.flag("isGenerator")?,
    name: n.child("name")?,
    params: n.child("params")?,
    body: n.child("body")?,
});

from_json!(FunctionExpression |n| FunctionExpression {
    is_generator: n.flag("isGenerator")?,
    name: n.opt_child("name")?,
    params: n.child("params")?,
    body: n.child("body")?,
});

from_json!(ArrayExpression |n| ArrayExpression {
    elements: n.sparse("elements")?,
});

from_json!(ArrowExpression |n| ArrowExpression {
    params: n.child("params")?,
    body: n.child("body")?,
});

from_json!(AssignmentExpression |n| AssignmentExpression {
    binding: n.child("binding")?,
    expression: n.child("expression")?,
});

from_json!(BinaryExpression |n| BinaryExpression {
    left: n.child("left")?,
    operator: n.operator("operator", BinaryOperator::parse)?,
    right: n.child("right")?,
});

from_json!(CallExpression |n| CallExpression {
    callee: n.child("callee")?,
    arguments: n.list("arguments")?,
});

from_json!(CompoundAssignmentExpression |n| CompoundAssignmentExpression {
    binding: n.child("binding")?,
    operator: n.operator("operator", CompoundAssignmentOperator::parse)?,
    expression: n.child("expression")?,
});

from_json!(ComputedMemberExpression |n| ComputedMemberExpression {
    object: n.child("object")?,
    expression: n.child("expression")?,
});

from_json!(ConditionalExpression |n| ConditionalExpression {
    test: n.child("test")?,
    consequent: n.child("consequent")?,
    alternate: n.child("alternate")?,
});

from_json!(IdentifierExpression |n| IdentifierExpression {
    name: n.string("name")?,
});

from_json!(LiteralBooleanExpression |n| LiteralBooleanExpression {
    value: n.field("value")?.as_bool().ok_or_else(|| n.invalid("value"))?,
});

from_json!(LiteralInfinityExpression |_n| LiteralInfinityExpression);

from_json!(LiteralNullExpression |_n| LiteralNullExpression);

from_json!(LiteralNumericExpression |n| LiteralNumericExpression {
    value: n.number("value")?,
});

from_json!(LiteralRegExpExpression |n| LiteralRegExpExpression {
    pattern: n.string("pattern")?,
    global: n.flag("global")?,
    ignore_case: n.flag("ignoreCase")?,
    multi_line: n.flag("multiLine")?,
    sticky: n.flag("sticky")?,
    unicode: n.flag("unicode")?,
});

from_json!(LiteralStringExpression |n| LiteralStringExpression {
    value: n.string("value")?,
});

from_json!(NewExpression |n| NewExpression {
    callee: n.child("callee")?,
    arguments: n.list("arguments")?,
});

from_json!(NewTargetExpression |_n| NewTargetExpression);

from_json!(ObjectExpression |n| ObjectExpression {
    properties: n.list("properties")?,
});

from_json!(StaticMemberExpression |n| StaticMemberExpression {
    object: n.child("object")?,
    property: n.string("property")?,
});

from_json!(SpreadElement |n| SpreadElement {
    expression: n.child("expression")?,
});

from_json!(Super |_n| Super);

from_json!(TemplateExpression |n| TemplateExpression {
    tag: n.opt_child("tag")?,
    elements: n.list("elements")?,
});

from_json!(TemplateElement |n| TemplateElement {
    raw_value: n.string("rawValue")?,
});

from_json!(ThisExpression |_n| ThisExpression);

from_json!(UnaryExpression |n| UnaryExpression {
    operator: n.operator("operator", UnaryOperator::parse)?,
    operand: n.child("operand")?,
});

from_json!(UpdateExpression |n| UpdateExpression {
    is_prefix: n.flag("isPrefix")?,
    operator: n.operator("operator", UpdateOperator::parse)?,
    operand: n.child("operand")?,
});

from_json!(YieldExpression |n| YieldExpression {
    expression: n.opt_child("expression")?,
});

from_json!(YieldGeneratorExpression |n| YieldGeneratorExpression {
    expression: n.child("expression")?,
});

from_json!(Block |n| Block {
    statements: n.list("statements")?,
});

from_json!(BlockStatement |n| BlockStatement {
    block: n.child("block")?,
});

from_json!(BreakStatement |n| BreakStatement {
    label: n.opt_string("label")?,
});

from_json!(ContinueStatement |n| ContinueStatement {
    label: n.opt_string("label")?,
});

from_json!(DebuggerStatement |_n| DebuggerStatement);

from_json!(DoWhileStatement |n| DoWhileStatement {
    body: n.child("body")?,
    test: n.child("test")?,
});

from_json!(EmptyStatement |_n| EmptyStatement);

from_json!(ExpressionStatement |n| ExpressionStatement {
    expression: n.child("expression")?,
});

from_json!(ForInStatement |n| ForInStatement {
    left: n.child("left")?,
    right: n.child("right")?,
    body: n.child("body")?,
});

from_json!(ForOfStatement |n| ForOfStatement {
    left: n.child("left")?,
    right: n.child("right")?,
    body: n.child("body")?,
});

from_json!(ForStatement |n| ForStatement {
    init: n.opt_child("init")?,
    test: n.opt_child("test")?,
    update: n.opt_child("update")?,
    body: n.child("body")?,
});

from_json!(IfStatement |n| IfStatement {
    test: n.child("test")?,
    consequent: n.child("consequent")?,
    alternate: n.opt_child("alternate")?,
});

from_json!(LabeledStatement |n| LabeledStatement {
    label: n.string("label")?,
    body: n.child("body")?,
});

from_json!(ReturnStatement |n| ReturnStatement {
    expression: n.opt_child("expression")?,
});

from_json!(SwitchCase |n| SwitchCase {
    test: n.child("test")?,
    consequent: n.list("consequent")?,
});

from_json!(SwitchDefault |n| SwitchDefault {
    consequent: n.list("consequent")?,
});

from_json!(SwitchStatement |n| SwitchStatement {
    discriminant: n.child("discriminant")?,
    cases: n.list("cases")?,
});

from_json!(SwitchStatementWithDefault |n| SwitchStatementWithDefault {
    discriminant: n.child("discriminant")?,
    pre_default_cases: n.list("preDefaultCases")?,
    default_case: n.child("defaultCase")?,
    post_default_cases: n.list("postDefaultCases")?,
});

from_json!(ThrowStatement |n| ThrowStatement {
    expression: n.child("expression")?,
});

from_json!(CatchClause |n| CatchClause {
    binding: n.child("binding")?,
    body: n.child("body")?,
});

from_json!(TryCatchStatement |n| TryCatchStatement {
    body: n.child("body")?,
    catch_clause: n.child("catchClause")?,
});

from_json!(TryFinallyStatement |n| TryFinallyStatement {
    body: n.child("body")?,
    catch_clause: n.opt_child("catchClause")?,
    finalizer: n.child("finalizer")?,
});

from_json!(VariableDeclaration |n| VariableDeclaration {
    kind: n.operator("kind", VariableDeclarationKind::parse)?,
    declarators: n.list("declarators")?,
});

from_json!(VariableDeclarationStatement |n| VariableDeclarationStatement {
    declaration: n.child("declaration")?,
});

from_json!(VariableDeclarator |n| VariableDeclarator {
    binding: n.child("binding")?,
    init: n.opt_child("init")?,
});

from_json!(WhileStatement |n| WhileStatement {
    test: n.child("test")?,
    body: n.child("body")?,
});

from_json!(WithStatement |n| WithStatement {
    object: n.child("object")?,
    body: n.child("body")?,
});

// ----- grammar categories -----

impl FromJson for Program {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::Module => Ok(Program::Module(Module::from_node(node)?)),
            NodeKind::Script => Ok(Program::Script(Script::from_node(node)?)),
            _ => Err(node.unexpected("Program")),
        }
    }
}

impl FromJson for Binding {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::BindingIdentifier => Ok(Binding::Identifier(boxed(node)?)),
            NodeKind::ArrayBinding => Ok(Binding::Array(boxed(node)?)),
            NodeKind::ObjectBinding => Ok(Binding::Object(boxed(node)?)),
            _ => Err(node.unexpected("Binding")),
        }
    }
}

impl FromJson for Parameter {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::BindingWithDefault => {
                Ok(Parameter::WithDefault(BindingWithDefault::from_node(node)?))
            }
            _ => Ok(Parameter::Binding(Binding::from_node(node)?)),
        }
    }
}

impl FromJson for BindingProperty {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::BindingPropertyIdentifier => Ok(BindingProperty::Identifier(
                BindingPropertyIdentifier::from_node(node)?,
            )),
            NodeKind::BindingPropertyProperty => Ok(BindingProperty::Property(
                BindingPropertyProperty::from_node(node)?,
            )),
            _ => Err(node.unexpected("BindingProperty")),
        }
    }
}

impl FromJson for AssignmentTarget {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::AssignmentTargetIdentifier => Ok(AssignmentTarget::Identifier(boxed(node)?)),
            NodeKind::StaticMemberAssignmentTarget => {
                Ok(AssignmentTarget::StaticMember(boxed(node)?))
            }
            NodeKind::ComputedMemberAssignmentTarget => {
                Ok(AssignmentTarget::ComputedMember(boxed(node)?))
            }
            NodeKind::ArrayAssignmentTarget => Ok(AssignmentTarget::Array(boxed(node)?)),
            NodeKind::ObjectAssignmentTarget => Ok(AssignmentTarget::Object(boxed(node)?)),
            _ => Err(node.unexpected("AssignmentTarget")),
        }
    }
}

impl FromJson for SimpleAssignmentTarget {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::AssignmentTargetIdentifier => {
                Ok(SimpleAssignmentTarget::Identifier(boxed(node)?))
            }
            NodeKind::StaticMemberAssignmentTarget => {
                Ok(SimpleAssignmentTarget::StaticMember(boxed(node)?))
            }
            NodeKind::ComputedMemberAssignmentTarget => {
                Ok(SimpleAssignmentTarget::ComputedMember(boxed(node)?))
            }
            _ => Err(node.unexpected("SimpleAssignmentTarget")),
        }
    }
}

impl FromJson for AssignmentTargetOrDefault {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::AssignmentTargetWithDefault => Ok(AssignmentTargetOrDefault::WithDefault(
                AssignmentTargetWithDefault::from_node(node)?,
            )),
            _ => Ok(AssignmentTargetOrDefault::Target(
                AssignmentTarget::from_node(node)?,
            )),
        }
    }
}

impl FromJson for AssignmentTargetProperty {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::AssignmentTargetPropertyIdentifier => {
                Ok(AssignmentTargetProperty::Identifier(
                    AssignmentTargetPropertyIdentifier::from_node(node)?,
                ))
            }
            NodeKind::AssignmentTargetPropertyProperty => Ok(AssignmentTargetProperty::Property(
                AssignmentTargetPropertyProperty::from_node(node)?,
            )),
            _ => Err(node.unexpected("AssignmentTargetProperty")),
        }
    }
}

impl FromJson for ModuleItem {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::Import | NodeKind::ImportNamespace => {
                Ok(ModuleItem::Import(ImportDeclaration::from_node(node)?))
            }
            NodeKind::ExportAllFrom
            | NodeKind::ExportFrom
            | NodeKind::ExportLocals
            | NodeKind::Export
            | NodeKind::ExportDefault => {
                Ok(ModuleItem::Export(ExportDeclaration::from_node(node)?))
            }
            _ => Ok(ModuleItem::Statement(Statement::from_node(node)?)),
        }
    }
}

impl FromJson for ImportDeclaration {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::Import => Ok(ImportDeclaration::Import(Import::from_node(node)?)),
            NodeKind::ImportNamespace => Ok(ImportDeclaration::Namespace(
                ImportNamespace::from_node(node)?,
            )),
            _ => Err(node.unexpected("ImportDeclaration")),
        }
    }
}

impl FromJson for ExportDeclaration {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::ExportAllFrom => {
                Ok(ExportDeclaration::AllFrom(ExportAllFrom::from_node(node)?))
            }
            NodeKind::ExportFrom => Ok(ExportDeclaration::From(ExportFrom::from_node(node)?)),
            NodeKind::ExportLocals => Ok(ExportDeclaration::Locals(ExportLocals::from_node(node)?)),
            NodeKind::Export => Ok(ExportDeclaration::Export(Export::from_node(node)?)),
            NodeKind::ExportDefault => {
                Ok(ExportDeclaration::Default(ExportDefault::from_node(node)?))
            }
            _ => Err(node.unexpected("ExportDeclaration")),
        }
    }
}

impl FromJson for ExportedDeclaration {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::FunctionDeclaration => Ok(ExportedDeclaration::Function(boxed(node)?)),
            NodeKind::ClassDeclaration => Ok(ExportedDeclaration::Class(boxed(node)?)),
            NodeKind::VariableDeclaration => Ok(ExportedDeclaration::Variable(
                VariableDeclaration::from_node(node)?,
            )),
            _ => Err(node.unexpected("FunctionDeclaration, ClassDeclaration or VariableDeclaration")),
        }
    }
}

impl FromJson for ExportDefaultBody {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::FunctionDeclaration => Ok(ExportDefaultBody::Function(boxed(node)?)),
            NodeKind::ClassDeclaration => Ok(ExportDefaultBody::Class(boxed(node)?)),
            _ => Ok(ExportDefaultBody::Expression(Expression::from_node(node)?)),
        }
    }
}

impl FromJson for MethodDefinition {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::Method => Ok(MethodDefinition::Method(Method::from_node(node)?)),
            NodeKind::Getter => Ok(MethodDefinition::Getter(Getter::from_node(node)?)),
            NodeKind::Setter => Ok(MethodDefinition::Setter(Setter::from_node(node)?)),
            _ => Err(node.unexpected("MethodDefinition")),
        }
    }
}

impl FromJson for ObjectProperty {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::Method | NodeKind::Getter | NodeKind::Setter => {
                Ok(ObjectProperty::Method(MethodDefinition::from_node(node)?))
            }
            NodeKind::DataProperty => Ok(ObjectProperty::Data(DataProperty::from_node(node)?)),
            NodeKind::ShorthandProperty => {
                Ok(ObjectProperty::Shorthand(ShorthandProperty::from_node(node)?))
            }
            _ => Err(node.unexpected("ObjectProperty")),
        }
    }
}

impl FromJson for PropertyName {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::ComputedPropertyName => {
                Ok(PropertyName::Computed(ComputedPropertyName::from_node(node)?))
            }
            NodeKind::StaticPropertyName => {
                Ok(PropertyName::Static(StaticPropertyName::from_node(node)?))
            }
            _ => Err(node.unexpected("PropertyName")),
        }
    }
}

impl FromJson for ArrowBody {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::FunctionBody => Ok(ArrowBody::FunctionBody(FunctionBody::from_node(node)?)),
            _ => Ok(ArrowBody::Expression(Expression::from_node(node)?)),
        }
    }
}

impl FromJson for ExpressionOrSuper {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::Super => Ok(ExpressionOrSuper::Super(Super::from_node(node)?)),
            _ => Ok(ExpressionOrSuper::Expression(Expression::from_node(node)?)),
        }
    }
}

impl FromJson for SpreadOrExpression {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::SpreadElement => {
                Ok(SpreadOrExpression::Spread(SpreadElement::from_node(node)?))
            }
            _ => Ok(SpreadOrExpression::Expression(Expression::from_node(node)?)),
        }
    }
}

impl FromJson for TemplatePart {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::TemplateElement => {
                Ok(TemplatePart::Element(TemplateElement::from_node(node)?))
            }
            _ => Ok(TemplatePart::Expression(Expression::from_node(node)?)),
        }
    }
}

impl FromJson for ForInOfLeft {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::VariableDeclaration => Ok(ForInOfLeft::VariableDeclaration(
                VariableDeclaration::from_node(node)?,
            )),
            _ => Ok(ForInOfLeft::Target(AssignmentTarget::from_node(node)?)),
        }
    }
}

impl FromJson for ForInit {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        match node.kind {
            NodeKind::VariableDeclaration => Ok(ForInit::VariableDeclaration(
                VariableDeclaration::from_node(node)?,
            )),
            _ => Ok(ForInit::Expression(Expression::from_node(node)?)),
        }
    }
}

impl FromJson for Expression {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        use Expression as E;
        let expr = match node.kind {
            NodeKind::ArrayExpression => E::Array(boxed(node)?),
            NodeKind::ArrowExpression => E::Arrow(boxed(node)?),
            NodeKind::AssignmentExpression => E::Assignment(boxed(node)?),
            NodeKind::BinaryExpression => E::Binary(boxed(node)?),
            NodeKind::CallExpression => E::Call(boxed(node)?),
            NodeKind::ClassExpression => E::Class(boxed(node)?),
            NodeKind::CompoundAssignmentExpression => E::CompoundAssignment(boxed(node)?),
            NodeKind::ComputedMemberExpression => E::ComputedMember(boxed(node)?),
            NodeKind::ConditionalExpression => E::Conditional(boxed(node)?),
            NodeKind::FunctionExpression => E::Function(boxed(node)?),
            NodeKind::IdentifierExpression => E::Identifier(boxed(node)?),
            NodeKind::LiteralBooleanExpression => E::LiteralBoolean(boxed(node)?),
            NodeKind::LiteralInfinityExpression => E::LiteralInfinity(boxed(node)?),
            NodeKind::LiteralNullExpression => E::LiteralNull(boxed(node)?),
            NodeKind::LiteralNumericExpression => E::LiteralNumeric(boxed(node)?),
            NodeKind::LiteralRegExpExpression => E::LiteralRegExp(boxed(node)?),
            NodeKind::LiteralStringExpression => E::LiteralString(boxed(node)?),
            NodeKind::NewExpression => E::New(boxed(node)?),
            NodeKind::NewTargetExpression => E::NewTarget(boxed(node)?),
            NodeKind::ObjectExpression => E::Object(boxed(node)?),
            NodeKind::StaticMemberExpression => E::StaticMember(boxed(node)?),
            NodeKind::TemplateExpression => E::Template(boxed(node)?),
            NodeKind::ThisExpression => E::This(boxed(node)?),
            NodeKind::UnaryExpression => E::Unary(boxed(node)?),
            NodeKind::UpdateExpression => E::Update(boxed(node)?),
            NodeKind::YieldExpression => E::Yield(boxed(node)?),
            NodeKind::YieldGeneratorExpression => E::YieldGenerator(boxed(node)?),
            _ => return Err(node.unexpected("Expression")),
        };
        Ok(expr)
    }
}

impl FromJson for Statement {
    fn from_node(node: &JsonNode<'_>) -> Result<Self, AstError> {
        use Statement as S;
        let stmt = match node.kind {
            NodeKind::BlockStatement => S::Block(boxed(node)?),
            NodeKind::BreakStatement => S::Break(boxed(node)?),
            NodeKind::ClassDeclaration => S::Class(boxed(node)?),
            NodeKind::ContinueStatement => S::Continue(boxed(node)?),
            NodeKind::DebuggerStatement => S::Debugger(boxed(node)?),
            NodeKind::DoWhileStatement => S::DoWhile(boxed(node)?),
            NodeKind::EmptyStatement => S::Empty(boxed(node)?),
            NodeKind::ExpressionStatement => S::Expression(boxed(node)?),
            NodeKind::ForInStatement => S::ForIn(boxed(node)?),
            NodeKind::ForOfStatement => S::ForOf(boxed(node)?),
            NodeKind::ForStatement => S::For(boxed(node)?),
            NodeKind::FunctionDeclaration => S::Function(boxed(node)?),
            NodeKind::IfStatement => S::If(boxed(node)?),
            NodeKind::LabeledStatement => S::Labeled(boxed(node)?),
            NodeKind::ReturnStatement => S::Return(boxed(node)?),
            NodeKind::SwitchStatement => S::Switch(boxed(node)?),
            NodeKind::SwitchStatementWithDefault => S::SwitchWithDefault(boxed(node)?),
            NodeKind::ThrowStatement => S::Throw(boxed(node)?),
            NodeKind::TryCatchStatement => S::TryCatch(boxed(node)?),
            NodeKind::TryFinallyStatement => S::TryFinally(boxed(node)?),
            NodeKind::VariableDeclarationStatement => S::VariableDeclaration(boxed(node)?),
            NodeKind::WhileStatement => S::While(boxed(node)?),
            NodeKind::WithStatement => S::With(boxed(node)?),
            _ => return Err(node.unexpected("Statement")),
        };
        Ok(stmt)
    }
}

pub(crate) fn program(value: &Value) -> Result<Program, AstError> {
    <Program as FromJson>::from_json(value)
}
