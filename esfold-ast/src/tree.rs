//! The ECMAScript 2016 syntax tree in the Shift shape.
//!
//! One struct per node kind, one enum per grammar category. Fields that hold
//! other nodes are the children slots the reducer sees; everything else
//! (names, operators, literal values, flags) is node data that never takes
//! part in a fold.
//!
//! Slot shapes:
//! - a required child is a plain field,
//! - an optional child is an `Option`,
//! - a sequence is a `Vec`, and a sequence with elided positions (`[a, , b]`)
//!   is a `Vec<Option<_>>`,
//! - a trailing rest element (`...xs`) is a separate `rest: Option<_>` field.

use crate::ops::{
    BinaryOperator, CompoundAssignmentOperator, UnaryOperator, UpdateOperator,
    VariableDeclarationKind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Program {
    Module(Module),
    Script(Script),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub directives: Vec<Directive>,
    pub items: Vec<ModuleItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub directives: Vec<Directive>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub raw_value: String,
}

// ----- bindings -----

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Identifier(Box<BindingIdentifier>),
    Array(Box<ArrayBinding>),
    Object(Box<ObjectBinding>),
}

/// A binding that may carry a default, i.e. a formal parameter or an element
/// of a destructuring pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Binding(Binding),
    WithDefault(BindingWithDefault),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingWithDefault {
    pub binding: Binding,
    pub init: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayBinding {
    pub elements: Vec<Option<Parameter>>,
    pub rest: Option<Binding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBinding {
    pub properties: Vec<BindingProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindingProperty {
    Identifier(BindingPropertyIdentifier),
    Property(BindingPropertyProperty),
}

/// `{ x = 1 }` in a binding pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingPropertyIdentifier {
    pub binding: BindingIdentifier,
    pub init: Option<Expression>,
}

/// `{ key: x }` in a binding pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingPropertyProperty {
    pub name: PropertyName,
    pub binding: Parameter,
}

// ----- assignment targets -----

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentTarget {
    Identifier(Box<AssignmentTargetIdentifier>),
    StaticMember(Box<StaticMemberAssignmentTarget>),
    ComputedMember(Box<ComputedMemberAssignmentTarget>),
    Array(Box<ArrayAssignmentTarget>),
    Object(Box<ObjectAssignmentTarget>),
}

/// The targets allowed for `+=` and `++`.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleAssignmentTarget {
    Identifier(Box<AssignmentTargetIdentifier>),
    StaticMember(Box<StaticMemberAssignmentTarget>),
    ComputedMember(Box<ComputedMemberAssignmentTarget>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentTargetOrDefault {
    Target(AssignmentTarget),
    WithDefault(AssignmentTargetWithDefault),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentTargetIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentTargetWithDefault {
    pub binding: AssignmentTarget,
    pub init: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAssignmentTarget {
    pub elements: Vec<Option<AssignmentTargetOrDefault>>,
    pub rest: Option<AssignmentTarget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAssignmentTarget {
    pub properties: Vec<AssignmentTargetProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentTargetProperty {
    Identifier(AssignmentTargetPropertyIdentifier),
    Property(AssignmentTargetPropertyProperty),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentTargetPropertyIdentifier {
    pub binding: AssignmentTargetIdentifier,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentTargetPropertyProperty {
    pub name: PropertyName,
    pub binding: AssignmentTargetOrDefault,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticMemberAssignmentTarget {
    pub object: ExpressionOrSuper,
    pub property: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedMemberAssignmentTarget {
    pub object: ExpressionOrSuper,
    pub expression: Expression,
}

// ----- classes -----

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub name: BindingIdentifier,
    pub super_class: Option<Expression>,
    pub elements: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassExpression {
    pub name: Option<BindingIdentifier>,
    pub super_class: Option<Expression>,
    pub elements: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassElement {
    pub is_static: bool,
    pub method: MethodDefinition,
}

// ----- modules -----

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleItem {
    Import(ImportDeclaration),
    Export(ExportDeclaration),
    Statement(Statement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportDeclaration {
    Import(Import),
    Namespace(ImportNamespace),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub module_specifier: String,
    pub default_binding: Option<BindingIdentifier>,
    pub named_imports: Vec<ImportSpecifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportNamespace {
    pub module_specifier: String,
    pub default_binding: Option<BindingIdentifier>,
    pub namespace_binding: BindingIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub name: Option<String>,
    pub binding: BindingIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportDeclaration {
    AllFrom(ExportAllFrom),
    From(ExportFrom),
    Locals(ExportLocals),
    Export(Export),
    Default(ExportDefault),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportAllFrom {
    pub module_specifier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFrom {
    pub named_exports: Vec<ExportFromSpecifier>,
    pub module_specifier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportLocals {
    pub named_exports: Vec<ExportLocalSpecifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub declaration: ExportedDeclaration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportedDeclaration {
    Function(Box<FunctionDeclaration>),
    Class(Box<ClassDeclaration>),
    Variable(VariableDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefault {
    pub body: ExportDefaultBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportDefaultBody {
    Function(Box<FunctionDeclaration>),
    Class(Box<ClassDeclaration>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFromSpecifier {
    pub name: String,
    pub exported_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportLocalSpecifier {
    pub name: IdentifierExpression,
    pub exported_name: Option<String>,
}

// ----- property definitions -----

#[derive(Debug, Clone, PartialEq)]
pub enum MethodDefinition {
    Method(Method),
    Getter(Getter),
    Setter(Setter),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectProperty {
    Method(MethodDefinition),
    Data(DataProperty),
    Shorthand(ShorthandProperty),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyName {
    Computed(ComputedPropertyName),
    Static(StaticPropertyName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub is_generator: bool,
    pub name: PropertyName,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Getter {
    pub name: PropertyName,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Setter {
    pub name: PropertyName,
    pub param: Parameter,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataProperty {
    pub name: PropertyName,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShorthandProperty {
    pub name: IdentifierExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPropertyName {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticPropertyName {
    pub value: String,
}

// ----- functions -----

#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameters {
    pub items: Vec<Parameter>,
    pub rest: Option<Binding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBody {
    pub directives: Vec<Directive>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub is_generator: bool,
    pub name: BindingIdentifier,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    pub is_generator: bool,
    pub name: Option<BindingIdentifier>,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    FunctionBody(FunctionBody),
    Expression(Expression),
}

// ----- expressions -----

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Array(Box<ArrayExpression>),
    Arrow(Box<ArrowExpression>),
    Assignment(Box<AssignmentExpression>),
    Binary(Box<BinaryExpression>),
    Call(Box<CallExpression>),
    Class(Box<ClassExpression>),
    CompoundAssignment(Box<CompoundAssignmentExpression>),
    ComputedMember(Box<ComputedMemberExpression>),
    Conditional(Box<ConditionalExpression>),
    Function(Box<FunctionExpression>),
    Identifier(Box<IdentifierExpression>),
    LiteralBoolean(Box<LiteralBooleanExpression>),
    LiteralInfinity(Box<LiteralInfinityExpression>),
    LiteralNull(Box<LiteralNullExpression>),
    LiteralNumeric(Box<LiteralNumericExpression>),
    LiteralRegExp(Box<LiteralRegExpExpression>),
    LiteralString(Box<LiteralStringExpression>),
    New(Box<NewExpression>),
    NewTarget(Box<NewTargetExpression>),
    Object(Box<ObjectExpression>),
    StaticMember(Box<StaticMemberExpression>),
    Template(Box<TemplateExpression>),
    This(Box<ThisExpression>),
    Unary(Box<UnaryExpression>),
    Update(Box<UpdateExpression>),
    Yield(Box<YieldExpression>),
    YieldGenerator(Box<YieldGeneratorExpression>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionOrSuper {
    Expression(Expression),
    Super(Super),
}

/// An array element or call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum SpreadOrExpression {
    Spread(SpreadElement),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Expression(Expression),
    Element(TemplateElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub elements: Vec<Option<SpreadOrExpression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowExpression {
    pub params: FormalParameters,
    pub body: ArrowBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub binding: AssignmentTarget,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: ExpressionOrSuper,
    pub arguments: Vec<SpreadOrExpression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundAssignmentExpression {
    pub binding: SimpleAssignmentTarget,
    pub operator: CompoundAssignmentOperator,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedMemberExpression {
    pub object: ExpressionOrSuper,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpression {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralBooleanExpression {
    pub value: bool,
}

/// Produced by numeric literals too large for an `f64`, e.g. `2e308`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralInfinityExpression;

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNullExpression;

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNumericExpression {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralRegExpExpression {
    pub pattern: String,
    pub global: bool,
    pub ignore_case: bool,
    pub multi_line: bool,
    pub sticky: bool,
    pub unicode: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralStringExpression {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub callee: Expression,
    pub arguments: Vec<SpreadOrExpression>,
}

/// `new.target`
#[derive(Debug, Clone, PartialEq)]
pub struct NewTargetExpression;

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticMemberExpression {
    pub object: ExpressionOrSuper,
    pub property: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Super;

/// Elements alternate between `TemplateElement`s and interpolated
/// expressions, starting and ending with an element.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExpression {
    pub tag: Option<Expression>,
    pub elements: Vec<TemplatePart>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateElement {
    pub raw_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpression;

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub is_prefix: bool,
    pub operator: UpdateOperator,
    pub operand: SimpleAssignmentTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldExpression {
    pub expression: Option<Expression>,
}

/// `yield* expr`
#[derive(Debug, Clone, PartialEq)]
pub struct YieldGeneratorExpression {
    pub expression: Expression,
}

// ----- statements -----

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Box<BlockStatement>),
    Break(Box<BreakStatement>),
    Class(Box<ClassDeclaration>),
    Continue(Box<ContinueStatement>),
    Debugger(Box<DebuggerStatement>),
    DoWhile(Box<DoWhileStatement>),
    Empty(Box<EmptyStatement>),
    Expression(Box<ExpressionStatement>),
    ForIn(Box<ForInStatement>),
    ForOf(Box<ForOfStatement>),
    For(Box<ForStatement>),
    Function(Box<FunctionDeclaration>),
    If(Box<IfStatement>),
    Labeled(Box<LabeledStatement>),
    Return(Box<ReturnStatement>),
    Switch(Box<SwitchStatement>),
    SwitchWithDefault(Box<SwitchStatementWithDefault>),
    Throw(Box<ThrowStatement>),
    TryCatch(Box<TryCatchStatement>),
    TryFinally(Box<TryFinallyStatement>),
    VariableDeclaration(Box<VariableDeclarationStatement>),
    While(Box<WhileStatement>),
    With(Box<WithStatement>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebuggerStatement;

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: Statement,
    pub test: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStatement;

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInOfLeft {
    VariableDeclaration(VariableDeclaration),
    Target(AssignmentTarget),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    pub left: ForInOfLeft,
    pub right: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStatement {
    pub left: ForInOfLeft,
    pub right: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Statement,
    pub alternate: Option<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub label: String,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test: Expression,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchDefault {
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

/// A switch with a `default:` clause. Cases are split around it so the
/// default keeps its textual position.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatementWithDefault {
    pub discriminant: Expression,
    pub pre_default_cases: Vec<SwitchCase>,
    pub default_case: SwitchDefault,
    pub post_default_cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub binding: Binding,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryCatchStatement {
    pub body: Block,
    pub catch_clause: CatchClause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryFinallyStatement {
    pub body: Block,
    pub catch_clause: Option<CatchClause>,
    pub finalizer: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableDeclarationKind,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationStatement {
    pub declaration: VariableDeclaration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub binding: Binding,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithStatement {
    pub object: Expression,
    pub body: Statement,
}
