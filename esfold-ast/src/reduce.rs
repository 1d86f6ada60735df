//! Post-order traversal of the tree through a per-kind callback table.
//!
//! [`reduce`] walks a [`Program`] depth-first. For every node it first reduces
//! the children slots, in source order, and then hands the node together with
//! the already-reduced slots to the matching [`Reducer`] method. The value
//! returned for the root is the result of the whole fold.
//!
//! `Reducer` has one required method per node kind and no fallback, so a table
//! that forgets a kind is rejected by the compiler rather than at runtime. A
//! method may return `Err` to abort the fold; the error is passed up unchanged
//! and no partial result is produced.

use log::{debug, trace};

use crate::{kind::NodeKind, tree::*};

pub trait Reducer {
    type Output;

    fn reduce_array_assignment_target(
        &mut self,
        node: &ArrayAssignmentTarget,
        elements: Vec<Option<Self::Output>>,
        rest: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_array_binding(
        &mut self,
        node: &ArrayBinding,
        elements: Vec<Option<Self::Output>>,
        rest: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_array_expression(
        &mut self,
        node: &ArrayExpression,
        elements: Vec<Option<Self::Output>>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_arrow_expression(
        &mut self,
        node: &ArrowExpression,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_assignment_expression(
        &mut self,
        node: &AssignmentExpression,
        binding: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_assignment_target_identifier(
        &mut self,
        node: &AssignmentTargetIdentifier,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_assignment_target_property_identifier(
        &mut self,
        node: &AssignmentTargetPropertyIdentifier,
        binding: Self::Output,
        init: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_assignment_target_property_property(
        &mut self,
        node: &AssignmentTargetPropertyProperty,
        name: Self::Output,
        binding: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_assignment_target_with_default(
        &mut self,
        node: &AssignmentTargetWithDefault,
        binding: Self::Output,
        init: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_binary_expression(
        &mut self,
        node: &BinaryExpression,
        left: Self::Output,
        right: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_binding_identifier(
        &mut self,
        node: &BindingIdentifier,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_binding_property_identifier(
        &mut self,
        node: &BindingPropertyIdentifier,
        binding: Self::Output,
        init: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_binding_property_property(
        &mut self,
        node: &BindingPropertyProperty,
        name: Self::Output,
        binding: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_binding_with_default(
        &mut self,
        node: &BindingWithDefault,
        binding: Self::Output,
        init: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_block(
        &mut self,
        node: &Block,
        statements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_block_statement(
        &mut self,
        node: &BlockStatement,
        block: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_break_statement(&mut self, node: &BreakStatement) -> anyhow::Result<Self::Output>;

    fn reduce_call_expression(
        &mut self,
        node: &CallExpression,
        callee: Self::Output,
        arguments: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_catch_clause(
        &mut self,
        node: &CatchClause,
        binding: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_class_declaration(
        &mut self,
        node: &ClassDeclaration,
        name: Self::Output,
        super_class: Option<Self::Output>,
        elements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_class_element(
        &mut self,
        node: &ClassElement,
        method: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_class_expression(
        &mut self,
        node: &ClassExpression,
        name: Option<Self::Output>,
        super_class: Option<Self::Output>,
        elements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_compound_assignment_expression(
        &mut self,
        node: &CompoundAssignmentExpression,
        binding: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_computed_member_assignment_target(
        &mut self,
        node: &ComputedMemberAssignmentTarget,
        object: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_computed_member_expression(
        &mut self,
        node: &ComputedMemberExpression,
        object: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_computed_property_name(
        &mut self,
        node: &ComputedPropertyName,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_conditional_expression(
        &mut self,
        node: &ConditionalExpression,
        test: Self::Output,
        consequent: Self::Output,
        alternate: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_continue_statement(
        &mut self,
        node: &ContinueStatement,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_data_property(
        &mut self,
        node: &DataProperty,
        name: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_debugger_statement(
        &mut self,
        node: &DebuggerStatement,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_directive(&mut self, node: &Directive) -> anyhow::Result<Self::Output>;

    fn reduce_do_while_statement(
        &mut self,
        node: &DoWhileStatement,
        body: Self::Output,
        test: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_empty_statement(&mut self, node: &EmptyStatement) -> anyhow::Result<Self::Output>;

    fn reduce_export(
        &mut self,
        node: &Export,
        declaration: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_export_all_from(&mut self, node: &ExportAllFrom) -> anyhow::Result<Self::Output>;

    fn reduce_export_default(
        &mut self,
        node: &ExportDefault,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_export_from(
        &mut self,
        node: &ExportFrom,
        named_exports: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_export_from_specifier(
        &mut self,
        node: &ExportFromSpecifier,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_export_local_specifier(
        &mut self,
        node: &ExportLocalSpecifier,
        name: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_export_locals(
        &mut self,
        node: &ExportLocals,
        named_exports: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_expression_statement(
        &mut self,
        node: &ExpressionStatement,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_for_in_statement(
        &mut self,
        node: &ForInStatement,
        left: Self::Output,
        right: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_for_of_statement(
        &mut self,
        node: &ForOfStatement,
        left: Self::Output,
        right: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_for_statement(
        &mut self,
        node: &ForStatement,
        init: Option<Self::Output>,
        test: Option<Self::Output>,
        update: Option<Self::Output>,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_formal_parameters(
        &mut self,
        node: &FormalParameters,
        items: Vec<Self::Output>,
        rest: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_function_body(
        &mut self,
        node: &FunctionBody,
        directives: Vec<Self::Output>,
        statements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_function_declaration(
        &mut self,
        node: &FunctionDeclaration,
        name: Self::Output,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_function_expression(
        &mut self,
        node: &FunctionExpression,
        name: Option<Self::Output>,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_getter(
        &mut self,
        node: &Getter,
        name: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_identifier_expression(
        &mut self,
        node: &IdentifierExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_if_statement(
        &mut self,
        node: &IfStatement,
        test: Self::Output,
        consequent: Self::Output,
        alternate: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_import(
        &mut self,
        node: &Import,
        default_binding: Option<Self::Output>,
        named_imports: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_import_namespace(
        &mut self,
        node: &ImportNamespace,
        default_binding: Option<Self::Output>,
        namespace_binding: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_import_specifier(
        &mut self,
        node: &ImportSpecifier,
        binding: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_labeled_statement(
        &mut self,
        node: &LabeledStatement,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_literal_boolean_expression(
        &mut self,
        node: &LiteralBooleanExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_literal_infinity_expression(
        &mut self,
        node: &LiteralInfinityExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_literal_null_expression(
        &mut self,
        node: &LiteralNullExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_literal_numeric_expression(
        &mut self,
        node: &LiteralNumericExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_literal_reg_exp_expression(
        &mut self,
        node: &LiteralRegExpExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_literal_string_expression(
        &mut self,
        node: &LiteralStringExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_method(
        &mut self,
        node: &Method,
        name: Self::Output,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_module(
        &mut self,
        node: &Module,
        directives: Vec<Self::Output>,
        items: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_new_expression(
        &mut self,
        node: &NewExpression,
        callee: Self::Output,
        arguments: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_new_target_expression(
        &mut self,
        node: &NewTargetExpression,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_object_assignment_target(
        &mut self,
        node: &ObjectAssignmentTarget,
        properties: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_object_binding(
        &mut self,
        node: &ObjectBinding,
        properties: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_object_expression(
        &mut self,
        node: &ObjectExpression,
        properties: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_return_statement(
        &mut self,
        node: &ReturnStatement,
        expression: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_script(
        &mut self,
        node: &Script,
        directives: Vec<Self::Output>,
        statements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_setter(
        &mut self,
        node: &Setter,
        name: Self::Output,
        param: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_shorthand_property(
        &mut self,
        node: &ShorthandProperty,
        name: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_spread_element(
        &mut self,
        node: &SpreadElement,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_static_member_assignment_target(
        &mut self,
        node: &StaticMemberAssignmentTarget,
        object: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_static_member_expression(
        &mut self,
        node: &StaticMemberExpression,
        object: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_static_property_name(
        &mut self,
        node: &StaticPropertyName,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_super(&mut self, node: &Super) -> anyhow::Result<Self::Output>;

    fn reduce_switch_case(
        &mut self,
        node: &SwitchCase,
        test: Self::Output,
        consequent: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_switch_default(
        &mut self,
        node: &SwitchDefault,
        consequent: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_switch_statement(
        &mut self,
        node: &SwitchStatement,
        discriminant: Self::Output,
        cases: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_switch_statement_with_default(
        &mut self,
        node: &SwitchStatementWithDefault,
        discriminant: Self::Output,
        pre_default_cases: Vec<Self::Output>,
        default_case: Self::Output,
        post_default_cases: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_template_element(
        &mut self,
        node: &TemplateElement,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_template_expression(
        &mut self,
        node: &TemplateExpression,
        tag: Option<Self::Output>,
        elements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_this_expression(&mut self, node: &ThisExpression) -> anyhow::Result<Self::Output>;

    fn reduce_throw_statement(
        &mut self,
        node: &ThrowStatement,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_try_catch_statement(
        &mut self,
        node: &TryCatchStatement,
        body: Self::Output,
        catch_clause: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_try_finally_statement(
        &mut self,
        node: &TryFinallyStatement,
        body: Self::Output,
        catch_clause: Option<Self::Output>,
        finalizer: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_unary_expression(
        &mut self,
        node: &UnaryExpression,
        operand: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_update_expression(
        &mut self,
        node: &UpdateExpression,
        operand: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_variable_declaration(
        &mut self,
        node: &VariableDeclaration,
        declarators: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_variable_declaration_statement(
        &mut self,
        node: &VariableDeclarationStatement,
        declaration: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_variable_declarator(
        &mut self,
        node: &VariableDeclarator,
        binding: Self::Output,
        init: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_while_statement(
        &mut self,
        node: &WhileStatement,
        test: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_with_statement(
        &mut self,
        node: &WithStatement,
        object: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_yield_expression(
        &mut self,
        node: &YieldExpression,
        expression: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output>;

    fn reduce_yield_generator_expression(
        &mut self,
        node: &YieldGeneratorExpression,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output>;
}

/// Anything that can be walked by a [`Reducer`]: every node struct and every
/// grammar category enum.
pub trait Node {
    fn kind(&self) -> NodeKind;

    fn reduce<R: Reducer>(&self, reducer: &mut R) -> anyhow::Result<R::Output>;
}

/// Folds a whole program.
///
/// The walk recurses once per tree level and uses the calling thread's stack.
/// Left-nested chains of a few hundred operands can exhaust a 2 MiB thread
/// stack in debug builds; fold such trees on a thread spawned with a larger
/// `stack_size`.
pub fn reduce<R: Reducer>(reducer: &mut R, program: &Program) -> anyhow::Result<R::Output> {
    debug!("reducing {}", program.kind());
    let out = program.reduce(reducer)?;
    debug!("finished reducing {}", program.kind());
    Ok(out)
}

#[inline]
fn one<N: Node, R: Reducer>(node: &N, reducer: &mut R) -> anyhow::Result<R::Output> {
    node.reduce(reducer)
}

#[inline]
fn opt<N: Node, R: Reducer>(node: &Option<N>, reducer: &mut R) -> anyhow::Result<Option<R::Output>> {
    node.as_ref().map(|n| n.reduce(reducer)).transpose()
}

fn list<N: Node, R: Reducer>(nodes: &[N], reducer: &mut R) -> anyhow::Result<Vec<R::Output>> {
    nodes.iter().map(|n| n.reduce(reducer)).collect()
}

fn sparse<N: Node, R: Reducer>(
    nodes: &[Option<N>],
    reducer: &mut R,
) -> anyhow::Result<Vec<Option<R::Output>>> {
    nodes.iter().map(|n| opt(n, reducer)).collect()
}

/// Wires a node struct to its `Reducer` method. Each slot is listed in source
/// order as `<shape> <field>`, where the shape is one of `one`, `opt`, `list`
/// or `sparse`.
macro_rules! reduce_node {
    ($node: ident => $method: ident($($shape: ident $field: ident),* $(,)?)) => {
        impl Node for $node {
            #[inline]
            fn kind(&self) -> NodeKind {
                NodeKind::$node
            }

            fn reduce<R: Reducer>(&self, reducer: &mut R) -> anyhow::Result<R::Output> {
                trace!("reduce {}", NodeKind::$node);
                $(let $field = $shape(&self.$field, reducer)?;)*
                reducer.$method(self, $($field),*)
            }
        }
    };
}

macro_rules! reduce_enum {
    ($enum: ident { $($variant: ident),* $(,)? }) => {
        impl Node for $enum {
            fn kind(&self) -> NodeKind {
                match self {
                    $($enum::$variant(n) => n.kind()),*
                }
            }

            fn reduce<R: Reducer>(&self, reducer: &mut R) -> anyhow::Result<R::Output> {
                match self {
                    $($enum::$variant(n) => n.reduce(reducer)),*
                }
            }
        }
    };
}

reduce_node!(ArrayAssignmentTarget => reduce_array_assignment_target(sparse elements, opt rest));
reduce_node!(ArrayBinding => reduce_array_binding(sparse elements, opt rest));
reduce_node!(ArrayExpression => reduce_array_expression(sparse elements));
reduce_node!(ArrowExpression => reduce_arrow_expression(one params, one body));
reduce_node!(AssignmentExpression => reduce_assignment_expression(one binding, one expression));
reduce_node!(AssignmentTargetIdentifier => reduce_assignment_target_identifier());
reduce_node!(AssignmentTargetPropertyIdentifier => reduce_assignment_target_property_identifier(one binding, opt init));
reduce_node!(AssignmentTargetPropertyProperty => reduce_assignment_target_property_property(one name, one binding));
reduce_node!(AssignmentTargetWithDefault => reduce_assignment_target_with_default(one binding, one init));
reduce_node!(BinaryExpression => reduce_binary_expression(one left, one right));
reduce_node!(BindingIdentifier => reduce_binding_identifier());
reduce_node!(BindingPropertyIdentifier => reduce_binding_property_identifier(one binding, opt init));
reduce_node!(BindingPropertyProperty => reduce_binding_property_property(one name, one binding));
reduce_node!(BindingWithDefault => reduce_binding_with_default(one binding, one init));
reduce_node!(Block => reduce_block(list statements));
reduce_node!(BlockStatement => reduce_block_statement(one block));
reduce_node!(BreakStatement => reduce_break_statement());
reduce_node!(CallExpression => reduce_call_expression(one callee, list arguments));
reduce_node!(CatchClause => reduce_catch_clause(one binding, one body));
reduce_node!(ClassDeclaration => reduce_class_declaration(one name, opt super_class, list elements));
reduce_node!(ClassElement => reduce_class_element(one method));
reduce_node!(ClassExpression => reduce_class_expression(opt name, opt super_class, list elements));
reduce_node!(CompoundAssignmentExpression => reduce_compound_assignment_expression(one binding, one expression));
reduce_node!(ComputedMemberAssignmentTarget => reduce_computed_member_assignment_target(one object, one expression));
reduce_node!(ComputedMemberExpression => reduce_computed_member_expression(one object, one expression));
reduce_node!(ComputedPropertyName => reduce_computed_property_name(one expression));
reduce_node!(ConditionalExpression => reduce_conditional_expression(one test, one consequent, one alternate));
reduce_node!(ContinueStatement => reduce_continue_statement());
reduce_node!(DataProperty => reduce_data_property(one name, one expression));
reduce_node!(DebuggerStatement => reduce_debugger_statement());
reduce_node!(Directive => reduce_directive());
reduce_node!(DoWhileStatement => reduce_do_while_statement(one body, one test));
reduce_node!(EmptyStatement => reduce_empty_statement());
reduce_node!(Export => reduce_export(one declaration));
reduce_node!(ExportAllFrom => reduce_export_all_from());
reduce_node!(ExportDefault => reduce_export_default(one body));
reduce_node!(ExportFrom => reduce_export_from(list named_exports));
reduce_node!(ExportFromSpecifier => reduce_export_from_specifier());
reduce_node!(ExportLocalSpecifier => reduce_export_local_specifier(one name));
reduce_node!(ExportLocals => reduce_export_locals(list named_exports));
reduce_node!(ExpressionStatement => reduce_expression_statement(one expression));
reduce_node!(ForInStatement => reduce_for_in_statement(one left, one right, one body));
reduce_node!(ForOfStatement => reduce_for_of_statement(one left, one right, one body));
reduce_node!(ForStatement => reduce_for_statement(opt init, opt test, opt update, one body));
reduce_node!(FormalParameters => reduce_formal_parameters(list items, opt rest));
reduce_node!(FunctionBody => reduce_function_body(list directives, list statements));
reduce_node!(FunctionDeclaration => reduce_function_declaration(one name, one params, one body));
reduce_node!(FunctionExpression => reduce_function_expression(opt name, one params, one body));
reduce_node!(Getter => reduce_getter(one name, one body));
reduce_node!(IdentifierExpression => reduce_identifier_expression());
reduce_node!(IfStatement => reduce_if_statement(one test, one consequent, opt alternate));
reduce_node!(Import => reduce_import(opt default_binding, list named_imports));
reduce_node!(ImportNamespace => reduce_import_namespace(opt default_binding, one namespace_binding));
reduce_node!(ImportSpecifier => reduce_import_specifier(one binding));
reduce_node!(LabeledStatement => reduce_labeled_statement(one body));
reduce_node!(LiteralBooleanExpression => reduce_literal_boolean_expression());
reduce_node!(LiteralInfinityExpression => reduce_literal_infinity_expression());
reduce_node!(LiteralNullExpression => reduce_literal_null_expression());
reduce_node!(LiteralNumericExpression => reduce_literal_numeric_expression());
reduce_node!(LiteralRegExpExpression => reduce_literal_reg_exp_expression());
reduce_node!(LiteralStringExpression => reduce_literal_string_expression());
reduce_node!(Method => reduce_method(one name, one params, one body));
reduce_node!(Module => reduce_module(list directives, list items));
reduce_node!(NewExpression => reduce_new_expression(one callee, list arguments));
reduce_node!(NewTargetExpression => reduce_new_target_expression());
reduce_node!(ObjectAssignmentTarget => reduce_object_assignment_target(list properties));
reduce_node!(ObjectBinding => reduce_object_binding(list properties));
reduce_node!(ObjectExpression => reduce_object_expression(list properties));
reduce_node!(ReturnStatement => reduce_return_statement(opt expression));
reduce_node!(Script => reduce_script(list directives, list statements));
reduce_node!(Setter => reduce_setter(one name, one param, one body));
reduce_node!(ShorthandProperty => reduce_shorthand_property(one name));
reduce_node!(SpreadElement => reduce_spread_element(one expression));
reduce_node!(StaticMemberAssignmentTarget => reduce_static_member_assignment_target(one object));
reduce_node!(StaticMemberExpression => reduce_static_member_expression(one object));
reduce_node!(StaticPropertyName => reduce_static_property_name());
reduce_node!(Super => reduce_super());
reduce_node!(SwitchCase => reduce_switch_case(one test, list consequent));
reduce_node!(SwitchDefault => reduce_switch_default(list consequent));
reduce_node!(SwitchStatement => reduce_switch_statement(one discriminant, list cases));
reduce_node!(SwitchStatementWithDefault => reduce_switch_statement_with_default(
    one discriminant,
    list pre_default_cases,
    one default_case,
    list post_default_cases,
));
reduce_node!(TemplateElement => reduce_template_element());
reduce_node!(TemplateExpression => reduce_template_expression(opt tag, list elements));
reduce_node!(ThisExpression => reduce_this_expression());
reduce_node!(ThrowStatement => reduce_throw_statement(one expression));
reduce_node!(TryCatchStatement => reduce_try_catch_statement(one body, one catch_clause));
reduce_node!(TryFinallyStatement => reduce_try_finally_statement(one body, opt catch_clause, one finalizer));
reduce_node!(UnaryExpression => reduce_unary_expression(one operand));
reduce_node!(UpdateExpression => reduce_update_expression(one operand));
reduce_node!(VariableDeclaration => reduce_variable_declaration(list declarators));
reduce_node!(VariableDeclarationStatement => reduce_variable_declaration_statement(one declaration));
reduce_node!(VariableDeclarator => reduce_variable_declarator(one binding, opt init));
reduce_node!(WhileStatement => reduce_while_statement(one test, one body));
reduce_node!(WithStatement => reduce_with_statement(one object, one body));
reduce_node!(YieldExpression => reduce_yield_expression(opt expression));
reduce_node!(YieldGeneratorExpression => reduce_yield_generator_expression(one expression));

reduce_enum!(Program { Module, Script });
reduce_enum!(Binding { Identifier, Array, Object });
reduce_enum!(Parameter { Binding, WithDefault });
reduce_enum!(BindingProperty { Identifier, Property });
reduce_enum!(AssignmentTarget {
    Identifier,
    StaticMember,
    ComputedMember,
    Array,
    Object,
});
reduce_enum!(SimpleAssignmentTarget {
    Identifier,
    StaticMember,
    ComputedMember,
});
reduce_enum!(AssignmentTargetOrDefault { Target, WithDefault });
reduce_enum!(AssignmentTargetProperty { Identifier, Property });
reduce_enum!(ModuleItem { Import, Export, Statement });
reduce_enum!(ImportDeclaration { Import, Namespace });
reduce_enum!(ExportDeclaration {
    AllFrom,
    From,
    Locals,
    Export,
    Default,
});
reduce_enum!(ExportedDeclaration { Function, Class, Variable });
reduce_enum!(ExportDefaultBody { Function, Class, Expression });
reduce_enum!(MethodDefinition { Method, Getter, Setter });
reduce_enum!(ObjectProperty { Method, Data, Shorthand });
reduce_enum!(PropertyName { Computed, Static });
reduce_enum!(ArrowBody { FunctionBody, Expression });
reduce_enum!(ExpressionOrSuper { Expression, Super });
reduce_enum!(SpreadOrExpression { Spread, Expression });
reduce_enum!(TemplatePart { Expression, Element });
reduce_enum!(ForInOfLeft { VariableDeclaration, Target });
reduce_enum!(ForInit { VariableDeclaration, Expression });
reduce_enum!(Expression {
    Array,
    Arrow,
    Assignment,
    Binary,
    Call,
    Class,
    CompoundAssignment,
    ComputedMember,
    Conditional,
    Function,
    Identifier,
    LiteralBoolean,
    LiteralInfinity,
    LiteralNull,
    LiteralNumeric,
    LiteralRegExp,
    LiteralString,
    New,
    NewTarget,
    Object,
    StaticMember,
    Template,
    This,
    Unary,
    Update,
    Yield,
    YieldGenerator,
});
reduce_enum!(Statement {
    Block,
    Break,
    Class,
    Continue,
    Debugger,
    DoWhile,
    Empty,
    Expression,
    ForIn,
    ForOf,
    For,
    Function,
    If,
    Labeled,
    Return,
    Switch,
    SwitchWithDefault,
    Throw,
    TryCatch,
    TryFinally,
    VariableDeclaration,
    While,
    With,
});
