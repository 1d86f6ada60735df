//! The monoidal reduction table.
//!
//! A [`MonoidalReducer`] needs only a monoid. Every node kind then gets a
//! default rule that combines the node's already-reduced children with the
//! monoid's `append` in source order:
//!
//! - leaves (identifiers, literals, `this`, `super`, `debugger`, ...) reduce
//!   to the identity,
//! - a missing optional child is replaced by the identity,
//! - holes in a sparse sequence are dropped before folding,
//! - a sequence is folded left from the identity and takes one operand
//!   position among its siblings.
//!
//! Implementors override the methods for the kinds they care about and keep
//! the defaults everywhere else. [`Monoidal`] plugs such a table into the
//! traversal.

use esfold_ast::{tree::*, Reducer};
use esfold_core::{ConfigError, Monoid, MonoidAdapter, MonoidBuilder};

pub trait MonoidalReducer {
    type Output: Clone;

    fn monoid(&self) -> &MonoidAdapter<Self::Output>;

    fn reduce_array_assignment_target(
        &mut self,
        _node: &ArrayAssignmentTarget,
        elements: Vec<Option<Self::Output>>,
        rest: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.fold_present(elements), m.or_identity(rest)))
    }

    fn reduce_array_binding(
        &mut self,
        _node: &ArrayBinding,
        elements: Vec<Option<Self::Output>>,
        rest: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.fold_present(elements), m.or_identity(rest)))
    }

    fn reduce_array_expression(
        &mut self,
        _node: &ArrayExpression,
        elements: Vec<Option<Self::Output>>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold_present(elements))
    }

    fn reduce_arrow_expression(
        &mut self,
        _node: &ArrowExpression,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(params, body))
    }

    fn reduce_assignment_expression(
        &mut self,
        _node: &AssignmentExpression,
        binding: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(binding, expression))
    }

    fn reduce_assignment_target_identifier(
        &mut self,
        _node: &AssignmentTargetIdentifier,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_assignment_target_property_identifier(
        &mut self,
        _node: &AssignmentTargetPropertyIdentifier,
        binding: Self::Output,
        init: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(binding, m.or_identity(init)))
    }

    fn reduce_assignment_target_property_property(
        &mut self,
        _node: &AssignmentTargetPropertyProperty,
        name: Self::Output,
        binding: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(name, binding))
    }

    fn reduce_assignment_target_with_default(
        &mut self,
        _node: &AssignmentTargetWithDefault,
        binding: Self::Output,
        init: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(binding, init))
    }

    fn reduce_binary_expression(
        &mut self,
        _node: &BinaryExpression,
        left: Self::Output,
        right: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(left, right))
    }

    fn reduce_binding_identifier(
        &mut self,
        _node: &BindingIdentifier,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_binding_property_identifier(
        &mut self,
        _node: &BindingPropertyIdentifier,
        binding: Self::Output,
        init: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(binding, m.or_identity(init)))
    }

    fn reduce_binding_property_property(
        &mut self,
        _node: &BindingPropertyProperty,
        name: Self::Output,
        binding: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(name, binding))
    }

    fn reduce_binding_with_default(
        &mut self,
        _node: &BindingWithDefault,
        binding: Self::Output,
        init: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(binding, init))
    }

    fn reduce_block(
        &mut self,
        _node: &Block,
        statements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(statements))
    }

    fn reduce_block_statement(
        &mut self,
        _node: &BlockStatement,
        block: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(block)
    }

    fn reduce_break_statement(&mut self, _node: &BreakStatement) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_call_expression(
        &mut self,
        _node: &CallExpression,
        callee: Self::Output,
        arguments: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(callee, m.fold(arguments)))
    }

    fn reduce_catch_clause(
        &mut self,
        _node: &CatchClause,
        binding: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(binding, body))
    }

    fn reduce_class_declaration(
        &mut self,
        _node: &ClassDeclaration,
        name: Self::Output,
        super_class: Option<Self::Output>,
        elements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([name, m.or_identity(super_class), m.fold(elements)]))
    }

    fn reduce_class_element(
        &mut self,
        _node: &ClassElement,
        method: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(method)
    }

    fn reduce_class_expression(
        &mut self,
        _node: &ClassExpression,
        name: Option<Self::Output>,
        super_class: Option<Self::Output>,
        elements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([
            m.or_identity(name),
            m.or_identity(super_class),
            m.fold(elements),
        ]))
    }

    fn reduce_compound_assignment_expression(
        &mut self,
        _node: &CompoundAssignmentExpression,
        binding: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(binding, expression))
    }

    fn reduce_computed_member_assignment_target(
        &mut self,
        _node: &ComputedMemberAssignmentTarget,
        object: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(object, expression))
    }

    fn reduce_computed_member_expression(
        &mut self,
        _node: &ComputedMemberExpression,
        object: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(object, expression))
    }

    fn reduce_computed_property_name(
        &mut self,
        _node: &ComputedPropertyName,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(expression)
    }

    fn reduce_conditional_expression(
        &mut self,
        _node: &ConditionalExpression,
        test: Self::Output,
        consequent: Self::Output,
        alternate: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold([test, consequent, alternate]))
    }

    fn reduce_continue_statement(
        &mut self,
        _node: &ContinueStatement,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_data_property(
        &mut self,
        _node: &DataProperty,
        name: Self::Output,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(name, expression))
    }

    fn reduce_debugger_statement(
        &mut self,
        _node: &DebuggerStatement,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_directive(&mut self, _node: &Directive) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_do_while_statement(
        &mut self,
        _node: &DoWhileStatement,
        body: Self::Output,
        test: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(body, test))
    }

    fn reduce_empty_statement(&mut self, _node: &EmptyStatement) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_export(
        &mut self,
        _node: &Export,
        declaration: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(declaration)
    }

    fn reduce_export_all_from(&mut self, _node: &ExportAllFrom) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_export_default(
        &mut self,
        _node: &ExportDefault,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(body)
    }

    fn reduce_export_from(
        &mut self,
        _node: &ExportFrom,
        named_exports: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(named_exports))
    }

    fn reduce_export_from_specifier(
        &mut self,
        _node: &ExportFromSpecifier,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_export_local_specifier(
        &mut self,
        _node: &ExportLocalSpecifier,
        name: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(name)
    }

    fn reduce_export_locals(
        &mut self,
        _node: &ExportLocals,
        named_exports: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(named_exports))
    }

    fn reduce_expression_statement(
        &mut self,
        _node: &ExpressionStatement,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(expression)
    }

    fn reduce_for_in_statement(
        &mut self,
        _node: &ForInStatement,
        left: Self::Output,
        right: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold([left, right, body]))
    }

    fn reduce_for_of_statement(
        &mut self,
        _node: &ForOfStatement,
        left: Self::Output,
        right: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold([left, right, body]))
    }

    fn reduce_for_statement(
        &mut self,
        _node: &ForStatement,
        init: Option<Self::Output>,
        test: Option<Self::Output>,
        update: Option<Self::Output>,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([
            m.or_identity(init),
            m.or_identity(test),
            m.or_identity(update),
            body,
        ]))
    }

    fn reduce_formal_parameters(
        &mut self,
        _node: &FormalParameters,
        items: Vec<Self::Output>,
        rest: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.fold(items), m.or_identity(rest)))
    }

    fn reduce_function_body(
        &mut self,
        _node: &FunctionBody,
        directives: Vec<Self::Output>,
        statements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.fold(directives), m.fold(statements)))
    }

    fn reduce_function_declaration(
        &mut self,
        _node: &FunctionDeclaration,
        name: Self::Output,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold([name, params, body]))
    }

    fn reduce_function_expression(
        &mut self,
        _node: &FunctionExpression,
        name: Option<Self::Output>,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([m.or_identity(name), params, body]))
    }

    fn reduce_getter(
        &mut self,
        _node: &Getter,
        name: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(name, body))
    }

    fn reduce_identifier_expression(
        &mut self,
        _node: &IdentifierExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_if_statement(
        &mut self,
        _node: &IfStatement,
        test: Self::Output,
        consequent: Self::Output,
        alternate: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([test, consequent, m.or_identity(alternate)]))
    }

    fn reduce_import(
        &mut self,
        _node: &Import,
        default_binding: Option<Self::Output>,
        named_imports: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.or_identity(default_binding), m.fold(named_imports)))
    }

    fn reduce_import_namespace(
        &mut self,
        _node: &ImportNamespace,
        default_binding: Option<Self::Output>,
        namespace_binding: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.or_identity(default_binding), namespace_binding))
    }

    fn reduce_import_specifier(
        &mut self,
        _node: &ImportSpecifier,
        binding: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(binding)
    }

    fn reduce_labeled_statement(
        &mut self,
        _node: &LabeledStatement,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(body)
    }

    fn reduce_literal_boolean_expression(
        &mut self,
        _node: &LiteralBooleanExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_literal_infinity_expression(
        &mut self,
        _node: &LiteralInfinityExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_literal_null_expression(
        &mut self,
        _node: &LiteralNullExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_literal_numeric_expression(
        &mut self,
        _node: &LiteralNumericExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_literal_reg_exp_expression(
        &mut self,
        _node: &LiteralRegExpExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_literal_string_expression(
        &mut self,
        _node: &LiteralStringExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_method(
        &mut self,
        _node: &Method,
        name: Self::Output,
        params: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold([name, params, body]))
    }

    fn reduce_module(
        &mut self,
        _node: &Module,
        directives: Vec<Self::Output>,
        items: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.fold(directives), m.fold(items)))
    }

    fn reduce_new_expression(
        &mut self,
        _node: &NewExpression,
        callee: Self::Output,
        arguments: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(callee, m.fold(arguments)))
    }

    fn reduce_new_target_expression(
        &mut self,
        _node: &NewTargetExpression,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_object_assignment_target(
        &mut self,
        _node: &ObjectAssignmentTarget,
        properties: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(properties))
    }

    fn reduce_object_binding(
        &mut self,
        _node: &ObjectBinding,
        properties: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(properties))
    }

    fn reduce_object_expression(
        &mut self,
        _node: &ObjectExpression,
        properties: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(properties))
    }

    fn reduce_return_statement(
        &mut self,
        _node: &ReturnStatement,
        expression: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().or_identity(expression))
    }

    fn reduce_script(
        &mut self,
        _node: &Script,
        directives: Vec<Self::Output>,
        statements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.fold(directives), m.fold(statements)))
    }

    fn reduce_setter(
        &mut self,
        _node: &Setter,
        name: Self::Output,
        param: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold([name, param, body]))
    }

    fn reduce_shorthand_property(
        &mut self,
        _node: &ShorthandProperty,
        name: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(name)
    }

    fn reduce_spread_element(
        &mut self,
        _node: &SpreadElement,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(expression)
    }

    fn reduce_static_member_assignment_target(
        &mut self,
        _node: &StaticMemberAssignmentTarget,
        object: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(object)
    }

    fn reduce_static_member_expression(
        &mut self,
        _node: &StaticMemberExpression,
        object: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(object)
    }

    fn reduce_static_property_name(
        &mut self,
        _node: &StaticPropertyName,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_super(&mut self, _node: &Super) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_switch_case(
        &mut self,
        _node: &SwitchCase,
        test: Self::Output,
        consequent: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(test, m.fold(consequent)))
    }

    fn reduce_switch_default(
        &mut self,
        _node: &SwitchDefault,
        consequent: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(consequent))
    }

    fn reduce_switch_statement(
        &mut self,
        _node: &SwitchStatement,
        discriminant: Self::Output,
        cases: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(discriminant, m.fold(cases)))
    }

    fn reduce_switch_statement_with_default(
        &mut self,
        _node: &SwitchStatementWithDefault,
        discriminant: Self::Output,
        pre_default_cases: Vec<Self::Output>,
        default_case: Self::Output,
        post_default_cases: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([
            discriminant,
            m.fold(pre_default_cases),
            default_case,
            m.fold(post_default_cases),
        ]))
    }

    fn reduce_template_element(
        &mut self,
        _node: &TemplateElement,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_template_expression(
        &mut self,
        _node: &TemplateExpression,
        tag: Option<Self::Output>,
        elements: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(m.or_identity(tag), m.fold(elements)))
    }

    fn reduce_this_expression(&mut self, _node: &ThisExpression) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().identity())
    }

    fn reduce_throw_statement(
        &mut self,
        _node: &ThrowStatement,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(expression)
    }

    fn reduce_try_catch_statement(
        &mut self,
        _node: &TryCatchStatement,
        body: Self::Output,
        catch_clause: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(body, catch_clause))
    }

    fn reduce_try_finally_statement(
        &mut self,
        _node: &TryFinallyStatement,
        body: Self::Output,
        catch_clause: Option<Self::Output>,
        finalizer: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.fold([body, m.or_identity(catch_clause), finalizer]))
    }

    fn reduce_unary_expression(
        &mut self,
        _node: &UnaryExpression,
        operand: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(operand)
    }

    fn reduce_update_expression(
        &mut self,
        _node: &UpdateExpression,
        operand: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(operand)
    }

    fn reduce_variable_declaration(
        &mut self,
        _node: &VariableDeclaration,
        declarators: Vec<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().fold(declarators))
    }

    fn reduce_variable_declaration_statement(
        &mut self,
        _node: &VariableDeclarationStatement,
        declaration: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(declaration)
    }

    fn reduce_variable_declarator(
        &mut self,
        _node: &VariableDeclarator,
        binding: Self::Output,
        init: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        let m = self.monoid();
        Ok(m.append(binding, m.or_identity(init)))
    }

    fn reduce_while_statement(
        &mut self,
        _node: &WhileStatement,
        test: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(test, body))
    }

    fn reduce_with_statement(
        &mut self,
        _node: &WithStatement,
        object: Self::Output,
        body: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().append(object, body))
    }

    fn reduce_yield_expression(
        &mut self,
        _node: &YieldExpression,
        expression: Option<Self::Output>,
    ) -> anyhow::Result<Self::Output> {
        Ok(self.monoid().or_identity(expression))
    }

    fn reduce_yield_generator_expression(
        &mut self,
        _node: &YieldGeneratorExpression,
        expression: Self::Output,
    ) -> anyhow::Result<Self::Output> {
        Ok(expression)
    }
}

/// Adapts a [`MonoidalReducer`] to the traversal's [`Reducer`] table.
pub struct Monoidal<'r, R>(pub &'r mut R);

macro_rules! delegate {
    ($($method: ident($node: ident $(, $slot: ident: $ty: ty)*);)*) => {
        impl<R: MonoidalReducer> Reducer for Monoidal<'_, R> {
            type Output = R::Output;

            $(
                #[inline]
                fn $method(&mut self, node: &$node $(, $slot: $ty)*) -> anyhow::Result<R::Output> {
                    self.0.$method(node $(, $slot)*)
                }
            )*
        }
    };
}

delegate! {
    reduce_array_assignment_target(ArrayAssignmentTarget, elements: Vec<Option<R::Output>>, rest: Option<R::Output>);
    reduce_array_binding(ArrayBinding, elements: Vec<Option<R::Output>>, rest: Option<R::Output>);
    reduce_array_expression(ArrayExpression, elements: Vec<Option<R::Output>>);
    reduce_arrow_expression(ArrowExpression, params: R::Output, body: R::Output);
    reduce_assignment_expression(AssignmentExpression, binding: R::Output, expression: R::Output);
    reduce_assignment_target_identifier(AssignmentTargetIdentifier);
    reduce_assignment_target_property_identifier(AssignmentTargetPropertyIdentifier, binding: R::Output, init: Option<R::Output>);
    reduce_assignment_target_property_property(AssignmentTargetPropertyProperty, name: R::Output, binding: R::Output);
    reduce_assignment_target_with_default(AssignmentTargetWithDefault, binding: R::Output, init: R::Output);
    reduce_binary_expression(BinaryExpression, left: R::Output, right: R::Output);
    reduce_binding_identifier(BindingIdentifier);
    reduce_binding_property_identifier(BindingPropertyIdentifier, binding: R::Output, init: Option<R::Output>);
    reduce_binding_property_property(BindingPropertyProperty, name: R::Output, binding: R::Output);
    reduce_binding_with_default(BindingWithDefault, binding: R::Output, init: R::Output);
    reduce_block(Block, statements: Vec<R::Output>);
    reduce_block_statement(BlockStatement, block: R::Output);
    reduce_break_statement(BreakStatement);
    reduce_call_expression(CallExpression, callee: R::Output, arguments: Vec<R::Output>);
    reduce_catch_clause(CatchClause, binding: R::Output, body: R::Output);
    reduce_class_declaration(ClassDeclaration, name: R::Output, super_class: Option<R::Output>, elements: Vec<R::Output>);
    reduce_class_element(ClassElement, method: R::Output);
    reduce_class_expression(ClassExpression, name: Option<R::Output>, super_class: Option<R::Output>, elements: Vec<R::Output>);
    reduce_compound_assignment_expression(CompoundAssignmentExpression, binding: R::Output, expression: R::Output);
    reduce_computed_member_assignment_target(ComputedMemberAssignmentTarget, object: R::Output, expression: R::Output);
    reduce_computed_member_expression(ComputedMemberExpression, object: R::Output, expression: R::Output);
    reduce_computed_property_name(ComputedPropertyName, expression: R::Output);
    reduce_conditional_expression(ConditionalExpression, test: R::Output, consequent: R::Output, alternate: R::Output);
    reduce_continue_statement(ContinueStatement);
    reduce_data_property(DataProperty, name: R::Output, expression: R::Output);
    reduce_debugger_statement(DebuggerStatement);
    reduce_directive(Directive);
    reduce_do_while_statement(DoWhileStatement, body: R::Output, test: R::Output);
    reduce_empty_statement(EmptyStatement);
    reduce_export(Export, declaration: R::Output);
    reduce_export_all_from(ExportAllFrom);
    reduce_export_default(ExportDefault, body: R::Output);
    reduce_export_from(ExportFrom, named_exports: Vec<R::Output>);
    reduce_export_from_specifier(ExportFromSpecifier);
    reduce_export_local_specifier(ExportLocalSpecifier, name: R::Output);
    reduce_export_locals(ExportLocals, named_exports: Vec<R::Output>);
    reduce_expression_statement(ExpressionStatement, expression: R::Output);
    reduce_for_in_statement(ForInStatement, left: R::Output, right: R::Output, body: R::Output);
    reduce_for_of_statement(ForOfStatement, left: R::Output, right: R::Output, body: R::Output);
    reduce_for_statement(ForStatement, init: Option<R::Output>, test: Option<R::Output>, update: Option<R::Output>, body: R::Output);
    reduce_formal_parameters(FormalParameters, items: Vec<R::Output>, rest: Option<R::Output>);
    reduce_function_body(FunctionBody, directives: Vec<R::Output>, statements: Vec<R::Output>);
    reduce_function_declaration(FunctionDeclaration, name: R::Output, params: R::Output, body: R::Output);
    reduce_function_expression(FunctionExpression, name: Option<R::Output>, params: R::Output, body: R::Output);
    reduce_getter(Getter, name: R::Output, body: R::Output);
    reduce_identifier_expression(IdentifierExpression);
    reduce_if_statement(IfStatement, test: R::Output, consequent: R::Output, alternate: Option<R::Output>);
    reduce_import(Import, default_binding: Option<R::Output>, named_imports: Vec<R::Output>);
    reduce_import_namespace(ImportNamespace, default_binding: Option<R::Output>, namespace_binding: R::Output);
    reduce_import_specifier(ImportSpecifier, binding: R::Output);
    reduce_labeled_statement(LabeledStatement, body: R::Output);
    reduce_literal_boolean_expression(LiteralBooleanExpression);
    reduce_literal_infinity_expression(LiteralInfinityExpression);
    reduce_literal_null_expression(LiteralNullExpression);
    reduce_literal_numeric_expression(LiteralNumericExpression);
    reduce_literal_reg_exp_expression(LiteralRegExpExpression);
    reduce_literal_string_expression(LiteralStringExpression);
    reduce_method(Method, name: R::Output, params: R::Output, body: R::Output);
    reduce_module(Module, directives: Vec<R::Output>, items: Vec<R::Output>);
    reduce_new_expression(NewExpression, callee: R::Output, arguments: Vec<R::Output>);
    reduce_new_target_expression(NewTargetExpression);
    reduce_object_assignment_target(ObjectAssignmentTarget, properties: Vec<R::Output>);
    reduce_object_binding(ObjectBinding, properties: Vec<R::Output>);
    reduce_object_expression(ObjectExpression, properties: Vec<R::Output>);
    reduce_return_statement(ReturnStatement, expression: Option<R::Output>);
    reduce_script(Script, directives: Vec<R::Output>, statements: Vec<R::Output>);
    reduce_setter(Setter, name: R::Output, param: R::Output, body: R::Output);
    reduce_shorthand_property(ShorthandProperty, name: R::Output);
    reduce_spread_element(SpreadElement, expression: R::Output);
    reduce_static_member_assignment_target(StaticMemberAssignmentTarget, object: R::Output);
    reduce_static_member_expression(StaticMemberExpression, object: R::Output);
    reduce_static_property_name(StaticPropertyName);
    reduce_super(Super);
    reduce_switch_case(SwitchCase, test: R::Output, consequent: Vec<R::Output>);
    reduce_switch_default(SwitchDefault, consequent: Vec<R::Output>);
    reduce_switch_statement(SwitchStatement, discriminant: R::Output, cases: Vec<R::Output>);
    reduce_switch_statement_with_default(SwitchStatementWithDefault, discriminant: R::Output, pre_default_cases: Vec<R::Output>, default_case: R::Output, post_default_cases: Vec<R::Output>);
    reduce_template_element(TemplateElement);
    reduce_template_expression(TemplateExpression, tag: Option<R::Output>, elements: Vec<R::Output>);
    reduce_this_expression(ThisExpression);
    reduce_throw_statement(ThrowStatement, expression: R::Output);
    reduce_try_catch_statement(TryCatchStatement, body: R::Output, catch_clause: R::Output);
    reduce_try_finally_statement(TryFinallyStatement, body: R::Output, catch_clause: Option<R::Output>, finalizer: R::Output);
    reduce_unary_expression(UnaryExpression, operand: R::Output);
    reduce_update_expression(UpdateExpression, operand: R::Output);
    reduce_variable_declaration(VariableDeclaration, declarators: Vec<R::Output>);
    reduce_variable_declaration_statement(VariableDeclarationStatement, declaration: R::Output);
    reduce_variable_declarator(VariableDeclarator, binding: R::Output, init: Option<R::Output>);
    reduce_while_statement(WhileStatement, test: R::Output, body: R::Output);
    reduce_with_statement(WithStatement, object: R::Output, body: R::Output);
    reduce_yield_expression(YieldExpression, expression: Option<R::Output>);
    reduce_yield_generator_expression(YieldGeneratorExpression, expression: R::Output);
}

/// The plain reduction table: every kind uses its default rule. Useful on its
/// own for checking what a monoid does to a tree, and as a field to delegate
/// to from a custom reducer.
pub struct MonoidReducer<T> {
    monoid: MonoidAdapter<T>,
}

impl<T: Clone> MonoidReducer<T> {
    pub fn new(monoid: MonoidAdapter<T>) -> Self {
        Self { monoid }
    }

    pub fn from_builder(builder: MonoidBuilder<T>) -> Result<Self, ConfigError> {
        Ok(Self::new(builder.build()?))
    }
}

impl<M> MonoidReducer<M>
where
    M: Monoid + Clone + 'static,
{
    pub fn of_monoid() -> Self {
        Self::new(MonoidAdapter::of_monoid())
    }
}

impl<T: Clone> MonoidalReducer for MonoidReducer<T> {
    type Output = T;

    fn monoid(&self) -> &MonoidAdapter<T> {
        &self.monoid
    }
}
