use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

macro_rules! node_kinds {
    ($($kind: ident),* $(,)?) => {
        /// Tag of every node in the tree. Names match the `type` field of the
        /// Shift JSON format.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NodeKind {
            $($kind),*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind),*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind)),*
                }
            }
        }
    };
}

node_kinds! {
    ArrayAssignmentTarget,
    ArrayBinding,
    ArrayExpression,
    ArrowExpression,
    AssignmentExpression,
    AssignmentTargetIdentifier,
    AssignmentTargetPropertyIdentifier,
    AssignmentTargetPropertyProperty,
    AssignmentTargetWithDefault,
    BinaryExpression,
    BindingIdentifier,
    BindingPropertyIdentifier,
    BindingPropertyProperty,
    BindingWithDefault,
    Block,
    BlockStatement,
    BreakStatement,
    CallExpression,
    CatchClause,
    ClassDeclaration,
    ClassElement,
    ClassExpression,
    CompoundAssignmentExpression,
    ComputedMemberAssignmentTarget,
    ComputedMemberExpression,
    ComputedPropertyName,
    ConditionalExpression,
    ContinueStatement,
    DataProperty,
    DebuggerStatement,
    Directive,
    DoWhileStatement,
    EmptyStatement,
    Export,
    ExportAllFrom,
    ExportDefault,
    ExportFrom,
    ExportFromSpecifier,
    ExportLocalSpecifier,
    ExportLocals,
    ExpressionStatement,
    ForInStatement,
    ForOfStatement,
    ForStatement,
    FormalParameters,
    FunctionBody,
    FunctionDeclaration,
    FunctionExpression,
    Getter,
    IdentifierExpression,
    IfStatement,
    Import,
    ImportNamespace,
    ImportSpecifier,
    LabeledStatement,
    LiteralBooleanExpression,
    LiteralInfinityExpression,
    LiteralNullExpression,
    LiteralNumericExpression,
    LiteralRegExpExpression,
    LiteralStringExpression,
    Method,
    Module,
    NewExpression,
    NewTargetExpression,
    ObjectAssignmentTarget,
    ObjectBinding,
    ObjectExpression,
    ReturnStatement,
    Script,
    Setter,
    ShorthandProperty,
    SpreadElement,
    StaticMemberAssignmentTarget,
    StaticMemberExpression,
    StaticPropertyName,
    Super,
    SwitchCase,
    SwitchDefault,
    SwitchStatement,
    SwitchStatementWithDefault,
    TemplateElement,
    TemplateExpression,
    ThisExpression,
    ThrowStatement,
    TryCatchStatement,
    TryFinallyStatement,
    UnaryExpression,
    UpdateExpression,
    VariableDeclaration,
    VariableDeclarationStatement,
    VariableDeclarator,
    WhileStatement,
    WithStatement,
    YieldExpression,
    YieldGeneratorExpression,
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, NodeKind> =
        NodeKind::ALL.iter().map(|k| (k.name(), *k)).collect();
}

impl NodeKind {
    /// `None` for anything that is not a node of the grammar.
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_back_to_kinds() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn grammar_has_every_es2016_kind() {
        assert_eq!(NodeKind::ALL.len(), 96);
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(NodeKind::from_name("AwaitExpression"), None);
        assert_eq!(NodeKind::from_name("ifstatement"), None);
        assert_eq!(NodeKind::from_name(""), None);
    }

    #[test]
    fn display_is_the_shift_type_name() {
        assert_eq!(NodeKind::LiteralNullExpression.to_string(), "LiteralNullExpression");
    }
}
