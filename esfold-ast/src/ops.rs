use std::fmt::Display;

macro_rules! operator {
    ($(#[$meta: meta])* $name: ident { $($variant: ident => $text: literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }

            pub fn parse(text: &str) -> Option<Self> {
                match text {
                    $($text => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

operator!(BinaryOperator {
    Equal => "==",
    NotEqual => "!=",
    StrictEqual => "===",
    StrictNotEqual => "!==",
    LessThan => "<",
    LessThanEqual => "<=",
    GreaterThan => ">",
    GreaterThanEqual => ">=",
    In => "in",
    InstanceOf => "instanceof",
    Left => "<<",
    Right => ">>",
    UnsignedRight => ">>>",
    Plus => "+",
    Minus => "-",
    Mul => "*",
    Div => "/",
    Rem => "%",
    Exp => "**",
    Comma => ",",
    LogicalOr => "||",
    LogicalAnd => "&&",
    BitwiseOr => "|",
    BitwiseXor => "^",
    BitwiseAnd => "&",
});

operator!(CompoundAssignmentOperator {
    Plus => "+=",
    Minus => "-=",
    Mul => "*=",
    Div => "/=",
    Rem => "%=",
    Exp => "**=",
    Left => "<<=",
    Right => ">>=",
    UnsignedRight => ">>>=",
    BitwiseOr => "|=",
    BitwiseXor => "^=",
    BitwiseAnd => "&=",
});

operator!(UnaryOperator {
    Plus => "+",
    Minus => "-",
    Not => "!",
    BitNot => "~",
    TypeOf => "typeof",
    Void => "void",
    Delete => "delete",
});

operator!(UpdateOperator {
    Increment => "++",
    Decrement => "--",
});

operator!(
    /// `var`, `let` or `const`.
    VariableDeclarationKind {
        Var => "var",
        Let => "let",
        Const => "const",
    }
);
