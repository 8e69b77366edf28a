//! Operator tokens carried by infix, prefix, postfix and assignment nodes.
//!
//! The canonical AST reuses these enums directly, so an operator read off an
//! external node is the same value the output node stores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when an operator token is not one of the known spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {family} operator '{token}'")]
pub struct UnknownOperator {
    pub family: &'static str,
    pub token: String,
}

macro_rules! operator_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Source spelling of the operator.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOperator;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                match token {
                    $($token => Ok($name::$variant),)+
                    other => Err(UnknownOperator {
                        family: $family,
                        token: other.to_string(),
                    }),
                }
            }
        }
    };
}

operator_enum! {
    /// Binary operators of infix expressions.
    InfixOperator, "infix" {
        Times => "*",
        Divide => "/",
        Remainder => "%",
        Plus => "+",
        Minus => "-",
        LeftShift => "<<",
        RightShiftSigned => ">>",
        RightShiftUnsigned => ">>>",
        Less => "<",
        Greater => ">",
        LessEquals => "<=",
        GreaterEquals => ">=",
        Equals => "==",
        NotEquals => "!=",
        Xor => "^",
        And => "&",
        Or => "|",
        ConditionalAnd => "&&",
        ConditionalOr => "||",
    }
}

operator_enum! {
    /// Unary operators written before their operand.
    PrefixOperator, "prefix" {
        Increment => "++",
        Decrement => "--",
        Plus => "+",
        Minus => "-",
        Complement => "~",
        Not => "!",
    }
}

operator_enum! {
    /// Unary operators written after their operand.
    PostfixOperator, "postfix" {
        Increment => "++",
        Decrement => "--",
    }
}

operator_enum! {
    /// Plain and compound assignment operators.
    AssignmentOperator, "assignment" {
        Assign => "=",
        PlusAssign => "+=",
        MinusAssign => "-=",
        TimesAssign => "*=",
        DivideAssign => "/=",
        BitAndAssign => "&=",
        BitOrAssign => "|=",
        BitXorAssign => "^=",
        RemainderAssign => "%=",
        LeftShiftAssign => "<<=",
        RightShiftSignedAssign => ">>=",
        RightShiftUnsignedAssign => ">>>=",
    }
}

/// Operator recorded on an external node, tagged by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Infix(InfixOperator),
    Prefix(PrefixOperator),
    Postfix(PostfixOperator),
    Assignment(AssignmentOperator),
}

impl From<InfixOperator> for Operator {
    fn from(op: InfixOperator) -> Self {
        Operator::Infix(op)
    }
}

impl From<PrefixOperator> for Operator {
    fn from(op: PrefixOperator) -> Self {
        Operator::Prefix(op)
    }
}

impl From<PostfixOperator> for Operator {
    fn from(op: PostfixOperator) -> Self {
        Operator::Postfix(op)
    }
}

impl From<AssignmentOperator> for Operator {
    fn from(op: AssignmentOperator) -> Self {
        Operator::Assignment(op)
    }
}
