use std::{fmt, rc::Rc};

/// Behavior shared by every syntax tree node.
///
/// Besides its canonical text (via [`fmt::Display`]), each node can report the
/// literal of the token it was parsed from. The canonical text is fully
/// parenthesized, which makes it the natural thing to compare in parser tests.
pub trait Node: fmt::Display {
    /// The literal text of the token that starts this node.
    fn token_literal(&self) -> String;
}

/// The root of a parsed program: its statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  Identifier,
        /// The bound value.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned value.
        value: Expression,
    },
    /// A bare expression, optionally terminated by `;`.
    Expression(Expression),
}

/// A `{ ... }` sequence of statements, used for `if` branches and function
/// bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// A name appearing in source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name itself.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A function literal: `fn(<parameters>) { <body> }`.
///
/// Kept behind an `Rc` in the tree so that every function value created from
/// it shares the same parameter list and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names, in order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// Integer literal, such as `5`.
    Integer(i64),
    /// String literal, such as `"hello"`.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `<op><right>`, such as `-5` or `!ok`.
    Prefix {
        /// The operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Self>,
    },
    /// `<left> <op> <right>`, such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<parameters>) { <body> }`
    Function(Rc<FunctionLiteral>),
    /// `<function>(<arguments>)`
    Call {
        /// The callee; an identifier or any expression producing a function.
        function:  Box<Self>,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
    /// `[<elements>]`
    Array(Vec<Self>),
    /// `<left>[<index>]`
    Index {
        /// The indexed collection.
        left:  Box<Self>,
        /// The index.
        index: Box<Self>,
    },
    /// `{<key>: <value>, ...}`, pairs kept in source order.
    Hash(Vec<(Self, Self)>),
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// An infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `separator`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                 items: &[T],
                                 separator: &str)
                                 -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        write_joined(f, &self.parameters, ",")?;
        write!(f, "){{{}}}", self.body)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if({condition}) {{{consequence}}}")?;
                if let Some(alternative) = alternative {
                    write!(f, " {{{alternative}}}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments, ", ")?;
                write!(f, ")")
            },
            Self::Array(elements) => {
                write!(f, "[")?;
                write_joined(f, elements, ", ")?;
                write!(f, "]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

impl Node for Program {
    fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Node::token_literal)
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> String {
        "{".to_string()
    }
}

impl Node for Statement {
    fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression(expr) => expr.token_literal(),
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> String {
        self.name.clone()
    }
}

impl Node for Expression {
    fn token_literal(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.token_literal(),
            Self::Integer(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::Boolean(value) => value.to_string(),
            Self::Prefix { op, .. } => op.to_string(),
            Self::Infix { op, .. } => op.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::Function(_) => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::Array(_) | Self::Index { .. } => "[".to_string(),
            Self::Hash(_) => "{".to_string(),
        }
    }
}
