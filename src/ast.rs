//! Abstract syntax tree node definitions.
//!
//! The parser produces [`Program`] values built from [`Statement`] and
//! [`Expr`] nodes. Every node implements `Display`, reproducing a canonical
//! textual form; the evaluator uses this for the inspect form of function
//! values.

/// A complete parsed program: the root of the AST.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A braced sequence of statements.
///
/// Blocks appear as `if`/`else` branches, loop bodies, and function bodies.
/// They do not introduce scopes of their own; scoping is handled by the
/// constructs that contain them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` or `const` declaration.
    Let {
        /// The declared name.
        name: String,
        /// Whether the binding is `const`.
        constant: bool,
        /// The initializer expression.
        value: Expr,
    },
    /// A named function declaration (`fn name(…) { … }`).
    ///
    /// The name is bound as a `const`.
    FunctionDeclaration {
        /// The declared name.
        name: String,
        /// The function literal expression.
        function: Expr,
    },
    /// An assignment or compound assignment to an existing binding.
    Reassign {
        /// The target name.
        name: String,
        /// The assignment operator.
        operator: AssignOperator,
        /// The right-hand expression.
        value: Expr,
    },
    /// A `return` statement.
    Return(Expr),
    /// A bare expression evaluated for its value.
    Expression(Expr),
    /// A classic C-style `for (let …; cond; update) { … }` loop.
    ForLoop {
        /// The `let` initialization statement.
        init: Box<Statement>,
        /// The loop condition.
        condition: Expr,
        /// The update slot: a postfix expression or a reassignment.
        update: Box<Statement>,
        /// The loop body.
        body: Block,
    },
    /// A `for (key, value in iterable) { … }` loop.
    ForIn {
        /// Name bound to the key or index.
        key: String,
        /// Name bound to the value or element.
        value: String,
        /// The iterated expression.
        iterable: Expr,
        /// The loop body.
        body: Block,
    },
    /// A `while (cond) { … }` loop.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body: Block,
    },
    /// A `break` statement.
    Break,
    /// A `continue` statement.
    Continue,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A 64-bit integer literal.
    Integer(i64),
    /// A 64-bit float literal.
    Float(f64),
    /// A string literal (contents taken verbatim, no escapes).
    Str(String),
    /// A boolean literal.
    Boolean(bool),
    /// The `null` literal.
    Null,
    /// A reference to a name.
    Identifier(String),
    /// An array literal.
    Array(Vec<Expr>),
    /// A hash literal; keys are arbitrary expressions evaluated later.
    Hash(Vec<(Expr, Expr)>),
    /// An anonymous function literal.
    Function {
        /// Parameter names in order.
        parameters: Vec<String>,
        /// The function body.
        body: Block,
    },
    /// A prefix operation (`!x`, `-x`).
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right: Box<Expr>,
    },
    /// A binary operation.
    Infix {
        /// Left operand.
        left: Box<Expr>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A postfix operation (`x++`, `x--`).
    ///
    /// The evaluator requires the target to be an identifier.
    Postfix {
        /// The operator.
        operator: PostfixOperator,
        /// The target expression.
        target: Box<Expr>,
    },
    /// An `if`/`else if`/`else` chain.
    If {
        /// Ordered `(condition, block)` branches.
        conditions: Vec<(Expr, Block)>,
        /// The optional trailing `else` block.
        alternative: Option<Block>,
    },
    /// An index operation (`a[i]`).
    Index {
        /// The indexed expression.
        left: Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
    /// A call (`f(a, b)`).
    Call {
        /// The call target.
        function: Box<Expr>,
        /// Argument expressions.
        arguments: Vec<Expr>,
    },
    /// A method call (`receiver.name(a, b)`).
    ///
    /// The name resolves through the environment first, then the
    /// receiver's per-type method table.
    Method {
        /// The receiver expression.
        receiver: Box<Expr>,
        /// The method name.
        name: String,
        /// Argument expressions.
        arguments: Vec<Expr>,
    },
}

/// A binary operator.
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
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// A postfix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// Increment (`x++`).
    Increment,
    /// Decrement (`x--`).
    Decrement,
}

/// An assignment operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOperator {
    /// Plain assignment (`=`).
    Assign,
    /// Add and assign (`+=`).
    AddAssign,
    /// Subtract and assign (`-=`).
    SubAssign,
    /// Multiply and assign (`*=`).
    MulAssign,
    /// Divide and assign (`/=`).
    DivAssign,
}

impl AssignOperator {
    /// Returns the infix operator a compound assignment applies, or `None`
    /// for plain `=`.
    #[must_use]
    pub const fn infix(self) -> Option<InfixOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(InfixOperator::Add),
            Self::SubAssign => Some(InfixOperator::Sub),
            Self::MulAssign => Some(InfixOperator::Mul),
            Self::DivAssign => Some(InfixOperator::Div),
        }
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bang => write!(f, "!"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}

impl std::fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, constant, value } => {
                let keyword = if *constant { "const" } else { "let" };
                write!(f, "{keyword} {name} = {value};")
            },
            Self::FunctionDeclaration { name, function } => {
                if let Expr::Function { parameters, body } = function {
                    write!(f, "fn {name}({}) {{ {body} }}", parameters.join(", "))
                } else {
                    write!(f, "fn {name}")
                }
            },
            Self::Reassign { name, operator, value } => {
                write!(f, "{name} {operator} {value};")
            },
            Self::Return(value) => write!(f, "return {value};"),
            Self::Expression(expr) => write!(f, "{expr}"),
            Self::ForLoop { init, condition, update, body } => {
                write!(f, "for ({init} {condition}; {update}) {{ {body} }}")
            },
            Self::ForIn { key, value, iterable, body } => {
                write!(f, "for ({key}, {value} in {iterable}) {{ {body} }}")
            },
            Self::While { condition, body } => {
                write!(f, "while ({condition}) {{ {body} }}")
            },
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Array(elements) => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Hash(pairs) => {
                let pairs: Vec<String> =
                    pairs.iter().map(|(key, value)| format!("{key}: {value}")).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
            Self::Function { parameters, body } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => {
                write!(f, "({left} {operator} {right})")
            },
            Self::Postfix { operator, target } => write!(f, "({target}{operator})"),
            Self::If { conditions, alternative } => {
                for (index, (condition, block)) in conditions.iter().enumerate() {
                    let keyword = if index == 0 { "if" } else { " else if" };
                    write!(f, "{keyword} ({condition}) {{ {block} }}")?;
                }
                if let Some(block) = alternative {
                    write!(f, " else {{ {block} }}")?;
                }
                Ok(())
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Call { function, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", arguments.join(", "))
            },
            Self::Method { receiver, name, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{receiver}.{name}({})", arguments.join(", "))
            },
        }
    }
}
