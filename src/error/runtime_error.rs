#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Each variant renders to the exact message the REPL and the embed entry
/// point expose (prefixed with `Error: ` at the presentation layer). An
/// error short-circuits every enclosing evaluation up to the program top.
pub enum RuntimeError {
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left: &'static str,
        /// The operator's source text.
        operator: String,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// An infix operator is not defined for the given operand types.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left: &'static str,
        /// The operator's source text.
        operator: String,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A prefix operator is not defined for the operand type.
    UnknownPrefixOperator {
        /// The operator's source text.
        operator: String,
        /// Type name of the operand.
        right: &'static str,
    },
    /// A value of an unhashable type was used as a hash key.
    UnusableHashKey {
        /// Type name of the offending key.
        key_type: &'static str,
    },
    /// The index operator was applied to a value that cannot be indexed.
    IndexNotSupported {
        /// Type name of the indexed value.
        left: &'static str,
    },
    /// A declaration would shadow a name already bound in the current scope.
    AlreadyDeclared {
        /// The name of the identifier.
        name: String,
    },
    /// A function declaration reuses a name bound in the current scope.
    FunctionAlreadyDeclared {
        /// The name of the function.
        name: String,
    },
    /// A declaration collides with a registered built-in function.
    BuiltinNameCollision {
        /// The name of the identifier.
        name: String,
    },
    /// An assignment targets a name that was never declared.
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
    },
    /// An assignment targets a `const` binding.
    ConstReassignment {
        /// The name of the identifier.
        name: String,
    },
    /// An assignment targets a built-in function name.
    BuiltinReassignment {
        /// The name of the built-in.
        name: String,
    },
    /// An identifier could not be resolved anywhere.
    IdentifierNotFound {
        /// The name of the identifier.
        name: String,
    },
    /// `break` or `continue` appeared outside of a loop body.
    LoopControlOutsideLoop {
        /// The keyword (`break` or `continue`).
        keyword: &'static str,
    },
    /// A loop sentinel escaped a block with no enclosing loop.
    SentinelOutsideLoop {
        /// Type name of the sentinel (`BREAK` or `CONTINUE`).
        sentinel: &'static str,
    },
    /// Postfix `++`/`--` was applied to something other than an identifier.
    InvalidPostfixTarget,
    /// Postfix `++`/`--` was applied to a non-numeric binding.
    WrongPostfixType,
    /// A call target is not a function or built-in.
    NotAFunction {
        /// Type name of the call target.
        callee: &'static str,
    },
    /// A call or built-in received the wrong number of arguments.
    WrongNumberOfArguments {
        /// Number of arguments received.
        got: usize,
        /// Description of the accepted count.
        want: String,
    },
    /// A built-in received an argument of the wrong type.
    WrongArgumentType {
        /// The built-in's name.
        function: &'static str,
        /// The required type name.
        want: &'static str,
        /// Type name of the argument that was passed.
        got: &'static str,
    },
    /// `len` was applied to a value without a length.
    LenNotSupported {
        /// Type name of the argument.
        got: &'static str,
    },
    /// A hash method received an unhashable key argument.
    UnhashableArgument {
        /// The method's name.
        function: &'static str,
    },
    /// A hash lookup through `get` found no pair for the key.
    KeyNotFound,
    /// An array method that needs elements was called on an empty array.
    EmptyArray {
        /// The method's name.
        function: &'static str,
    },
    /// `slice` was called with out-of-range bounds.
    SliceOutOfRange {
        /// Lower bound.
        low: i64,
        /// Upper bound.
        high: i64,
        /// Length of the receiver.
        len: usize,
    },
    /// `slice` was called on an empty array.
    EmptySlice,
    /// A string method was called on an empty string.
    EmptyString,
    /// A method receiver's type publishes no methods.
    NotMethodable,
    /// A method name is unknown for the receiver's type.
    MethodNotFound,
    /// `for (k, v in …)` iterated over a non-iterable value.
    NotIterable {
        /// Type name of the iterable operand.
        iterable: &'static str,
    },
    /// Integer division or modulo by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnusableHashKey { key_type } => {
                write!(f, "unusable as hash key: {key_type}")
            },
            Self::IndexNotSupported { left } => {
                write!(f, "index operator not supported: {left}")
            },
            Self::AlreadyDeclared { name } => {
                write!(f, "Identifier {name} has already been declared")
            },
            Self::FunctionAlreadyDeclared { name } => {
                write!(f, "Function {name} has already been declared")
            },
            Self::BuiltinNameCollision { name } => {
                write!(f, "Identifier {name} has same name as builtin")
            },
            Self::UnknownIdentifier { name } => {
                write!(f, "Identifier {name} doesn't exists")
            },
            Self::ConstReassignment { name } => {
                write!(f, "Identifier {name} is const and can't be reassigned")
            },
            Self::BuiltinReassignment { name } => {
                write!(f, "Can't reassign {name} builtin function")
            },
            Self::IdentifierNotFound { name } => {
                write!(f, "Identifier not found: {name}")
            },
            Self::LoopControlOutsideLoop { keyword } => {
                write!(f, "{keyword} not in for statement")
            },
            Self::SentinelOutsideLoop { sentinel } => {
                write!(f, "{sentinel} not in loop")
            },
            Self::InvalidPostfixTarget => {
                write!(f, "Invalid left-hand expression for postfix operation")
            },
            Self::WrongPostfixType => write!(f, "wrong type for postfix operator"),
            Self::NotAFunction { callee } => write!(f, "not a function: {callee}"),
            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::WrongArgumentType { function, want, got } => {
                write!(f, "argument to `{function}` must be {want}, got {got}")
            },
            Self::LenNotSupported { got } => {
                write!(f, "argument to `len` not supported, got {got}")
            },
            Self::UnhashableArgument { function } => {
                write!(f, "argument key to `{function}` must be Hashable")
            },
            Self::KeyNotFound => write!(f, "key doesn't exist in HASH"),
            Self::EmptyArray { function } => {
                write!(f, "ARRAY must have elements for `{function}`")
            },
            Self::SliceOutOfRange { low, high, len } => {
                write!(f, "slice bounds out of range, [{low}:{high}] with array len of {len}")
            },
            Self::EmptySlice => write!(f, "array must have elements"),
            Self::EmptyString => write!(f, "string must have length greater than 0"),
            Self::NotMethodable => write!(f, "Object does not implement Methodable"),
            Self::MethodNotFound => write!(f, "Method not found in object methods"),
            Self::NotIterable { iterable } => write!(f, "not iterable: {iterable}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
