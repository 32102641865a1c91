use super::{Function, Var};

/// ## Virtual machine instruction set
///
/// The graphing machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `sin(x) * 2` is entered as `[Push(x), Function(sin), Literal(2), Binary(Mul)]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, PartialEq)]
pub enum Instruction {
    /// Push literal value on to the stack.
    Literal(f64),
    /// Push the current value of a variable. Infallible.
    Push(Var),
    /// Pop two, push one.
    Binary(BinaryOp),
    /// Negate the top of the stack in place.
    Neg,
    /// Replace the top of the stack with a function of it.
    Function(Function),
    /// Push a copy of the top of the stack.
    Dup,
    /// Marks an empty key. Never stored in an equation.
    Noop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl Instruction {
    pub fn is_noop(&self) -> bool {
        matches!(self, Instruction::Noop)
    }
}

impl From<f64> for Instruction {
    fn from(val: f64) -> Instruction {
        Instruction::Literal(val)
    }
}

impl From<BinaryOp> for Instruction {
    fn from(op: BinaryOp) -> Instruction {
        Instruction::Binary(op)
    }
}

impl From<Function> for Instruction {
    fn from(func: Function) -> Instruction {
        Instruction::Function(func)
    }
}

impl From<Var> for Instruction {
    fn from(var: Var) -> Instruction {
        Instruction::Push(var)
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use BinaryOp::*;
        match self {
            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            Mod => write!(f, "mod"),
            Pow => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Literal(v) => write!(f, "{}", v),
            Push(var) => write!(f, "{}", var),
            Binary(op) => write!(f, "{}", op),
            Neg => write!(f, "±"),
            Function(func) => write!(f, "{}", func.name()),
            Dup => write!(f, "dup"),
            Noop => write!(f, "???"),
        }
    }
}

/// Left to right reverse Polish text of a sequence.
pub fn transcript(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
