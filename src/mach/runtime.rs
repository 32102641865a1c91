use super::{Error, Instruction, Operation, Scope, Stack};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Runs an instruction sequence against a fresh stack. The first failing
/// instruction aborts the rest of the sequence.
///
/// `Noop` belongs to the keypad, not to equations. `Equation` refuses to
/// store it, so reaching it here is a caller bug: debug builds assert,
/// release builds report `InternalError`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runtime {
    stack_limit: usize,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Runtime::DEFAULT_STACK_LIMIT)
    }
}

impl Runtime {
    pub const DEFAULT_STACK_LIMIT: usize = 256;

    pub fn new(stack_limit: usize) -> Runtime {
        Runtime { stack_limit }
    }

    pub fn stack_limit(&self) -> usize {
        self.stack_limit
    }

    pub fn execute(&self, instructions: &[Instruction], scope: &Scope) -> Result<f64> {
        let mut stack: Stack<f64> = Stack::new(self.stack_limit);
        for instruction in instructions {
            self.step(instruction, &mut stack, scope)?;
        }
        match stack.last() {
            Some(val) => Ok(*val),
            None => Err(error!(Underflow; "NO RESULT")),
        }
    }

    fn step(&self, instruction: &Instruction, stack: &mut Stack<f64>, scope: &Scope) -> Result<()> {
        use Instruction::*;
        match instruction {
            Literal(val) => stack.push(*val),
            Push(var) => stack.push(scope.fetch(var)),
            Binary(op) => {
                let (y, x) = stack.pop_2()?;
                stack.push(Operation::binary(*op, x, y)?)
            }
            Neg => {
                let top = stack.last_mut()?;
                *top = Operation::negate(*top);
                Ok(())
            }
            Function(func) => {
                let top = stack.last_mut()?;
                *top = Operation::function(func, *top)?;
                Ok(())
            }
            Dup => {
                let top = *stack.last_mut()?;
                stack.push(top)
            }
            Noop => {
                debug_assert!(false, "noop reached the engine");
                Err(error!(InternalError; "NOOP IN SEQUENCE"))
            }
        }
    }
}

/// Executes with the default stack limit.
pub fn execute(instructions: &[Instruction], scope: &Scope) -> Result<f64> {
    Runtime::default().execute(instructions, scope)
}
