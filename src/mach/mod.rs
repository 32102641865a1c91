/*!
## Rust Machine Module

This Rust module is the stack machine that evaluates an equation.

An equation is never parsed. The keypad appends instructions in reverse
Polish order and the machine runs them front to back.

*/

#[macro_use]
mod error;
mod function;
mod instruction;
mod operation;
mod runtime;
mod stack;
mod var;

pub use error::Error;
pub use error::ErrorCode;
pub use function::Domain;
pub use function::Function;
pub use instruction::transcript;
pub use instruction::BinaryOp;
pub use instruction::Instruction;
pub use operation::Operation;
pub use runtime::execute;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Scope;
pub use var::Var;
pub use var::Vars;
