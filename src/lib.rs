//! # RPN Grapher
//!
//! A graphing calculator in the style of the handhelds: equations are
//! keyed in reverse Polish order, one instruction per key, and drawn
//! against a pannable, zoomable viewport.
//!
//! Four equation slots are plotted at once. Four sliders, `a` to `d`,
//! provide variables alongside the free variable `x`.
//!
//! ```
//! use grapher::mach::{execute, BinaryOp, Function, Instruction, Vars};
//!
//! let vars = Vars::new();
//! let square_root_of_x_plus_one = vec![
//!     Instruction::Push(vars.free()),
//!     Instruction::Literal(1.0),
//!     Instruction::Binary(BinaryOp::Add),
//!     Instruction::Function(Function::lookup("sqrt").unwrap()),
//! ];
//! assert_eq!(execute(&square_root_of_x_plus_one, &vars.scope(3.0)), Ok(2.0));
//! ```
//!
//! Run the `grapher` binary for the interactive terminal version.
//! `RUST_LOG` controls logging and `GRAPHER_CONFIG` may name a JSON
//! settings file.

pub mod config;
pub mod mach;
pub mod plot;
pub mod term;
