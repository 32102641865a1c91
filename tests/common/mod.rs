#![allow(dead_code)]
use grapher::mach::{execute, BinaryOp, Domain, Error, Function, Instruction, Vars};

pub fn lit(v: f64) -> Instruction {
    Instruction::Literal(v)
}

pub fn op(op: BinaryOp) -> Instruction {
    Instruction::Binary(op)
}

pub fn func(name: &str) -> Instruction {
    Instruction::Function(Function::lookup(name).expect(name))
}

/// A custom function key with its own domain.
pub fn restricted(name: &'static str, f: fn(f64) -> f64, domain: Domain) -> Instruction {
    Instruction::Function(Function::new(name, f, domain))
}

pub fn eval(seq: &[Instruction]) -> Result<f64, Error> {
    let vars = Vars::new();
    execute(seq, &vars.scope(0.0))
}

pub fn eval_at(seq: &[Instruction], x: f64) -> Result<f64, Error> {
    let vars = Vars::new();
    execute(seq, &vars.scope(x))
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

pub fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}
