mod common;
use common::*;
use grapher::mach::{BinaryOp::*, Domain, ErrorCode, Instruction, Runtime, Vars};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_operand_order() {
    assert_eq!(eval(&[lit(2.0), lit(5.0), op(Add)]), Ok(7.0));
    assert_eq!(eval(&[lit(2.0), lit(5.0), op(Sub)]), Ok(3.0));
    assert_eq!(eval(&[lit(2.0), lit(5.0), op(Mul)]), Ok(10.0));
    assert_eq!(eval(&[lit(2.0), lit(5.0), op(Div)]), Ok(2.5));
    assert_eq!(eval(&[lit(3.0), lit(7.0), op(Mod)]), Ok(1.0));
    assert_eq!(eval(&[lit(3.0), lit(2.0), op(Pow)]), Ok(8.0));
}

#[test]
fn test_division_by_zero() {
    // 5 on top divided by the 0 beneath it
    let err = eval(&[lit(0.0), lit(5.0), op(Div)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Undefined);
    let err = eval(&[lit(0.0), lit(5.0), op(Mod)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Undefined);
}

#[test]
fn test_divisor_is_the_lower_operand() {
    assert_eq!(eval(&[lit(5.0), lit(0.0), op(Div)]), Ok(0.0));
    assert_eq!(eval(&[lit(5.0), lit(0.0), op(Mod)]), Ok(0.0));
    assert_eq!(eval(&[lit(5.0), lit(0.0), op(Sub)]), Ok(-5.0));
}

#[test]
fn test_underflow() {
    assert_eq!(eval(&[op(Add)]).unwrap_err().code(), ErrorCode::Underflow);
    assert_eq!(eval(&[]).unwrap_err().code(), ErrorCode::Underflow);
    assert_eq!(
        eval(&[lit(1.0), op(Pow)]).unwrap_err().code(),
        ErrorCode::Underflow
    );
    assert_eq!(eval(&[Instruction::Neg]).unwrap_err().code(), ErrorCode::Underflow);
    assert_eq!(eval(&[Instruction::Dup]).unwrap_err().code(), ErrorCode::Underflow);
    assert_eq!(eval(&[func("sin")]).unwrap_err().code(), ErrorCode::Underflow);
}

static CALLS: AtomicUsize = AtomicUsize::new(0);

fn counted_sqrt(x: f64) -> f64 {
    CALLS.fetch_add(1, Ordering::SeqCst);
    x.sqrt()
}

#[test]
fn test_domain_restriction_skips_call() {
    let f = restricted("root", counted_sqrt, Domain::NonNegative);
    let before = CALLS.load(Ordering::SeqCst);
    let err = eval(&[lit(-4.0), f.clone()]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Undefined);
    assert_eq!(CALLS.load(Ordering::SeqCst), before);
    assert_eq!(eval(&[lit(4.0), f]), Ok(2.0));
    assert_eq!(CALLS.load(Ordering::SeqCst), before + 1);
}

#[test]
fn test_builtin_domains() {
    assert_eq!(eval(&[lit(0.0), func("ln")]).unwrap_err().code(), ErrorCode::Undefined);
    assert_eq!(eval(&[lit(-1.0), func("log")]).unwrap_err().code(), ErrorCode::Undefined);
    assert_eq!(eval(&[lit(0.0), func("sqrt")]), Ok(0.0));
    assert_eq!(eval(&[lit(100.0), func("log")]), Ok(2.0));
    assert_eq!(eval(&[lit(-3.0), func("abs")]), Ok(3.0));
}

#[test]
fn test_negate_and_dup() {
    assert_eq!(eval(&[lit(3.0), Instruction::Neg]), Ok(-3.0));
    assert_eq!(eval(&[lit(3.0), Instruction::Dup, op(Mul)]), Ok(9.0));
}

#[test]
fn test_result_is_top_of_stack() {
    assert_eq!(eval(&[lit(1.0), lit(2.0), lit(3.0)]), Ok(3.0));
}

#[test]
fn test_power_is_not_classified() {
    let y = eval(&[lit(0.5), lit(-8.0), op(Pow)]).unwrap();
    assert!(y.is_nan());
    let y = eval(&[lit(-1.0), lit(0.0), op(Pow)]).unwrap();
    assert!(y.is_infinite());
}

#[test]
fn test_repeat_execution_is_identical() {
    let mut vars = Vars::new();
    let a = vars.define("a");
    vars.store(&a, 0.7);
    let seq = vec![
        Instruction::Push(vars.free()),
        func("sin"),
        Instruction::Push(a),
        op(Mul),
        lit(3.0),
        op(Pow),
    ];
    let runtime = Runtime::default();
    let first = runtime.execute(&seq, &vars.scope(1.3)).unwrap();
    for _ in 0..10 {
        let again = runtime.execute(&seq, &vars.scope(1.3)).unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn test_variables_are_read_at_execution() {
    let mut vars = Vars::new();
    let b = vars.define("b");
    let seq = vec![Instruction::Push(vars.free()), Instruction::Push(b.clone()), op(Add)];
    vars.store(&b, 1.0);
    assert_eq!(grapher::mach::execute(&seq, &vars.scope(2.0)), Ok(3.0));
    vars.store(&b, 10.0);
    assert_eq!(grapher::mach::execute(&seq, &vars.scope(2.0)), Ok(12.0));
}

#[test]
fn test_x_from_scope() {
    let seq = vec![Instruction::Push(Vars::new().free()), lit(2.0), op(Pow)];
    // 2 ^ x
    assert!(close(eval_at(&seq, 10.0).unwrap(), 1024.0));
}

#[test]
fn test_scopes_in_parallel() {
    let vars = Vars::new();
    let seq = vec![Instruction::Push(vars.free()), Instruction::Dup, op(Mul)];
    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let seq = &seq;
                let vars = &vars;
                s.spawn(move || grapher::mach::execute(seq, &vars.scope(i as f64)).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec![0.0, 1.0, 4.0, 9.0]);
}

#[test]
fn test_overflow_from_stack_limit() {
    let vars = Vars::new();
    let runtime = Runtime::new(16);
    let seq: Vec<Instruction> = (0..17).map(|i| lit(i as f64)).collect();
    let err = runtime.execute(&seq, &vars.scope(0.0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Overflow);
    assert_eq!(runtime.execute(&seq[..16], &vars.scope(0.0)), Ok(15.0));
}
