use pretty_assertions::assert_eq;
use tl_value::ErrorKind;

use super::*;
use crate::Interpreter;

fn nums(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::number).collect()
}

fn call(op: ArithOp, args: &[Value]) -> EvalResult {
    let interp = Interpreter::new();
    op.call(1, &interp, args)
}

// Success

#[test]
fn addition_folds_from_zero() {
    assert_eq!(call(ArithOp::Add, &nums(&[1.0, 2.0, 3.0])), Ok(Value::number(6.0)));
    assert_eq!(
        call(ArithOp::Add, &nums(&[1.0, 2.0, 3.0, 4.0])),
        Ok(Value::number(10.0))
    );
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(
        call(ArithOp::Sub, &nums(&[10.0, 1.0, 2.0])),
        Ok(Value::number(7.0))
    );
    assert_eq!(call(ArithOp::Sub, &nums(&[1.0, 5.0])), Ok(Value::number(-4.0)));
}

#[test]
fn multiplication_is_left_associative() {
    assert_eq!(
        call(ArithOp::Mul, &nums(&[2.0, 3.0, 4.0])),
        Ok(Value::number(24.0))
    );
}

#[test]
fn division_is_left_associative() {
    assert_eq!(
        call(ArithOp::Div, &nums(&[100.0, 2.0, 5.0])),
        Ok(Value::number(10.0))
    );
    assert_eq!(call(ArithOp::Div, &nums(&[1.0, 4.0])), Ok(Value::number(0.25)));
}

#[test]
fn addition_order_is_argument_order() {
    // ((0 + 1e16) + 1) + -1e16 loses the 1; a different order would not.
    let args = nums(&[1e16, 1.0, -1e16]);
    assert_eq!(call(ArithOp::Add, &args), Ok(Value::number(0.0)));
}

// Arity

#[test]
fn every_operator_declares_variadic() {
    for op in ArithOp::ALL {
        assert_eq!(op.arity(), Arity::Variadic, "{}", op.symbol());
    }
}

#[test]
fn fewer_than_two_arguments_fails() {
    for op in ArithOp::ALL {
        for args in [Vec::new(), nums(&[1.0])] {
            let err = call(op, &args).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Arity);
            assert_eq!(
                err.message,
                format!("'{}' requires at least two arguments", op.symbol())
            );
        }
    }
}

#[test]
fn arity_is_checked_before_types() {
    let err = call(ArithOp::Mul, &[Value::string("x")]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Arity);
}

// Types

#[test]
fn non_number_fails_for_every_operator() {
    for op in ArithOp::ALL {
        for position in 0..3 {
            let mut args = nums(&[1.0, 2.0, 3.0]);
            args[position] = Value::Bool(true);
            let err = call(op, &args).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Type);
            assert_eq!(
                err.message,
                format!("'{}' is only defined for numbers", op.symbol())
            );
        }
    }
}

#[test]
fn first_operand_is_type_checked_when_it_seeds() {
    let err = call(ArithOp::Sub, &[Value::Nil, Value::number(1.0)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "'-' is only defined for numbers");
}

#[test]
fn non_number_before_zero_divisor_reports_type() {
    let args = [Value::number(1.0), Value::string("a"), Value::number(0.0)];
    let err = call(ArithOp::Div, &args).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

// Division by zero

#[test]
fn zero_divisor_fails() {
    let err = call(ArithOp::Div, &nums(&[5.0, 0.0])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
    assert_eq!(err.message, "Division by zero");
}

#[test]
fn zero_divisor_stops_the_fold() {
    let err = call(ArithOp::Div, &nums(&[5.0, 0.0, 3.0])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);

    // Later non-numbers are never inspected.
    let args = [Value::number(5.0), Value::number(0.0), Value::Nil];
    let err = call(ArithOp::Div, &args).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
}

#[test]
fn zero_divisor_in_later_position() {
    let err = call(ArithOp::Div, &nums(&[10.0, 2.0, 0.0])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
}

#[test]
fn negative_zero_is_a_zero_divisor() {
    let err = call(ArithOp::Div, &nums(&[1.0, -0.0])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
}

#[test]
fn zero_dividend_is_fine() {
    assert_eq!(call(ArithOp::Div, &nums(&[0.0, 4.0])), Ok(Value::number(0.0)));
}

#[test]
fn nan_divisor_is_not_zero() {
    let result = call(ArithOp::Div, &nums(&[1.0, f64::NAN])).unwrap();
    assert!(result.as_number().unwrap().is_nan());
}

#[test]
fn zero_is_fine_for_other_operators() {
    assert_eq!(call(ArithOp::Mul, &nums(&[5.0, 0.0])), Ok(Value::number(0.0)));
    assert_eq!(call(ArithOp::Add, &nums(&[5.0, 0.0])), Ok(Value::number(5.0)));
    assert_eq!(call(ArithOp::Sub, &nums(&[5.0, 0.0])), Ok(Value::number(5.0)));
}

// Errors carry the call-site line

#[test]
fn errors_carry_line() {
    let interp = Interpreter::new();
    let err = DIV.call(42, &interp, &nums(&[1.0, 0.0])).unwrap_err();
    assert_eq!(err.line, 42);
    let err = ADD.call(7, &interp, &[]).unwrap_err();
    assert_eq!(err.line, 7);
}

// Descriptors

#[test]
fn symbols_and_seeds() {
    assert_eq!(ADD.name(), "+");
    assert_eq!(SUB.name(), "-");
    assert_eq!(MUL.name(), "*");
    assert_eq!(DIV.name(), "/");
    assert_eq!(ArithOp::Add.seed(), Seed::Identity(0.0));
    for op in [ArithOp::Sub, ArithOp::Mul, ArithOp::Div] {
        assert_eq!(op.seed(), Seed::FirstArgument);
    }
}

#[test]
fn arguments_are_not_mutated() {
    let args = nums(&[8.0, 2.0, 2.0]);
    let before = args.clone();
    let _ = call(ArithOp::Div, &args);
    assert_eq!(args, before);
}
