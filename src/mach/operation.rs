use super::{BinaryOp, Error, Function};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic on stack values
///
/// `x` is the operand popped first (pushed last), `y` the one beneath it.

pub struct Operation {}

impl Operation {
    pub fn binary(op: BinaryOp, x: f64, y: f64) -> Result<f64> {
        use BinaryOp::*;
        match op {
            Add => Operation::sum(x, y),
            Sub => Operation::subtract(x, y),
            Mul => Operation::multiply(x, y),
            Div => Operation::divide(x, y),
            Mod => Operation::modulo(x, y),
            Pow => Operation::power(x, y),
        }
    }

    pub fn negate(val: f64) -> f64 {
        -val
    }

    pub fn sum(x: f64, y: f64) -> Result<f64> {
        Ok(x + y)
    }

    pub fn subtract(x: f64, y: f64) -> Result<f64> {
        Ok(x - y)
    }

    pub fn multiply(x: f64, y: f64) -> Result<f64> {
        Ok(x * y)
    }

    pub fn divide(x: f64, y: f64) -> Result<f64> {
        if y == 0.0 {
            Err(error!(Undefined; "DIVISION BY ZERO"))
        } else {
            Ok(x / y)
        }
    }

    pub fn modulo(x: f64, y: f64) -> Result<f64> {
        if y == 0.0 {
            Err(error!(Undefined; "MODULO BY ZERO"))
        } else {
            Ok(x % y)
        }
    }

    /// Unchecked: a negative base with a fractional exponent gives NaN.
    pub fn power(x: f64, y: f64) -> Result<f64> {
        Ok(x.powf(y))
    }

    pub fn function(func: &Function, val: f64) -> Result<f64> {
        if func.domain().admits(val) {
            Ok(func.call(val))
        } else {
            Err(error!(Undefined; "OUTSIDE FUNCTION DOMAIN"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::ErrorCode;

    #[test]
    fn test_operand_order() {
        assert_eq!(Operation::binary(BinaryOp::Sub, 7.0, 2.0).unwrap(), 5.0);
        assert_eq!(Operation::binary(BinaryOp::Div, 8.0, 2.0).unwrap(), 4.0);
        assert_eq!(Operation::binary(BinaryOp::Pow, 2.0, 10.0).unwrap(), 1024.0);
    }

    #[test]
    fn test_modulo_truncates() {
        assert_eq!(Operation::modulo(-7.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operation::modulo(7.5, 2.0).unwrap(), 1.5);
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(
            Operation::divide(1.0, 0.0).unwrap_err().code(),
            ErrorCode::Undefined
        );
        assert_eq!(
            Operation::modulo(1.0, -0.0).unwrap_err().code(),
            ErrorCode::Undefined
        );
    }

    #[test]
    fn test_power_is_permissive() {
        assert!(Operation::power(-8.0, 0.5).unwrap().is_nan());
        assert!(Operation::power(0.0, -1.0).unwrap().is_infinite());
    }
}
