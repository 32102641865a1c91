/// ## Named unary function
///
/// A function key on the keypad: the callable, its label for the
/// transcript and the inputs it accepts.

#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    func: fn(f64) -> f64,
    domain: Domain,
}

/// Inputs a function accepts. Anything else is `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Any,
    NonNegative,
    Positive,
}

impl Domain {
    /// NaN is not rejected here; it flows through the function unchanged.
    pub fn admits(self, val: f64) -> bool {
        match self {
            Domain::Any => true,
            Domain::NonNegative => !(val < 0.0),
            Domain::Positive => !(val <= 0.0),
        }
    }
}

impl Function {
    pub fn new(name: &'static str, func: fn(f64) -> f64, domain: Domain) -> Function {
        Function { name, func, domain }
    }

    pub fn lookup(name: &str) -> Option<Function> {
        use Domain::*;
        let func = match name {
            "sin" => Function::new("sin", f64::sin, Any),
            "cos" => Function::new("cos", f64::cos, Any),
            "tan" => Function::new("tan", f64::tan, Any),
            "asin" => Function::new("asin", f64::asin, Any),
            "acos" => Function::new("acos", f64::acos, Any),
            "atan" => Function::new("atan", f64::atan, Any),
            "sqrt" => Function::new("sqrt", f64::sqrt, NonNegative),
            "exp" => Function::new("exp", f64::exp, Any),
            "ln" => Function::new("ln", f64::ln, Positive),
            "log" => Function::new("log", f64::log10, Positive),
            "abs" => Function::new("abs", f64::abs, Any),
            _ => return None,
        };
        Some(func)
    }

    pub fn names() -> &'static [&'static str] {
        &[
            "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "exp", "ln", "log", "abs",
        ]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Calls the function without checking the domain.
    pub fn call(&self, val: f64) -> f64 {
        (self.func)(val)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Function) -> bool {
        self.name == other.name && self.domain == other.domain
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function({}, {:?})", self.name, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in Function::names() {
            assert_eq!(Function::lookup(name).unwrap().name(), *name);
        }
        assert!(Function::lookup("cosh").is_none());
    }

    #[test]
    fn test_domains() {
        assert!(Domain::NonNegative.admits(0.0));
        assert!(!Domain::NonNegative.admits(-0.5));
        assert!(!Domain::Positive.admits(0.0));
        assert!(Domain::Positive.admits(1e-9));
        assert!(Domain::Any.admits(-1e9));
    }

    #[test]
    fn test_log_is_base_ten() {
        let log = Function::lookup("log").unwrap();
        assert!((log.call(1000.0) - 3.0).abs() < 1e-12);
        assert_eq!(log.domain(), Domain::Positive);
    }
}
