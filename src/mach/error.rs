/// ## Evaluation failure
///
/// Every failure is an ordinary return value. The code classifies it;
/// the message is optional detail for display.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error { code, message: "" }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Pointwise failures depend on the sampled value and leave a gap.
    /// Everything else is structural and fails at every column.
    pub fn is_pointwise(&self) -> bool {
        self.code == ErrorCode::Undefined
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Fewer operands than an operation needs, or nothing left at the end.
    Underflow,
    /// Division or modulo by zero, or a function outside its domain.
    Undefined,
    /// The stack grew past its limit.
    Overflow,
    /// A sentinel instruction reached the engine.
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self {
            Underflow => write!(f, "STACK UNDERFLOW"),
            Undefined => write!(f, "UNDEFINED"),
            Overflow => write!(f, "STACK OVERFLOW"),
            InternalError => write!(f, "INTERNAL ERROR"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}; {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}
