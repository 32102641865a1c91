use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(limit: usize) -> Stack<T> {
        Stack { limit, vec: vec![] }
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.limit {
            Err(error!(Overflow))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        error!(Underflow)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Result<&mut T> {
        match self.vec.last_mut() {
            Some(v) => Ok(v),
            None => Err(error!(Underflow)),
        }
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops the top two values, returned in push order.
    /// Leaves the stack untouched when there are fewer than two.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
