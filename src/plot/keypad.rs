use super::Equation;
use crate::mach::{Error, Instruction};

type Result<T> = std::result::Result<T, Error>;

/// What a key press does to the active equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Push(Instruction),
    ReplaceLast(Instruction),
    PopLast,
    None,
}

impl Edit {
    pub fn apply(self, equation: &mut Equation) -> Result<()> {
        match self {
            Edit::Push(inst) => equation.push(inst),
            Edit::ReplaceLast(inst) => equation.replace_last(inst),
            Edit::PopLast => {
                equation.pop();
                Ok(())
            }
            Edit::None => Ok(()),
        }
    }
}

/// ## Numeric keypad
///
/// Digits typed in a row build one literal. The literal is pushed on the
/// first digit and replaced on each following one.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keypad {
    entry: String,
    active: bool,
}

impl Keypad {
    pub const BACKSPACE: char = '\u{8}';
    pub const SIGN: char = '-';

    pub fn new() -> Keypad {
        Keypad::default()
    }

    pub fn entry_in_progress(&self) -> bool {
        self.active
    }

    pub fn entry(&self) -> Option<&str> {
        if self.active {
            Some(&self.entry)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.entry.clear();
        self.active = false;
    }

    pub fn key(&mut self, key: char) -> Edit {
        match key {
            '0'..='9' => self.digit(key),
            '.' => {
                if self.entry.contains('.') {
                    Edit::None
                } else {
                    self.digit(key)
                }
            }
            Keypad::SIGN => {
                if self.active {
                    if self.entry.starts_with('-') {
                        self.entry.remove(0);
                    } else {
                        self.entry.insert(0, '-');
                    }
                    Edit::ReplaceLast(self.literal())
                } else {
                    Edit::Push(Instruction::Neg)
                }
            }
            Keypad::BACKSPACE => {
                if !self.active {
                    return Edit::PopLast;
                }
                self.entry.pop();
                if self.entry.is_empty() || self.entry == "-" {
                    self.reset();
                    Edit::PopLast
                } else {
                    Edit::ReplaceLast(self.literal())
                }
            }
            _ => Edit::None,
        }
    }

    /// Feeds every character of `keys` and applies the edits in order.
    pub fn type_str(&mut self, keys: &str, equation: &mut Equation) -> Result<()> {
        for key in keys.chars() {
            self.key(key).apply(equation)?;
        }
        Ok(())
    }

    fn digit(&mut self, key: char) -> Edit {
        self.entry.push(key);
        if self.active {
            Edit::ReplaceLast(self.literal())
        } else {
            self.active = true;
            Edit::Push(self.literal())
        }
    }

    fn literal(&self) -> Instruction {
        let val = match self.entry.as_str() {
            "." | "-." | "-" => 0.0,
            s => s.parse::<f64>().unwrap_or(0.0),
        };
        Instruction::Literal(val)
    }
}
