use crate::error;
use crate::mach::{transcript, Error, Function, Instruction, Vars};

type Result<T> = std::result::Result<T, Error>;

/// Number of equation slots.
pub const SLOT_COUNT: usize = 4;

/// Plot colours of the slots, in order.
pub const SLOT_COLORS: [[u8; 3]; SLOT_COUNT] = [
    [0x00, 0x00, 0xC0],
    [0x00, 0x80, 0x00],
    [0xD5, 0x00, 0xDD],
    [0xD2, 0x94, 0x00],
];

/// ## Equation slot
///
/// One reverse Polish sequence and the colour it is drawn in.

#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    instructions: Vec<Instruction>,
    color: [u8; 3],
}

impl Equation {
    pub fn new(color: [u8; 3]) -> Equation {
        Equation {
            instructions: vec![],
            color,
        }
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn push(&mut self, instruction: Instruction) -> Result<()> {
        if instruction.is_noop() {
            return Err(error!(InternalError; "NOOP CANNOT BE STORED"));
        }
        self.instructions.push(instruction);
        Ok(())
    }

    /// Replaces the last instruction, or appends when empty.
    pub fn replace_last(&mut self, instruction: Instruction) -> Result<()> {
        if instruction.is_noop() {
            return Err(error!(InternalError; "NOOP CANNOT BE STORED"));
        }
        match self.instructions.last_mut() {
            Some(last) => *last = instruction,
            None => self.instructions.push(instruction),
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Instruction> {
        self.instructions.pop()
    }

    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Display text. A numeric entry still being typed replaces the
    /// literal it has produced so far.
    pub fn transcript(&self, pending: Option<&str>) -> String {
        match pending {
            Some(entry) if !self.instructions.is_empty() => {
                let done = &self.instructions[..self.instructions.len() - 1];
                if done.is_empty() {
                    entry.to_string()
                } else {
                    format!("{} {}", transcript(done), entry)
                }
            }
            _ => transcript(&self.instructions),
        }
    }
}

/// ## Equation slots
///
/// Exactly `SLOT_COUNT` slots, one of them active for input and tracing.

#[derive(Debug, Clone, PartialEq)]
pub struct Equations {
    slots: Vec<Equation>,
    active: usize,
}

impl Equations {
    pub fn new(colors: &[[u8; 3]; SLOT_COUNT]) -> Equations {
        Equations {
            slots: colors.iter().map(|c| Equation::new(*c)).collect(),
            active: 0,
        }
    }

    /// Fresh slots with `x sin` in the first one.
    pub fn with_sine(colors: &[[u8; 3]; SLOT_COUNT], vars: &Vars) -> Equations {
        let mut equations = Equations::new(colors);
        equations.slots[0].instructions = vec![Instruction::Push(vars.free())];
        if let Some(sin) = Function::lookup("sin") {
            equations.slots[0].instructions.push(Instruction::Function(sin));
        }
        equations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Equation> {
        self.slots.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Equation> {
        self.slots.get(index)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Equation {
        &self.slots[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Equation {
        &mut self.slots[self.active]
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % SLOT_COUNT;
    }

    pub fn prev(&mut self) {
        self.active = (self.active + SLOT_COUNT - 1) % SLOT_COUNT;
    }
}

impl Default for Equations {
    fn default() -> Equations {
        Equations::new(&SLOT_COLORS)
    }
}
