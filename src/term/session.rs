use crate::config::Config;
use crate::mach::{BinaryOp, Error, Function, Instruction, Runtime, Vars};
use crate::plot::{
    trace, trace_at, Curve, Cursor, Edit, Equations, Keypad, Sampler, Slider, SliderPanel, Trace,
    Viewport,
};
use log::{debug, info};

/// What the front-end should do after a line is entered.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Redraw,
    Message(String),
    Trace(Trace),
    Quit,
}

/// Words the line editor can complete.
pub const KEYWORDS: &[&str] = &[
    "bs", "clear", "up", "down", "zoom+", "zoom-", "pan", "stick", "view", "set", "range", "min",
    "max", "reset", "trace", "snap", "cursor", "dup", "neg", "mod", "quit",
];

/// ## Calculator state
///
/// Everything one screen of the grapher shows, edited one key at a time.

pub struct Session {
    config: Config,
    runtime: Runtime,
    sampler: Sampler,
    view: Viewport,
    vars: Vars,
    sliders: SliderPanel,
    equations: Equations,
    keypad: Keypad,
    cursor: Cursor,
}

impl Default for Session {
    fn default() -> Session {
        Session::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Session {
        let mut vars = Vars::new();
        let sliders = SliderPanel::new(&mut vars);
        let equations = Equations::with_sine(&config.colors, &vars);
        Session {
            runtime: config.runtime(),
            sampler: Sampler::default(),
            view: config.viewport(),
            vars,
            sliders,
            equations,
            keypad: Keypad::new(),
            cursor: Cursor::default(),
            config,
        }
    }

    pub fn view(&self) -> &Viewport {
        &self.view
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn sliders(&self) -> &SliderPanel {
        &self.sliders
    }

    pub fn equations(&self) -> &Equations {
        &self.equations
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Transcript of the active equation, including any number being typed.
    pub fn transcript(&self) -> String {
        self.equations.active().transcript(self.keypad.entry())
    }

    /// Text of slot `index`. Only the active slot has a number in progress.
    pub fn slot_transcript(&self, index: usize) -> String {
        match self.equations.get(index) {
            Some(eq) if index == self.equations.active_index() => eq.transcript(self.keypad.entry()),
            Some(eq) => eq.transcript(None),
            None => String::new(),
        }
    }

    pub fn curves(&self) -> Vec<Curve> {
        self.equations
            .iter()
            .map(|eq| {
                self.sampler
                    .sample(&self.runtime, eq.instructions(), &self.view, &self.vars)
            })
            .collect()
    }

    pub fn interrupt(&mut self) {
        debug!("entry cancelled");
        self.keypad.reset();
    }

    pub fn enter(&mut self, line: &str) -> Event {
        let mut tokens = line.split_whitespace();
        let mut event = Event::Redraw;
        while let Some(token) = tokens.next() {
            event = match self.token(token, &mut tokens) {
                Ok(Event::Redraw) => continue,
                Ok(event) => event,
                Err(error) => Event::Message(format!("Error: {}", error)),
            };
            break;
        }
        event
    }

    fn token<'a, I>(&mut self, token: &str, args: &mut I) -> Result<Event, String>
    where
        I: Iterator<Item = &'a str>,
    {
        if let Some(inst) = self.instruction(token) {
            self.keypad.reset();
            self.add(inst)?;
            return Ok(Event::Redraw);
        }
        if Session::is_number(token) {
            self.number(token)?;
            return Ok(Event::Redraw);
        }
        match token {
            "quit" | "exit" => return Ok(Event::Quit),
            "bs" => {
                let edit = self.keypad.key(Keypad::BACKSPACE);
                self.edit(edit)?;
            }
            "neg" => {
                let edit = self.keypad.key(Keypad::SIGN);
                self.edit(edit)?;
            }
            "clear" => {
                self.equations.active_mut().clear();
                self.keypad.reset();
            }
            "up" => {
                self.keypad.reset();
                self.equations.prev();
            }
            "down" => {
                self.keypad.reset();
                self.equations.next();
            }
            "zoom+" => {
                self.view.zoom_in(self.config.zoom_factor);
            }
            "zoom-" => {
                self.view.zoom_out(self.config.zoom_factor);
            }
            "pan" => {
                let dx = Session::arg(args, "pan DX DY")?;
                let dy = Session::arg(args, "pan DX DY")?;
                self.view.pan(dx, dy);
            }
            "stick" => {
                let dx = Session::arg(args, "stick DX DY")?;
                let dy = Session::arg(args, "stick DX DY")?;
                self.view.pan_by_stick(dx, dy, self.config.pan_rate);
            }
            "view" => self.view = self.config.viewport(),
            "set" => {
                let name = Session::word(args, "set NAME VALUE")?;
                let value = Session::arg(args, "set NAME VALUE")?;
                find(&self.sliders, name)?.set(&mut self.vars, value);
            }
            "range" => {
                let name = Session::word(args, "range NAME MIN MAX")?;
                let min = Session::arg(args, "range NAME MIN MAX")?;
                let max = Session::arg(args, "range NAME MIN MAX")?;
                let value = find(&self.sliders, name)?.value(&self.vars);
                let slider = find_mut(&mut self.sliders, name)?;
                slider.set_range(min, max);
                slider.set(&mut self.vars, value);
            }
            "min" => {
                let name = Session::word(args, "min NAME")?;
                find_mut(&mut self.sliders, name)?.set_minimum(&self.vars);
            }
            "max" => {
                let name = Session::word(args, "max NAME")?;
                find_mut(&mut self.sliders, name)?.set_maximum(&self.vars);
            }
            "reset" => {
                let name = Session::word(args, "reset NAME")?;
                find_mut(&mut self.sliders, name)?.reset(&mut self.vars);
            }
            "cursor" => {
                let dx = Session::arg(args, "cursor DX DY")?;
                let dy = Session::arg(args, "cursor DX DY")?;
                self.cursor.nudge(dx, dy);
                return Ok(Event::Trace(self.trace_cursor(false)));
            }
            "trace" => {
                return Ok(Event::Trace(match args.next() {
                    Some(x) => match x.parse::<f64>() {
                        Ok(x) => trace_at(
                            &self.runtime,
                            self.equations.active().instructions(),
                            &self.vars,
                            x,
                        ),
                        Err(_) => return Err(format!("'{}' is not a number", x)),
                    },
                    None => self.trace_cursor(false),
                }));
            }
            "snap" => return Ok(Event::Trace(self.trace_cursor(true))),
            _ => return Err(format!("unknown key '{}'", token)),
        }
        Ok(Event::Redraw)
    }

    fn instruction(&self, token: &str) -> Option<Instruction> {
        let inst = match token {
            "+" => Instruction::Binary(BinaryOp::Add),
            "-" => Instruction::Binary(BinaryOp::Sub),
            "*" => Instruction::Binary(BinaryOp::Mul),
            "/" => Instruction::Binary(BinaryOp::Div),
            "mod" => Instruction::Binary(BinaryOp::Mod),
            "^" => Instruction::Binary(BinaryOp::Pow),
            "dup" => Instruction::Dup,
            _ => match Function::lookup(token) {
                Some(func) => Instruction::Function(func),
                None => Instruction::Push(self.vars.lookup(token)?),
            },
        };
        Some(inst)
    }

    fn add(&mut self, inst: Instruction) -> Result<(), String> {
        info!("Y{} += {}", self.equations.active_index() + 1, inst);
        self.equations
            .active_mut()
            .push(inst)
            .map_err(|e: Error| e.to_string())
    }

    fn edit(&mut self, edit: Edit) -> Result<(), String> {
        edit.apply(self.equations.active_mut())
            .map_err(|e| e.to_string())
    }

    /// A number token is typed as a fresh keypad entry.
    fn number(&mut self, token: &str) -> Result<(), String> {
        self.keypad.reset();
        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        self.keypad
            .type_str(digits, self.equations.active_mut())
            .map_err(|e| e.to_string())?;
        if negative {
            let edit = self.keypad.key(Keypad::SIGN);
            self.edit(edit)?;
        }
        Ok(())
    }

    fn is_number(token: &str) -> bool {
        let digits = token.strip_prefix('-').unwrap_or(token);
        !digits.is_empty()
            && digits.chars().any(|c| c.is_ascii_digit())
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.matches('.').count() <= 1
    }

    fn trace_cursor(&self, snap: bool) -> Trace {
        trace(
            &self.runtime,
            self.equations.active().instructions(),
            &self.view,
            &self.vars,
            &self.cursor,
            snap,
        )
    }

    fn word<'a, I>(args: &mut I, usage: &str) -> Result<&'a str, String>
    where
        I: Iterator<Item = &'a str>,
    {
        args.next().ok_or_else(|| format!("usage: {}", usage))
    }

    fn arg<'a, I>(args: &mut I, usage: &str) -> Result<f64, String>
    where
        I: Iterator<Item = &'a str>,
    {
        let word = Session::word(args, usage)?;
        word.parse::<f64>()
            .map_err(|_| format!("'{}' is not a number", word))
    }
}

fn find<'s>(sliders: &'s SliderPanel, name: &str) -> Result<&'s Slider, String> {
    sliders
        .find(name)
        .ok_or_else(|| format!("no slider named '{}'", name))
}

fn find_mut<'s>(sliders: &'s mut SliderPanel, name: &str) -> Result<&'s mut Slider, String> {
    sliders
        .find_mut(name)
        .ok_or_else(|| format!("no slider named '{}'", name))
}
