extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::config::{Config, CONFIG_ENV};
use crate::mach::Function;
use ansi_term::{Colour, Style};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod canvas;
mod session;

pub use canvas::Canvas;
pub use session::{Event, Session, KEYWORDS};

/// Lines kept below the plot for transcripts, sliders and the prompt.
const TEXT_LINES: usize = 8;

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn load_config() -> Config {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => match Config::load(Path::new(&path)) {
            Ok(config) => {
                info!("configuration loaded from {}", path);
                config
            }
            Err(error) => {
                warn!("{}: {}; using defaults", path, error);
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut session = Session::new(load_config());
    let command = Interface::new("grapher")?;
    command.set_report_signal(Signal::Interrupt, true);
    command.set_completer(Arc::new(KeyCompleter));
    command.write_fmt(format_args!("{}", frame(&session)))?;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            session.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        let slot = session.equations().active_index() + 1;
        command.set_prompt(&format!("Y{}> ", slot))?;
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                session.interrupt();
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match session.enter(&string) {
            Event::Quit => break,
            Event::Redraw => {
                command.write_fmt(format_args!("{}", frame(&session)))?;
            }
            Event::Message(s) => {
                command.write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))?;
            }
            Event::Trace(t) => {
                let y = match t.y {
                    Some(y) => format!("Y = {:.5}", y),
                    None => "Y undefined".to_string(),
                };
                command.write_fmt(format_args!("X = {:.5}  {}\n", t.x, y))?;
            }
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

fn terminal_size() -> (usize, usize) {
    match mortal::Terminal::new().and_then(|term| term.size()) {
        Ok(size) => (size.columns, size.lines),
        Err(error) => {
            debug!("terminal size unavailable: {}", error);
            (80, 24)
        }
    }
}

/// Plot, then one line per slot, the sliders and the viewport bounds.
fn frame(session: &Session) -> String {
    let (columns, lines) = terminal_size();
    let mut canvas = Canvas::new(columns, lines.saturating_sub(TEXT_LINES).max(4));
    canvas.axes(session.view());
    let curves = session.curves();
    for (curve, eq) in curves.iter().zip(session.equations().iter()) {
        canvas.curve(curve, eq.color());
    }
    let mut out = canvas.render();

    let active = session.equations().active_index();
    for (index, eq) in session.equations().iter().enumerate() {
        let [r, g, b] = eq.color();
        let marker = if index == active { '>' } else { ' ' };
        let text = format!("{}Y{} = {}", marker, index + 1, session.slot_transcript(index));
        out.push_str(&format!("{}\n", Colour::RGB(r, g, b).paint(text)));
    }
    if let Some(error) = curves.get(active).and_then(|c| c.error()) {
        out.push_str(&format!(
            "{}\n",
            Style::new().bold().paint(format!("Error: {}", error))
        ));
    }
    let sliders: Vec<String> = session
        .sliders()
        .iter()
        .map(|s| {
            format!(
                "{}={:.5} [{}, {}]",
                s.var(),
                s.value(session.vars()),
                s.minimum(),
                s.maximum()
            )
        })
        .collect();
    out.push_str(&format!("{}\n", sliders.join("  ")));
    let view = session.view();
    out.push_str(&format!(
        "x [{:.4}, {:.4}]  y [{:.4}, {:.4}]\n",
        view.xmin, view.xmax, view.ymin, view.ymax
    ));
    out
}

struct KeyCompleter;

impl<Term: Terminal> Completer<Term> for KeyCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let comp_list: Vec<Completion> = Function::names()
            .iter()
            .chain(KEYWORDS.iter())
            .filter(|k| k.starts_with(word))
            .map(|k| Completion::simple(k.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}
