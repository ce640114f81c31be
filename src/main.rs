//! Command-line entry point.
//!
//! Reads line commands from stdin and redraws the browser on stdout after
//! every change, including hero rotations driven by the background timer.
//!
//! ```text
//! ┌──────────────┐  lines   ┌─────────────────────┐  frames  ┌────────┐
//! │ stdin reader │ ───────► │ main loop (Runtime) │ ───────► │ stdout │
//! └──────────────┘          └─────────────────────┘          └────────┘
//!                                      ▲
//!                                      │ RotationTick
//!                              ┌───────────────┐
//!                              │ rotation timer│
//!                              └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```text
//! marquee [--config=<path>] [--catalog_file=<path>] [--theme=<name>]
//!         [--theme_file=<path>] [--trace_level=<level>] [--rotation_interval_ms=<ms>]
//! ```
//!
//! Type `search <text>`, `genre <id>`, `sort rating|year|title`,
//! `page home|movies|tv|newsletter`, `open <id>`, `close` or `quit`.

#![allow(clippy::multiple_crate_versions)]

use crossbeam_channel::select;
use marquee::observability::init_tracing;
use marquee::ui::render;
use marquee::{initialize, parse_command, Config, Event, MarqueeError, Runtime};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Width used when `COLUMNS` is not exported by the shell.
const DEFAULT_COLUMNS: usize = 100;

/// Messages from the stdin reader thread.
enum Input {
    Line(String),
    Closed,
}

/// Whatever woke the main loop.
enum Next {
    Event(Event),
    Line(String),
    InputClosed,
    Disconnected,
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("marquee: {e}");
            return ExitCode::from(2);
        }
    };

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("marquee: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "marquee exited with an error");
            eprintln!("marquee: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parses `--key=value` flags into a map.
fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<BTreeMap<String, String>, MarqueeError> {
    args.map(|arg| {
        arg.strip_prefix("--")
            .and_then(|flag| flag.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .ok_or_else(|| MarqueeError::Config(format!("expected --key=value, got '{arg}'")))
    })
    .collect()
}

fn run(config: &Config) -> marquee::Result<()> {
    let state = initialize(config)?;
    let mut runtime = Runtime::new(state, config.rotation_interval())?;

    let (input_tx, input_rx) = crossbeam_channel::unbounded::<Input>();
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if input_tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            let _ = input_tx.send(Input::Closed);
        })?;

    let cols = terminal_columns();
    let mut status: Option<String> = None;
    draw(&runtime, cols, status.as_deref())?;

    while runtime.is_running() {
        let next = select! {
            recv(runtime.receiver()) -> event => event.map_or(Next::Disconnected, Next::Event),
            recv(input_rx) -> input => match input {
                Ok(Input::Line(line)) => Next::Line(line),
                Ok(Input::Closed) | Err(_) => Next::InputClosed,
            },
        };

        let (event, from_input) = match next {
            Next::Disconnected => break,
            Next::Event(event) => (Some(event), false),
            Next::InputClosed => (Some(Event::Quit), true),
            Next::Line(line) => match parse_command(&line) {
                Ok(event) => (event, true),
                Err(e) => {
                    status = Some(e.to_string());
                    draw(&runtime, cols, status.as_deref())?;
                    continue;
                }
            },
        };

        if from_input {
            status = None;
        }

        let should_render = match event {
            Some(event) => match runtime.dispatch(&event) {
                Ok(render) => render || from_input,
                Err(e) => {
                    status = Some(e.to_string());
                    true
                }
            },
            None => true,
        };

        if should_render && runtime.is_running() {
            draw(&runtime, cols, status.as_deref())?;
        }
    }

    tracing::info!("marquee exiting");
    Ok(())
}

fn draw(runtime: &Runtime, cols: usize, status: Option<&str>) -> io::Result<()> {
    let mut frame = render(runtime.state(), cols);
    if let Some(status) = status {
        frame.push_str(status);
        frame.push('\n');
    }
    frame.push_str("> ");

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse::<usize>().ok())
        .filter(|c| *c >= 40)
        .unwrap_or(DEFAULT_COLUMNS)
}
