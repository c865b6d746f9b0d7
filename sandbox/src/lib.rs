//! Runs snippet source in an embedded rhai interpreter and captures its
//! output as a sequence of text lines.
//!
//! The snippet gets two logging entry points: rhai's own `print` and a
//! console-style `log(...)` that stringifies and space-joins its arguments.
//! Failures never propagate; they become trailing diagnostic lines in the
//! output (`Syntax Error: ...` for parse failures, `Error: ...` or
//! `Runtime Error: ...` for evaluation failures, each followed by
//! `At line <n>` when the interpreter reports a position).

use std::cell::RefCell;
use std::rc::Rc;

use rhai::{Dynamic, Engine};

/// Evaluation is capped so a runaway snippet terminates with a diagnostic
/// instead of stalling the caller.
const MAX_OPERATIONS: u64 = 500_000;

/// A diagnostic position the editor can mark on the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub line: usize,
    pub message: String,
}

/// Everything one invocation produced: output lines in emission order
/// (diagnostics last) and an optional source marker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOutput {
    pub lines: Vec<String>,
    pub marker: Option<Marker>,
}

/// Editor entry point: runtime failures are reported as `Error: ...` and a
/// marker is returned for the editor to place on the offending line.
pub fn run_snippet(source: &str) -> RunOutput {
    eval(source, "Error")
}

/// Standalone entry point: same execution, but runtime failures are reported
/// as `Runtime Error: ...` and only the output lines are returned.
pub fn execute_code(source: &str) -> Vec<String> {
    eval(source, "Runtime Error").lines
}

fn eval(source: &str, runtime_prefix: &str) -> RunOutput {
    let logs: Rc<RefCell<Vec<String>>> = Rc::default();
    let engine = build_engine(&logs);

    let mut output = RunOutput::default();

    let ast = match engine.compile(source) {
        Ok(ast) => ast,
        Err(err) => {
            output.lines.push(format!("Syntax Error: {}", err.0));
            if let Some(line) = err.1.line() {
                output.lines.push(format!("At line {line}"));
                output.marker = Some(Marker {
                    line,
                    message: err.0.to_string(),
                });
            }
            return output;
        }
    };

    let result = engine.run_ast(&ast);
    output.lines = logs.borrow().clone();

    if let Err(mut err) = result {
        let position = err.take_position();
        let message = err.to_string();
        output.lines.push(format!("{runtime_prefix}: {message}"));
        if let Some(line) = position.line() {
            output.lines.push(format!("At line {line}"));
            output.marker = Some(Marker { line, message });
        }
    }

    output
}

fn build_engine(logs: &Rc<RefCell<Vec<String>>>) -> Engine {
    let mut engine = Engine::new();
    engine.set_max_operations(MAX_OPERATIONS);

    let sink = logs.clone();
    engine.on_print(move |text| sink.borrow_mut().push(text.to_string()));

    let sink = logs.clone();
    engine.register_fn("log", move |a: Dynamic| {
        sink.borrow_mut().push(a.to_string());
    });
    let sink = logs.clone();
    engine.register_fn("log", move |a: Dynamic, b: Dynamic| {
        sink.borrow_mut().push(format!("{a} {b}"));
    });
    let sink = logs.clone();
    engine.register_fn("log", move |a: Dynamic, b: Dynamic, c: Dynamic| {
        sink.borrow_mut().push(format!("{a} {b} {c}"));
    });
    let sink = logs.clone();
    engine.register_fn(
        "log",
        move |a: Dynamic, b: Dynamic, c: Dynamic, d: Dynamic| {
            sink.borrow_mut().push(format!("{a} {b} {c} {d}"));
        },
    );

    engine
}
