//! `sprig run` and `sprig eval`.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use sprig_compile::{Program, Runtime};
use sprig_eval::{Arguments, Binder, EvalError, EvalResult, Function, Value};
use sprig_tasks::{Actions, Completion};
use tracing::debug;

use super::{read_file, RunOptions};

/// The runtime every CLI program runs against: the keywords plus `print`.
pub fn host_runtime() -> Runtime<()> {
    Runtime::builder().bind("print", Function::new(print)).build()
}

/// `print(v, ...)`: write the arguments to stdout, separated by spaces.
fn print(_: &(), _: &mut Binder<()>, args: &Arguments<()>) -> EvalResult<()> {
    write_line(&mut std::io::stdout().lock(), args)
}

/// Write `args` as one line. A failed write is a program error.
pub(crate) fn write_line(out: &mut impl Write, args: &Arguments<()>) -> EvalResult<()> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{line}").map_err(|e| EvalError::new(format!("print: {e}")))?;
    Ok(Value::Null)
}

/// Run a program given as text, printing its value unless it is null.
pub fn eval_source(source: &str) -> i32 {
    match host_runtime().run(&(), source) {
        Ok(value) => {
            report_value(&value);
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

type Outcome = Result<Value<()>, String>;

/// Compile every file, then run the programs as one batch of actions.
pub fn run_files(options: &RunOptions) -> i32 {
    let runtime = host_runtime();
    let mut programs: Vec<(String, Program<()>)> = Vec::with_capacity(options.files.len());
    let mut failed = false;
    for path in &options.files {
        let Some(source) = read_file(path) else {
            failed = true;
            continue;
        };
        match runtime.compile(&source) {
            Ok(program) => programs.push((path.clone(), program)),
            Err(err) => {
                eprintln!("{path}: {err}");
                failed = true;
            }
        }
    }
    if failed {
        return 1;
    }

    let outcomes: Arc<Mutex<Vec<Option<Outcome>>>> =
        Arc::new(Mutex::new(vec![None; programs.len()]));
    let actions: Actions = programs
        .iter()
        .enumerate()
        .map(|(index, (_, program))| {
            let program = program.clone();
            let outcomes = Arc::clone(&outcomes);
            move || {
                let outcome = program.run(&()).map_err(|e| e.to_string());
                outcomes.lock()[index] = Some(outcome);
            }
        })
        .collect();

    debug!(
        programs = actions.len(),
        parallel = options.parallel,
        "running programs"
    );
    let completion = match (options.parallel, options.timeout) {
        (false, None) => {
            actions.execute_sequentially_blocked();
            Completion::Finished
        }
        (true, None) => {
            actions.execute_parallel_blocked();
            Completion::Finished
        }
        (false, Some(timeout)) => actions.execute_sequentially_blocked_for(timeout),
        (true, Some(timeout)) => actions.execute_parallel_blocked_for(timeout),
    };

    let outcomes = outcomes.lock();
    let mut code = 0;
    for ((path, _), outcome) in programs.iter().zip(outcomes.iter()) {
        match outcome {
            Some(Ok(value)) => report_value(value),
            Some(Err(message)) => {
                eprintln!("{path}: error: {message}");
                code = 1;
            }
            None => {
                eprintln!("{path}: did not finish in time");
                code = 1;
            }
        }
    }
    if completion == Completion::TimedOut {
        code = 1;
    }
    code
}

fn report_value(value: &Value<()>) {
    if !value.is_null() {
        println!("{value}");
    }
}
