use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use monkey::{
    ast::{Program, Statement},
    error::ParseErrors,
    interpreter::{
        evaluator::core::{EvalConfig, Evaluator, MAX_CALL_DEPTH},
        object::{
            core::Object,
            environment::{Env, Environment},
        },
    },
    parse,
};

const PROMPT: &str = ">> ";
const CONTINUATION_PROMPT: &str = ".. ";

/// monkey runs programs written in the Monkey language. Without a file or an
/// inline program it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run.
    file: Option<PathBuf>,

    /// Runs the given source text instead of a file and prints its value.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "file")]
    eval: Option<String>,

    /// Maximum number of nested function calls before evaluation fails.
    #[arg(long, value_name = "N", default_value_t = MAX_CALL_DEPTH)]
    max_depth: usize,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let mut evaluator = Evaluator::with_config(EvalConfig { max_call_depth: args.max_depth });
    let env = Environment::root();

    if let Some(source) = args.eval {
        return run_source(&source, &env, &mut evaluator, true);
    }

    if let Some(path) = args.file {
        let Ok(source) = fs::read_to_string(&path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        return run_source(&source, &env, &mut evaluator, false);
    }

    match repl(&env, &mut evaluator) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

/// Runs a whole program, reporting diagnostics and runtime errors on stderr.
fn run_source(source: &str, env: &Env, evaluator: &mut Evaluator, print_result: bool) -> ExitCode {
    let (program, errors) = parse(source);

    if !errors.is_empty() {
        eprintln!("{}", ParseErrors(errors));
        return ExitCode::FAILURE;
    }

    match evaluator.eval(&program, env) {
        Object::Error(message) => {
            eprintln!("ERROR: {message}");
            ExitCode::FAILURE
        },
        value => {
            if print_result {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
    }
}

/// Reads, evaluates and prints until end of input.
///
/// Lines are buffered while `{` outnumber `}` so that functions can span
/// several lines. All inputs share one environment.
fn repl(env: &Env, evaluator: &mut Evaluator) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION_PROMPT };
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }
        buffer.push_str(&line);

        if open_braces(&buffer) > 0 {
            continue;
        }

        let source = std::mem::take(&mut buffer);
        let (program, errors) = parse(&source);

        if !errors.is_empty() {
            writeln!(stdout, "{}", ParseErrors(errors))?;
            continue;
        }

        let value = evaluator.eval(&program, env);
        if value.is_error() || prints_value(&program) {
            writeln!(stdout, "{value}")?;
        }
    }
}

/// How many more `{` than `}` the source contains.
fn open_braces(source: &str) -> isize {
    source.chars().fold(0, |depth, c| match c {
                      '{' => depth + 1,
                      '}' => depth - 1,
                      _ => depth,
                  })
}

/// Whether the session should echo the value of `program`.
///
/// Programs ending in a binding are silent unless they fail.
fn prints_value(program: &Program) -> bool {
    !matches!(program.statements.last(), None | Some(Statement::Let { .. }))
}
