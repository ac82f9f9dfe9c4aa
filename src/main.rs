use std::io::{self, BufRead, Write};

use clap::Parser as ArgsParser;
use tally::{evaluate, interpreter::environment::Environment, Parser};

/// tally is an interactive calculator with arrays and lazy generators.
#[derive(ArgsParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parsed syntax tree instead of evaluating.
    #[arg(short, long)]
    debug: bool,

    /// Evaluate a single expression and exit instead of reading stdin.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut env = Environment::new();
    let parser = Parser::new();

    if let Some(expression) = args.expression {
        run_line(&parser, &mut env, &expression, args.debug);
        return;
    }

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if !line.is_empty() {
            run_line(&parser, &mut env, line, args.debug);
        }
        prompt();
    }
}

/// Parses and evaluates one input line, printing the result or the error.
/// Errors never end the session.
fn run_line(parser: &Parser, env: &mut Environment, line: &str, debug: bool) {
    let expr = match parser.parse(env, line) {
        Ok(expr) => expr,
        Err(e) => {
            println!("syntax error: {e}\n");
            return;
        },
    };

    if debug {
        println!("{}\n", expr.stringify(0));
        return;
    }

    match evaluate(env, &expr) {
        Ok(value) => println!("= {}\n", value.stringify()),
        Err(e) => println!("error: {e}\n"),
    }
}

fn prompt() {
    print!("? ");
    let _ = io::stdout().flush();
}
