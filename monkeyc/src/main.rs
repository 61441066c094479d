mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use monkey_core::{
    eval::{interpret, interpret_from_stream},
    object::prelude::Object,
};

use cli::{print_evaluated, print_running};

#[derive(Parser)]
#[command(about = "An interpreter for the Monkey programming language")]
enum Command {
    /// Evaluates a source file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Do not print the final value
        #[arg(short, long, default_value_t = false)]
        no_output: bool,
        /// Print ast before evaluating
        #[arg(long, default_value_t = false)]
        print_ast: bool,
        /// Feed the parser from a buffered character stream
        /// instead of reading the whole file up front
        #[arg(long, default_value_t = false)]
        stream: bool,
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl,
}

fn main() {
    match Command::parse() {
        Command::Run { path, no_output, print_ast, stream } => {
            let buf_writer = cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_running(&path.to_string_lossy());
            let start = std::time::Instant::now();

            let result = if stream {
                interpret_from_stream(&path)
            } else {
                interpret(&path)
            };

            match result {
                Ok(evaluated) => {
                    if print_ast {
                        println!("{:#?}", evaluated.program);
                    }

                    if !no_output && evaluated.object != Object::Null {
                        println!("{}", evaluated.object);
                    }
                },
                Err(err) => {
                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing diagnostics to stderr");
                },
            }

            print_evaluated(std::time::Instant::now() - start);
        },
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        },
    }
}
