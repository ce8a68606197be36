#![allow(clippy::new_without_default)]
mod ast;
mod evaluator;
mod lexer;
mod object;
mod parser;
mod token;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::evaluator::*;
    pub use crate::lexer::*;
    pub use crate::object::*;
    pub use crate::parser::*;
    pub use crate::token::*;
}

use std::io::Write;

use prelude::{Evaluator, Lexer, Object, Parser};

/// Driver tying the pipeline together. One evaluator (and so one global
/// environment) lives for the whole session, which is what lets REPL
/// bindings survive from line to line.
pub struct Monkey {
    /// Value produced by the most recent `run`; `None` when parse errors
    /// kept evaluation from happening.
    pub last_result: Option<Object>,
    evaluator: Evaluator,
}

impl Monkey {
    pub fn new() -> Self {
        Self {
            last_result: None,
            evaluator: Evaluator::new(),
        }
    }

    pub fn run_file(&mut self, filename: &str) -> Result<(), anyhow::Error> {
        let content = std::fs::read_to_string(filename)?;
        self.run(content.as_ref())?;

        // Scripts speak through `puts`; only runtime errors are surfaced.
        if let Some(result @ Object::Error(_)) = &self.last_result {
            eprintln!("{}", result.inspect());
        }

        Ok(())
    }

    pub fn run_prompt(&mut self) -> Result<(), anyhow::Error> {
        let reader = std::io::stdin();

        loop {
            print!(">> ");
            std::io::stdout().flush().expect("failed to flush stdout");

            let mut line = String::new();
            let n = reader.read_line(&mut line)?;
            if n == 0 {
                return Ok(());
            }

            self.run(line.trim_end())?;
            if let Some(result) = &self.last_result {
                if !matches!(result, Object::Null) {
                    println!("{}", result.inspect());
                }
            }
        }
    }

    /// Parse errors go to stderr and skip evaluation; otherwise the
    /// evaluated value lands in `last_result` for the caller to read.
    pub fn run(&mut self, input: &str) -> Result<(), anyhow::Error> {
        self.last_result = None;

        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                eprintln!("\t{}", error);
            }
            return Ok(());
        }

        self.last_result = Some(self.evaluator.eval_program(&program));
        Ok(())
    }
}
