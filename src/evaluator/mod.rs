mod builtins;
mod environment;
mod expr;

use std::cell::RefCell;
use std::rc::Rc;

pub use environment::Environment;

use crate::prelude::*;

/// Tree-walking evaluator. Holds the currently active environment; function
/// application swaps in a fresh child frame and restores the old one.
pub struct Evaluator {
    environment: Rc<RefCell<Environment>>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            environment: Environment::new().as_rc(),
        }
    }

    pub fn eval_program(&mut self, program: &Program) -> Object {
        let mut result = Object::Null;

        for statement in &program.statements {
            match self.eval_statement(statement) {
                Object::ReturnValue(value) => return *value,
                error @ Object::Error(_) => return error,
                object => result = object,
            }
        }

        result
    }

    fn eval_statement(&mut self, statement: &Stmt) -> Object {
        match statement {
            Stmt::Let { name, value, .. } => {
                let value = self.eval_expression(value);
                if is_error(&value) {
                    return value;
                }

                self.environment.borrow_mut().define(&name.name, value);
                Object::Null
            }
            Stmt::Return { value, .. } => {
                let value = self.eval_expression(value);
                if is_error(&value) {
                    return value;
                }

                Object::ReturnValue(Box::new(value))
            }
            Stmt::Expression { expr } => self.eval_expression(expr),
        }
    }

    /// Unlike `eval_program`, a block hands `ReturnValue` back unopened so
    /// that a `return` nested in an `if` escapes every enclosing block and
    /// is unwrapped once, at the function call.
    fn eval_block(&mut self, block: &Block) -> Object {
        let mut result = Object::Null;

        for statement in &block.statements {
            result = self.eval_statement(statement);
            if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
                return result;
            }
        }

        result
    }
}

fn is_error(object: &Object) -> bool {
    matches!(object, Object::Error(_))
}
