use std::collections::HashMap;
use std::rc::Rc;

use super::{builtins, is_error};
use crate::prelude::*;

impl Evaluator {
    pub fn eval_expression(&mut self, expr: &Expr) -> Object {
        match expr {
            Expr::IntegerLiteral { value, .. } => Object::Integer(*value),
            Expr::BooleanLiteral { value, .. } => Object::Boolean(*value),
            Expr::StringLiteral { value, .. } => Object::String(value.clone()),
            Expr::Identifier(identifier) => self.eval_identifier(identifier),
            Expr::Prefix { operator, right } => {
                let right = self.eval_expression(right);
                if is_error(&right) {
                    return right;
                }

                eval_prefix_expression(operator, right)
            }
            Expr::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left);
                if is_error(&left) {
                    return left;
                }

                let right = self.eval_expression(right);
                if is_error(&right) {
                    return right;
                }

                eval_infix_expression(operator, left, right)
            }
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => self.eval_if_expression(condition, consequence, alternative.as_ref()),
            Expr::FunctionLiteral {
                parameters, body, ..
            } => Object::Function(Rc::new(Function {
                parameters: parameters.clone(),
                body: body.clone(),
                env: self.environment.clone(),
            })),
            Expr::Call {
                callee, arguments, ..
            } => self.eval_call_expression(callee, arguments),
            Expr::ArrayLiteral { elements, .. } => match self.eval_expressions(elements) {
                Ok(elements) => Object::Array(elements),
                Err(error) => error,
            },
            Expr::HashLiteral { pairs, .. } => self.eval_hash_literal(pairs),
            Expr::Index { left, index, .. } => {
                let left = self.eval_expression(left);
                if is_error(&left) {
                    return left;
                }

                let index = self.eval_expression(index);
                if is_error(&index) {
                    return index;
                }

                eval_index_expression(left, index)
            }
        }
    }

    fn eval_identifier(&mut self, identifier: &Identifier) -> Object {
        if let Some(value) = self.environment.borrow().get(&identifier.name) {
            return value;
        }

        if let Some(builtin) = builtins::lookup(&identifier.name) {
            return builtin;
        }

        Object::Error(format!("identifier not found: {}", identifier.name))
    }

    fn eval_if_expression(
        &mut self,
        condition: &Expr,
        consequence: &Block,
        alternative: Option<&Block>,
    ) -> Object {
        let condition = self.eval_expression(condition);
        if is_error(&condition) {
            return condition;
        }

        if is_truthy(&condition) {
            self.eval_block(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative)
        } else {
            Object::Null
        }
    }

    fn eval_call_expression(&mut self, callee: &Expr, arguments: &[Expr]) -> Object {
        let callee = self.eval_expression(callee);
        if is_error(&callee) {
            return callee;
        }

        let arguments = match self.eval_expressions(arguments) {
            Ok(arguments) => arguments,
            Err(error) => return error,
        };

        self.apply_function(callee, arguments)
    }

    /// Evaluates left to right; the first error aborts the whole list.
    fn eval_expressions(&mut self, expressions: &[Expr]) -> Result<Vec<Object>, Object> {
        let mut results = Vec::with_capacity(expressions.len());

        for expression in expressions {
            let value = self.eval_expression(expression);
            if is_error(&value) {
                return Err(value);
            }
            results.push(value);
        }

        Ok(results)
    }

    fn apply_function(&mut self, callee: Object, arguments: Vec<Object>) -> Object {
        match callee {
            Object::Function(function) => {
                if function.parameters.len() != arguments.len() {
                    return Object::Error(format!(
                        "wrong number of arguments. got={}, want={}",
                        arguments.len(),
                        function.parameters.len()
                    ));
                }

                // The call frame extends the environment captured at the
                // function's definition, never the caller's.
                let mut frame = Environment::new().with_enclosing(function.env.clone());
                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    frame.define(&parameter.name, argument);
                }

                let previous = std::mem::replace(&mut self.environment, frame.as_rc());
                let result = self.eval_block(&function.body);
                self.environment = previous;

                match result {
                    Object::ReturnValue(value) => *value,
                    other => other,
                }
            }
            Object::Builtin(builtin) => (builtin.func)(&arguments),
            other => Object::Error(format!("not a function: {}", other.type_name())),
        }
    }

    fn eval_hash_literal(&mut self, pairs: &[(Expr, Expr)]) -> Object {
        let mut evaluated = HashMap::new();

        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr);
            if is_error(&key) {
                return key;
            }

            let hash_key = match key.hash_key() {
                Some(hash_key) => hash_key,
                None => {
                    return Object::Error(format!("unusable as hash key: {}", key.type_name()))
                }
            };

            let value = self.eval_expression(value_expr);
            if is_error(&value) {
                return value;
            }

            evaluated.insert(hash_key, HashPair { key, value });
        }

        Object::Hash(evaluated)
    }
}

fn is_truthy(object: &Object) -> bool {
    !matches!(object, Object::Null | Object::Boolean(false))
}

fn eval_prefix_expression(operator: &Token, right: Object) -> Object {
    match operator.token_type {
        TokenType::Bang => Object::Boolean(!is_truthy(&right)),
        TokenType::Minus => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            other => Object::Error(format!(
                "unknown operator: {}{}",
                operator.literal,
                other.type_name()
            )),
        },
        _ => Object::Error(format!(
            "unknown operator: {}{}",
            operator.literal,
            right.type_name()
        )),
    }
}

fn eval_infix_expression(operator: &Token, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix_expression(operator, left, right)
        }
        (Object::String(left), Object::String(right)) => {
            eval_string_infix_expression(operator, left, right)
        }
        (Object::Boolean(left), Object::Boolean(right)) => match operator.token_type {
            TokenType::Eq => Object::Boolean(left == right),
            TokenType::NotEq => Object::Boolean(left != right),
            _ => unknown_operator("BOOLEAN", operator, "BOOLEAN"),
        },
        (left, right) if left.type_name() != right.type_name() => Object::Error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            operator.literal,
            right.type_name()
        )),
        (left, right) => unknown_operator(left.type_name(), operator, right.type_name()),
    }
}

fn eval_integer_infix_expression(operator: &Token, left: i64, right: i64) -> Object {
    match operator.token_type {
        TokenType::Plus => Object::Integer(left.wrapping_add(right)),
        TokenType::Minus => Object::Integer(left.wrapping_sub(right)),
        TokenType::Asterisk => Object::Integer(left.wrapping_mul(right)),
        TokenType::Slash => {
            if right == 0 {
                return Object::Error("division by zero".to_owned());
            }
            Object::Integer(left.wrapping_div(right))
        }
        TokenType::Modulo => {
            if right == 0 {
                return Object::Error("division by zero".to_owned());
            }
            Object::Integer(left.wrapping_rem(right))
        }
        TokenType::Lt => Object::Boolean(left < right),
        TokenType::Gt => Object::Boolean(left > right),
        TokenType::Eq => Object::Boolean(left == right),
        TokenType::NotEq => Object::Boolean(left != right),
        _ => unknown_operator("INTEGER", operator, "INTEGER"),
    }
}

fn eval_string_infix_expression(operator: &Token, left: String, right: String) -> Object {
    match operator.token_type {
        TokenType::Plus => Object::String(format!("{}{}", left, right)),
        TokenType::Eq => Object::Boolean(left == right),
        TokenType::NotEq => Object::Boolean(left != right),
        _ => unknown_operator("STRING", operator, "STRING"),
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(index)) => {
            if index < 0 || index as usize >= elements.len() {
                return Object::Null;
            }
            elements[index as usize].clone()
        }
        (Object::Hash(pairs), key) => match key.hash_key() {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null),
            None => Object::Error(format!("unusable as hash key: {}", key.type_name())),
        },
        (left, _) => Object::Error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

fn unknown_operator(left: &str, operator: &Token, right: &str) -> Object {
    Object::Error(format!(
        "unknown operator: {} {} {}",
        left, operator.literal, right
    ))
}
