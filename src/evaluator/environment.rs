use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::prelude::Object;

/// One lexical scope: a binding map plus the scope it was opened in.
/// Lookup walks the chain; `let` always writes to the innermost frame.
#[derive(Debug)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    values: HashMap<String, Object>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            enclosing: None,
            values: HashMap::new(),
        }
    }

    pub fn with_enclosing(self, enclosing: Rc<RefCell<Environment>>) -> Self {
        Self {
            enclosing: Some(enclosing),
            ..self
        }
    }

    pub fn as_rc(self) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(self))
    }

    pub fn define(&mut self, name: &str, value: Object) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        // Ask one level above if possible
        self.enclosing
            .as_ref()
            .and_then(|enclosing| enclosing.borrow().get(name))
    }
}
