use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::prelude::Object;

/// A scope of name bindings. Scopes chain through `outer`: a function
/// call gets a fresh environment enclosed by the one the function
/// captured, and lookups walk the whole chain outward.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(object) => Some(object.clone()),
            None => match &self.outer {
                Some(outer) => outer.borrow().get(name),
                None => None,
            },
        }
    }

    /// Binds in this scope only; a name shadowing an outer binding
    /// never writes through to it.
    pub fn set(&mut self, name: String, value: Object) {
        let _ = self.store.insert(name, value);
    }
}
