use std::{cell::RefCell, fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::interpreter::object::core::Object;

/// A shared handle to an [`Environment`].
///
/// Closures hold one of these to the scope they were defined in, so a frame
/// lives as long as the longest-lived function that captured it.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of the lexical scope chain.
///
/// Writes always go to this frame, so a `let` inside a function shadows an
/// outer binding of the same name rather than changing it. Reads walk outward
/// through the enclosing frames.
#[derive(Default)]
pub struct Environment {
    store: FxHashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty root environment.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::{core::Object, environment::Environment};
    ///
    /// let root = Environment::root();
    /// root.borrow_mut().set("x", Object::Integer(1));
    ///
    /// let inner = Environment::enclosed(&root);
    /// inner.borrow_mut().set("x", Object::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
    /// assert_eq!(root.borrow().get("x"), Some(Object::Integer(1)));
    /// assert_eq!(root.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn root() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: FxHashMap::default(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks `name` up in this frame, then in each enclosing frame in turn.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this frame and returns the value.
    pub fn set(&mut self, name: impl Into<String>, value: Object) -> Object {
        self.store.insert(name.into(), value.clone());
        value
    }
}

impl fmt::Debug for Environment {
    // Values are left out: a frame can hold a closure that captured it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("enclosed", &self.outer.is_some())
         .finish()
    }
}
