use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A value bound to a name, together with its `const` flag.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The bound value.
    pub value: Value,
    /// Whether the binding was declared `const` and may never be
    /// reassigned.
    pub constant: bool,
}

impl Binding {
    /// Creates a mutable (non-`const`) binding.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value, constant: false }
    }

    /// Creates a `const` binding.
    #[must_use]
    pub const fn constant(value: Value) -> Self {
        Self { value, constant: true }
    }
}

/// A lexical scope mapping names to bindings.
///
/// Scopes form a parent chain: lookups walk outward toward the root, writes
/// default to the current scope. Environments are shared via `Rc` — a
/// closure keeps its defining scope alive and observes later mutations of
/// it. The store uses interior mutability so scopes can be updated through
/// shared handles.
#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Binding>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new root environment.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Lookups that miss the new scope continue in `outer`; writes stay
    /// local unless routed through [`Environment::set_outside_scope`].
    #[must_use]
    pub fn new_enclosed(outer: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self {
            store: RefCell::new(HashMap::new()),
            outer: Some(Rc::clone(outer)),
        })
    }

    /// Looks up a name, walking the scope chain outward.
    ///
    /// # Returns
    /// The binding closest to the current scope, or `None` when no scope on
    /// the chain binds `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Binding> {
        if let Some(binding) = self.store.borrow().get(name) {
            return Some(binding.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Looks up a name in the current scope only.
    #[must_use]
    pub fn get_in_scope(&self, name: &str) -> Option<Binding> {
        self.store.borrow().get(name).cloned()
    }

    /// Binds a name in the current scope, overwriting any previous binding
    /// here.
    pub fn set(&self, name: &str, binding: Binding) {
        self.store.borrow_mut().insert(name.to_string(), binding);
    }

    /// Tests whether the current scope itself binds a name.
    #[must_use]
    pub fn exists_in_scope(&self, name: &str) -> bool {
        self.store.borrow().contains_key(name)
    }

    /// Tests whether any ancestor scope binds a name.
    #[must_use]
    pub fn exists_outside_scope(&self, name: &str) -> bool {
        match &self.outer {
            Some(outer) => outer.exists_in_scope(name) || outer.exists_outside_scope(name),
            None => false,
        }
    }

    /// Writes to the nearest ancestor scope that already binds `name`.
    ///
    /// Used by the loop-body assignment rule: an update of an outer
    /// variable from within a `for` scope must reach the scope that owns
    /// it rather than create a loop-local shadow. Does nothing when no
    /// ancestor binds `name`.
    pub fn set_outside_scope(&self, name: &str, binding: Binding) {
        if let Some(outer) = &self.outer {
            if outer.exists_in_scope(name) {
                outer.set(name, binding);
            } else {
                outer.set_outside_scope(name, binding);
            }
        }
    }

    /// Removes a name from the current scope.
    ///
    /// The evaluator uses this to clear loop-marker sentinels when a loop
    /// exits.
    pub fn delete(&self, name: &str) {
        self.store.borrow_mut().remove(name);
    }
}
