use crate::value::{error::EvaluationError, Value};
use compact_str::CompactString;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// A lexical environment. Clones share the same underlying bindings.
#[derive(Debug, Clone)]
pub struct Scope {
    inner: Rc<RefCell<ScopeImpl>>,
}

#[derive(Debug)]
struct ScopeImpl {
    values: HashMap<CompactString, Value>,
    parent: Option<Scope>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a root scope.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScopeImpl {
                values: HashMap::new(),
                parent: None,
            })),
        }
    }

    pub fn nested(&self) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScopeImpl {
                values: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    pub fn has_parent(&self) -> bool {
        self.inner.borrow().parent.is_some()
    }

    /// Creates or overwrites `name` in this scope only.
    pub fn define(&self, name: &str, value: Value) {
        self.inner.borrow_mut().values.insert(name.into(), value);
    }

    /// Finds the scope that owns `name`, walking outwards from this one.
    pub fn lookup(&self, name: &str) -> Option<Scope> {
        let mut current = Some(self.clone());
        while let Some(scope) = current {
            if scope.inner.borrow().values.contains_key(name) {
                return Some(scope);
            }
            current = scope.inner.borrow().parent.clone();
        }
        None
    }

    pub fn get(&self, name: &str) -> Result<Value, EvaluationError> {
        let undefined = || EvaluationError::UndefinedVariable(name.into());
        let owner = self.lookup(name).ok_or_else(undefined)?;
        let value = owner.inner.borrow().values.get(name).cloned();
        value.ok_or_else(undefined)
    }

    /// Rebinds `name` in the scope that owns it. Unknown names are only
    /// introduced when this is the root scope.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), EvaluationError> {
        match self.lookup(name) {
            Some(owner) => {
                owner.define(name, value);
                Ok(())
            }
            None if self.has_parent() => Err(EvaluationError::UndefinedVariable(name.into())),
            None => {
                self.define(name, value);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scope;
    use crate::value::{error::EvaluationError, Value};

    #[test]
    fn resolves_defined_variable() {
        let scope = Scope::new();
        scope.define("foo", Value::Number(1.0));
        assert_eq!(scope.get("foo"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn reading_undefined_variable_fails() {
        let scope = Scope::new();
        let error = scope.get("foo").unwrap_err();
        assert_eq!(error.to_string(), "Undefined variable 'foo'");
    }

    #[test]
    fn resolves_variables_defined_in_parent_scope() {
        let scope = Scope::new();
        scope.define("foo", Value::Number(1.0));
        let nested = scope.nested();
        assert_eq!(nested.get("foo"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assigns_previously_defined_variable() {
        let scope = Scope::new();
        scope.define("kuku", Value::String("keke".into()));
        scope
            .assign("kuku", Value::String("huhu".into()))
            .expect("kuku is defined");
        assert_eq!(scope.get("kuku"), Ok(Value::String("huhu".into())));
    }

    #[test]
    fn nested_assignment_mutates_the_owning_scope() {
        let scope = Scope::new();
        scope.define("counter", Value::Number(1.0));
        let nested = scope.nested().nested();
        nested
            .assign("counter", Value::Number(2.0))
            .expect("counter is defined in the root");

        assert_eq!(scope.get("counter"), Ok(Value::Number(2.0)));
        assert!(nested.inner.borrow().values.is_empty());
    }

    #[test]
    fn refuses_to_pollute_parent_from_nested_scope() {
        let scope = Scope::new();
        let nested = scope.nested();
        let error = nested.assign("azerty", Value::Number(123.0)).unwrap_err();
        assert_eq!(error, EvaluationError::UndefinedVariable("azerty".into()));
        assert_eq!(error.to_string(), "Undefined variable 'azerty'");
        assert!(scope.get("azerty").is_err());
    }

    #[test]
    fn root_assignment_declares_new_binding() {
        let scope = Scope::new();
        scope
            .assign("name", Value::Boolean(true))
            .expect("root scope may declare");
        assert_eq!(scope.get("name"), Ok(Value::Boolean(true)));
    }

    #[test]
    fn define_shadows_outer_binding() {
        let scope = Scope::new();
        scope.define("x", Value::Number(1.0));
        let nested = scope.nested();
        nested.define("x", Value::Number(2.0));

        assert_eq!(nested.get("x"), Ok(Value::Number(2.0)));
        assert_eq!(scope.get("x"), Ok(Value::Number(1.0)));
    }
}
