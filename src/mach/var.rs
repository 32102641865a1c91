use std::sync::Arc;

/// ## Variable handle
///
/// Instructions refer to variables through a `Var`. The value itself lives
/// in the `Vars` registry that issued the handle.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    index: usize,
    name: Arc<str>,
}

impl Var {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_free(&self) -> bool {
        self.index == Vars::FREE
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// ## Variable memory
///
/// Entries are only ever added, so every handed out `Var` stays valid
/// for as long as the registry lives. Slot 0 is the free variable `x`.

#[derive(Debug, Clone)]
pub struct Vars {
    names: Vec<Arc<str>>,
    values: Vec<f64>,
}

impl Default for Vars {
    fn default() -> Vars {
        Vars::new()
    }
}

impl Vars {
    const FREE: usize = 0;

    pub fn new() -> Vars {
        Vars {
            names: vec!["x".into()],
            values: vec![0.0],
        }
    }

    pub fn free(&self) -> Var {
        Var {
            index: Vars::FREE,
            name: self.names[Vars::FREE].clone(),
        }
    }

    pub fn define(&mut self, name: &str) -> Var {
        if let Some(var) = self.lookup(name) {
            return var;
        }
        let name: Arc<str> = name.into();
        self.names.push(name.clone());
        self.values.push(0.0);
        Var {
            index: self.names.len() - 1,
            name,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Var> {
        self.names
            .iter()
            .position(|n| &**n == name)
            .map(|index| Var {
                index,
                name: self.names[index].clone(),
            })
    }

    pub fn fetch(&self, var: &Var) -> f64 {
        debug_assert!(var.index < self.values.len());
        self.values.get(var.index).copied().unwrap_or(f64::NAN)
    }

    pub fn store(&mut self, var: &Var, value: f64) {
        if let Some(v) = self.values.get_mut(var.index) {
            *v = value;
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view for one evaluation with the free variable bound to `x`.
    pub fn scope(&self, x: f64) -> Scope<'_> {
        Scope { vars: self, x }
    }
}

/// ## Evaluation scope
///
/// The free variable is passed by value, so any number of scopes may
/// evaluate against the same registry at once.

#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    vars: &'a Vars,
    x: f64,
}

impl<'a> Scope<'a> {
    pub fn fetch(&self, var: &Var) -> f64 {
        if var.is_free() {
            self.x
        } else {
            self.vars.fetch(var)
        }
    }
}
