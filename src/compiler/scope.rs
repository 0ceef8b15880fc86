//! Name resolution and collision renaming for the generated method.
//!
//! Source scoping is lexical (one scope per block), but the generated Java
//! method body is a single flat namespace for locals: Java rejects a local
//! that shadows another local or a parameter. Every declaration therefore gets
//! an emitted name that is unique across the whole method, and references
//! resolve through the lexical scope stack to that emitted name.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use log::trace;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::runtime::RUNTIME_CLASSES;

lazy_static! {
    /// Java reserved words and literals. A source identifier spelled like one
    /// of these must be renamed before it can be emitted.
    pub static ref JAVA_RESERVED: HashSet<&'static str> = {
        let words = [
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
            "class", "const", "continue", "default", "do", "double", "else", "enum",
            "extends", "final", "finally", "float", "for", "goto", "if", "implements",
            "import", "instanceof", "int", "interface", "long", "native", "new",
            "package", "private", "protected", "public", "return", "short", "static",
            "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
            "transient", "try", "void", "volatile", "while", "true", "false", "null",
            "var", "yield", "record", "_",
        ];
        words.into_iter().collect()
    };
}

/// A declared name and what it was emitted as.
#[derive(Debug, Clone, PartialEq)]
pub struct NameBinding {
    pub original: String,
    pub emitted: String,
    pub var_type: Type,
    /// 0 for parameters, 1 for the method body, +1 per nested block.
    pub depth: usize,
}

/// Bindings introduced by one block, in declaration order.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: Vec<NameBinding>,
}

impl Scope {
    fn get_binding(&self, name: &str) -> Option<&NameBinding> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.original == name)
    }
}

#[derive(Debug, Default)]
pub struct ScopeTable {
    parameters: Vec<NameBinding>,
    stack: Vec<Scope>,
    /// Every name emitted so far in this method.
    emitted: HashSet<String>,
    rename_counter: HashMap<String, u32>,
}

impl ScopeTable {
    pub fn new() -> Self {
        ScopeTable::default()
    }

    /// Creates a new block scope
    pub fn enter_scope(&mut self) {
        self.stack.push(Scope::default());
    }

    /// Destroys the current block scope
    pub fn leave_scope(&mut self) {
        debug_assert!(!self.stack.is_empty(), "Attempted to leave the parameter scope");
        self.stack.pop();
    }

    /// Binds a parameter name. Parameters are visible from every block.
    pub fn declare_parameter(&mut self, name: &str, var_type: Type) -> String {
        let emitted = self.emitted_name_for(name);
        self.parameters.push(NameBinding {
            original: name.to_string(),
            emitted: emitted.clone(),
            var_type,
            depth: 0,
        });
        emitted
    }

    /// Binds `name` in the current scope and returns its emitted name.
    ///
    /// An earlier binding of the same name is kept; it simply stops being the
    /// most recent one.
    pub fn declare(&mut self, name: &str, var_type: Type) -> String {
        let emitted = self.emitted_name_for(name);
        let binding = NameBinding {
            original: name.to_string(),
            emitted: emitted.clone(),
            var_type,
            depth: self.stack.len().max(1),
        };

        match self.stack.last_mut() {
            Some(scope) => scope.bindings.push(binding),
            None => self.stack.push(Scope {
                bindings: vec![binding],
            }),
        }
        emitted
    }

    /// Looks for a binding from the innermost scope outwards, then among the
    /// parameters.
    pub fn lookup(&self, name: &str) -> Option<&NameBinding> {
        for scope in self.stack.iter().rev() {
            if let Some(binding) = scope.get_binding(name) {
                return Some(binding);
            }
        }

        self.parameters
            .iter()
            .rev()
            .find(|binding| binding.original == name)
    }

    pub fn resolve(&self, name: &str, span: &Span) -> Result<String, Error> {
        self.lookup(name)
            .map(|binding| binding.emitted.clone())
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnresolvedName {
                        name: name.to_string(),
                    },
                    span.start.clone(),
                )
            })
    }

    /// A compiler-internal local name. `$` never appears in source identifiers,
    /// so these cannot collide with declared names.
    pub fn fresh_temporary(&mut self, base: &str) -> String {
        let key = format!("{}$", base);
        loop {
            let name = format!("{}{}", key, self.next_suffix(&key));
            if self.emitted.insert(name.clone()) {
                return name;
            }
        }
    }

    fn emitted_name_for(&mut self, name: &str) -> String {
        if !self.is_taken(name) {
            self.emitted.insert(name.to_string());
            return name.to_string();
        }

        loop {
            let candidate = format!("{}_{}", name, self.next_suffix(name));
            if !self.is_taken(&candidate) {
                trace!("renaming `{}` to `{}`", name, candidate);
                self.emitted.insert(candidate.clone());
                return candidate;
            }
        }
    }

    fn is_taken(&self, name: &str) -> bool {
        self.emitted.contains(name)
            || JAVA_RESERVED.contains(name)
            || RUNTIME_CLASSES.contains(name)
    }

    fn next_suffix(&mut self, base: &str) -> u32 {
        let counter = self.rename_counter.entry(base.to_string()).or_insert(0);
        let suffix = *counter;
        *counter += 1;
        suffix
    }
}
