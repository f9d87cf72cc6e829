/*!
The registry, a name-indexed store of formulas.

Every formula node is stored in an arena owned by the registry, and is accessed by a [FormulaKey].
Alongside the arena, the registry interns names and binds each name to at most one node.

Nodes refer to their operands by name, and so every edge between nodes is a lookup of the current binding of a name:
- Rebinding a name (by [registering](Registry::register) some other node with the name, or [renaming](Registry::rename) some other node to the name) changes the meaning of every node which refers to the name.
- [Removing](Registry::remove) a name drops the bound node, and every node which refers to the name resolves the name to nothing on its next lookup.

Construction of a node always binds the name of the node.
Though, a node may be stored without its name being bound to it:
- A node whose name is rebound to some other node remains stored, and unbound.
- [Simplification](crate::procedures::simplify) of a junction returns a node with the name of the junction, stored unbound.
- Nodes built during simplification which are not part of the result (e.g. intermediate negations) remain stored, under fresh names.

[remove](Registry::remove) only reaches the node bound to a name.
Any stored node may be dropped through its key with [remove_key](Registry::remove_key), and [clear](Registry::clear) drops every node.
Nodes without an explicit name are given a generated name, with a prefix [configured](crate::config::dbs::RegistryConfig) for atoms and another for compound formulas.

A registry is a session: it is built from a configuration and may be [cleared](Registry::clear) between uses.

# Example

```rust
# use otter_logic::config::Config;
# use otter_logic::db::registry::Registry;
let mut registry = Registry::from_config(&Config::default());

let p = registry.atom("p").unwrap();
let q = registry.atom("q").unwrap();
let rule = registry.implication(Some(p), Some(q)).unwrap();

assert_eq!(registry.get("p"), Some(p));
assert_eq!(registry.as_string(rule), "(p → q)");

// Rebinding q changes the meaning of the rule.
let not_p = registry.negation(p).unwrap();
registry.rename(not_p, "q").unwrap();
assert_eq!(registry.as_string(rule), "(p → ¬p)");

// While removing q leaves the consequent unresolved.
registry.remove("q");
assert_eq!(registry.as_string(rule), "(p → ?q)");
```
*/

mod construction;
pub use construction::JunctionOk;

mod graph;

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::{
    config::{dbs::RegistryConfig, Config},
    db::FormulaKey,
    misc::log::targets::{self},
    structures::{
        formula::{Entity, Formula, FormulaKind},
        name::Name,
    },
    types::err::{self},
};

/// The registry.
pub struct Registry {
    /// A local configuration, derived from the configuration given on creation.
    pub config: RegistryConfig,

    /// Every formula node.
    formulas: SlotMap<FormulaKey, Formula>,

    /// The string of each name, indexed by name.
    names: Vec<String>,

    /// The name of each string.
    name_map: HashMap<String, Name>,

    /// The node each name is bound to, if any, indexed by name.
    bindings: Vec<Option<FormulaKey>>,

    /// A counter for generated atom names.
    atom_counter: usize,

    /// A counter for generated formula names.
    formula_counter: usize,
}

impl Registry {
    /// A new [Registry] with local configuration options derived from `config`.
    pub fn from_config(config: &Config) -> Self {
        Registry {
            config: config.registry.clone(),
            formulas: SlotMap::with_key(),
            names: Vec::default(),
            name_map: HashMap::default(),
            bindings: Vec::default(),
            atom_counter: 0,
            formula_counter: 0,
        }
    }

    /// Drops every node and every name, returning the registry to its state on creation.
    pub fn clear(&mut self) {
        log::info!(target: targets::REGISTRY, "Cleared {} formulas", self.formulas.len());
        self.formulas.clear();
        self.names.clear();
        self.name_map.clear();
        self.bindings.clear();
        self.atom_counter = 0;
        self.formula_counter = 0;
    }

    /// A count of bound names.
    pub fn len(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A count of all nodes, bound or otherwise.
    pub fn formula_count(&self) -> usize {
        self.formulas.len()
    }

    /// The name of a string, interning the string if required.
    pub fn intern(&mut self, string: &str) -> Name {
        if let Some(name) = self.name_map.get(string) {
            return *name;
        }
        let name = self.names.len();
        self.names.push(string.to_string());
        self.name_map.insert(string.to_string(), name);
        self.bindings.push(None);
        name
    }

    /// The name of a string, if the string has been interned.
    pub fn lookup(&self, string: &str) -> Option<Name> {
        self.name_map.get(string).copied()
    }

    /// The string of a name.
    pub fn name_str(&self, name: Name) -> &str {
        self.names.get(name).map(String::as_str).unwrap_or_default()
    }

    /// The node bound to a name, if any.
    pub fn binding(&self, name: Name) -> Option<FormulaKey> {
        self.bindings.get(name).copied().flatten()
    }

    /// The node bound to a name, together with its key, if any.
    pub fn resolve(&self, name: Name) -> Option<(FormulaKey, &Formula)> {
        let key = self.binding(name)?;
        self.formulas.get(key).map(|formula| (key, formula))
    }

    /// The key of the node bound to the given string, if any.
    pub fn get(&self, name: &str) -> Option<FormulaKey> {
        self.binding(self.lookup(name)?)
    }

    /// The node stored under a key, if any.
    pub fn formula(&self, key: FormulaKey) -> Option<&Formula> {
        self.formulas.get(key)
    }

    /// The name of the node stored under a key, as a string.
    pub fn name_of(&self, key: FormulaKey) -> Option<&str> {
        self.formulas.get(key).map(|f| self.name_str(f.name))
    }

    /// Binds the name of the node to the node.
    ///
    /// Returns the key of the node previously bound to the name, if some other node was bound.
    pub fn register(&mut self, key: FormulaKey) -> Result<Option<FormulaKey>, err::RegistryError> {
        let name = match self.formulas.get(key) {
            Some(formula) => formula.name,
            None => return Err(err::RegistryError::UnknownKey),
        };
        Ok(self.bind(name, key))
    }

    /// Unbinds the name, and drops the node the name was bound to.
    ///
    /// Returns the dropped node, if any.
    pub fn remove(&mut self, name: &str) -> Option<Formula> {
        let name = self.lookup(name)?;
        let key = self.bindings.get_mut(name)?.take()?;
        log::trace!(target: targets::REGISTRY, "Removed {}", self.name_str(name));
        self.formulas.remove(key)
    }

    /// Drops the node stored under the key, bound or otherwise.
    ///
    /// If the name of the node is bound to the node, the name is unbound.
    /// Returns the dropped node, if any.
    pub fn remove_key(&mut self, key: FormulaKey) -> Option<Formula> {
        let formula = self.formulas.remove(key)?;
        if self.binding(formula.name) == Some(key) {
            self.bindings[formula.name] = None;
        }
        log::trace!(target: targets::REGISTRY, "Removed node of {}", self.name_str(formula.name));
        Some(formula)
    }

    /// Renames the node, unbinding the old name (if bound to the node) and binding the new name.
    pub fn rename(&mut self, key: FormulaKey, name: &str) -> Result<(), err::RegistryError> {
        if name.is_empty() {
            return Err(err::RegistryError::EmptyName);
        }
        let fresh = self.intern(name);

        let formula = self
            .formulas
            .get_mut(key)
            .ok_or(err::RegistryError::UnknownKey)?;

        if let Some(names) = formula.junction_mut() {
            if names.contains(&fresh) {
                return Err(err::RegistryError::SelfReference);
            }
        }

        let stale = std::mem::replace(&mut formula.name, fresh);

        if self.binding(stale) == Some(key) {
            self.bindings[stale] = None;
        }
        self.bind(fresh, key);
        log::trace!(target: targets::REGISTRY, "Renamed {} to {name}", self.name_str(stale));
        Ok(())
    }

    /// Sets the entity of the node.
    pub fn set_entity(
        &mut self,
        key: FormulaKey,
        entity: Option<Entity>,
    ) -> Result<(), err::RegistryError> {
        let formula = self
            .formulas
            .get_mut(key)
            .ok_or(err::RegistryError::UnknownKey)?;
        formula.entity = entity;
        Ok(())
    }

    /// The keys of every bound node owned by the given entity.
    pub fn owned_by(&self, entity: Entity) -> Vec<FormulaKey> {
        self.bindings
            .iter()
            .flatten()
            .filter(|key| {
                self.formulas
                    .get(**key)
                    .is_some_and(|f| f.entity == Some(entity))
            })
            .copied()
            .collect()
    }

    /// Binds a name to a key, returning the key previously bound, if distinct.
    fn bind(&mut self, name: Name, key: FormulaKey) -> Option<FormulaKey> {
        let previous = self.bindings[name].replace(key);
        match previous {
            Some(previous) if previous != key => {
                log::debug!(target: targets::REGISTRY, "Rebound {}", self.name_str(name));
                Some(previous)
            }
            _ => None,
        }
    }

    /// Stores a node and binds the name of the node.
    pub(crate) fn insert(
        &mut self,
        name: Name,
        entity: Option<Entity>,
        kind: FormulaKind,
    ) -> FormulaKey {
        let key = self.formulas.insert(Formula { name, entity, kind });
        self.bind(name, key);
        log::trace!(target: targets::REGISTRY, "Registered {}", self.name_str(name));
        key
    }

    /// Stores a node without binding the name of the node.
    pub(crate) fn store_unbound(
        &mut self,
        name: Name,
        entity: Option<Entity>,
        kind: FormulaKind,
    ) -> FormulaKey {
        log::trace!(target: targets::REGISTRY, "Stored unbound {}", self.name_str(name));
        self.formulas.insert(Formula { name, entity, kind })
    }

    /// A fresh name, for an atom or for a compound formula, distinct from every bound name.
    pub(crate) fn fresh_name(&mut self, atom: bool) -> Name {
        loop {
            let candidate = match atom {
                true => {
                    self.atom_counter += 1;
                    format!("{}{}", self.config.atom_prefix, self.atom_counter)
                }
                false => {
                    self.formula_counter += 1;
                    format!("{}{}", self.config.formula_prefix, self.formula_counter)
                }
            };
            if self.get(&candidate).is_none() {
                return self.intern(&candidate);
            }
        }
    }

    /// A string representation of the formula stored under the key, resolving names through the registry.
    ///
    /// Names which do not resolve are prefixed with `?`, and traversal stops at the depth limit with `…`.
    pub fn as_string(&self, key: FormulaKey) -> String {
        match self.formulas.get(key) {
            Some(formula) => self.formula_string(formula, 0),
            None => "∅".to_string(),
        }
    }

    fn name_string(&self, name: Name, depth: usize) -> String {
        match self.resolve(name) {
            Some((_, formula)) => self.formula_string(formula, depth + 1),
            None => format!("?{}", self.name_str(name)),
        }
    }

    fn formula_string(&self, formula: &Formula, depth: usize) -> String {
        if depth > self.config.depth_limit.value {
            return "…".to_string();
        }
        match &formula.kind {
            FormulaKind::Atom => self.name_str(formula.name).to_string(),

            FormulaKind::Negation(operand) => format!("¬{}", self.name_string(*operand, depth)),

            FormulaKind::Conjunction(names) | FormulaKind::Disjunction(names) => {
                let connective = match formula.kind {
                    FormulaKind::Conjunction(_) => " ∧ ",
                    _ => " ∨ ",
                };
                let operands = names
                    .iter()
                    .map(|name| self.name_string(*name, depth))
                    .collect::<Vec<_>>();
                format!("({})", operands.join(connective))
            }

            FormulaKind::Implication {
                antecedent,
                consequent,
            } => {
                let side = |name: &Option<Name>| match name {
                    Some(name) => self.name_string(*name, depth),
                    None => "∅".to_string(),
                };
                format!("({} → {})", side(antecedent), side(consequent))
            }

            FormulaKind::Dnf { formula, .. } => match formula.and_then(|k| self.formulas.get(k)) {
                Some(generated) => self.formula_string(generated, depth + 1),
                None => "∅".to_string(),
            },
        }
    }
}
