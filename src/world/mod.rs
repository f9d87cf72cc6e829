/*!
A database of world rules, goals, and the current state of a world.

- A *rule* is an implication, read as: whenever the antecedent holds, the consequent is implied.
  A rule without an antecedent always applies.
- A *goal* is a formula describing some desired state.
- The *current state* is an [assignment](crate::structures::assignment) of boolean values to the names of atoms.

Rules and goals are evaluated against the current state with [BooleanLogic].

```rust
# use otter_logic::config::Config;
# use otter_logic::structures::value::BooleanValue;
# use otter_logic::world::WorldDB;
let mut world = WorldDB::from_config(&Config::default());

let raining = world.registry.atom("raining").unwrap();
let wet = world.registry.atom("wet").unwrap();
let rule = world.add_rule(Some(raining), Some(wet)).unwrap();
world.add_goal(wet);

world.update("raining", Some(BooleanValue::TRUE));
assert_eq!(world.triggered_rules(), Ok(vec![rule]));
assert_eq!(world.implied(), Ok(vec![wet]));
assert_eq!(world.unsatisfied_goals(), Ok(vec![wet]));

world.update("wet", Some(BooleanValue::TRUE));
assert_eq!(world.satisfied_goals(), Ok(vec![wet]));
```
*/

use crate::{
    config::Config,
    db::{registry::Registry, FormulaKey},
    interpretation::{BooleanLogic, Interpretation},
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        formula::FormulaKind,
        value::{BooleanValue, LogicValue},
    },
    types::err::{self},
};

/// The world database.
pub struct WorldDB {
    /// The registry of every formula in the world.
    pub registry: Registry,

    /// Implications, in order of addition.
    rules: Vec<FormulaKey>,

    /// Goals, in order of addition.
    goals: Vec<FormulaKey>,

    /// The current state of the world.
    current: Assignment<BooleanValue>,
}

impl WorldDB {
    pub fn from_config(config: &Config) -> Self {
        WorldDB {
            registry: Registry::from_config(config),
            rules: Vec::default(),
            goals: Vec::default(),
            current: Assignment::default(),
        }
    }

    pub fn rules(&self) -> &[FormulaKey] {
        &self.rules
    }

    pub fn goals(&self) -> &[FormulaKey] {
        &self.goals
    }

    pub fn current(&self) -> &Assignment<BooleanValue> {
        &self.current
    }

    /// Adds a rule from the (optional) antecedent to the (optional) consequent, returning the key of the implication.
    pub fn add_rule(
        &mut self,
        antecedent: Option<FormulaKey>,
        consequent: Option<FormulaKey>,
    ) -> Result<FormulaKey, err::ErrorKind> {
        let rule = self.registry.implication(antecedent, consequent)?;
        log::trace!(target: targets::WORLD, "Rule {}", self.registry.as_string(rule));
        self.rules.push(rule);
        Ok(rule)
    }

    pub fn add_goal(&mut self, goal: FormulaKey) {
        log::trace!(target: targets::WORLD, "Goal {}", self.registry.as_string(goal));
        self.goals.push(goal);
    }

    /// Replaces the current state.
    pub fn set_current(&mut self, state: Assignment<BooleanValue>) {
        log::debug!(target: targets::WORLD, "State {state}");
        self.current = state;
    }

    /// Updates the value of a name in the current state, in place.
    pub fn update(&mut self, name: &str, value: Option<BooleanValue>) {
        self.current.set(name, value, false);
    }

    /// The rules whose antecedent is designated on the current state, or which have no antecedent.
    ///
    /// A rule whose antecedent does not resolve is not triggered.
    pub fn triggered_rules(&self) -> Result<Vec<FormulaKey>, err::ErrorKind> {
        let logic = BooleanLogic::new(&self.current);
        let mut triggered = Vec::default();

        for rule in &self.rules {
            let Some(FormulaKind::Implication { antecedent, .. }) =
                self.registry.formula(*rule).map(|f| f.kind())
            else {
                continue;
            };

            let holds = match antecedent {
                None => true,
                Some(_) => logic
                    .evaluate_name(&self.registry, *antecedent, 0)?
                    .is_some_and(|value| value.designated()),
            };

            if holds {
                triggered.push(*rule);
            }
        }

        Ok(triggered)
    }

    /// The (resolved) consequents of every triggered rule, in order of the rules.
    pub fn implied(&self) -> Result<Vec<FormulaKey>, err::ErrorKind> {
        let implied = self
            .triggered_rules()?
            .into_iter()
            .filter_map(|rule| match self.registry.formula(rule).map(|f| f.kind()) {
                Some(FormulaKind::Implication {
                    consequent: Some(consequent),
                    ..
                }) => self.registry.binding(*consequent),
                _ => None,
            })
            .collect();
        Ok(implied)
    }

    /// The rules which are false on the current state.
    pub fn violated_rules(&self) -> Result<Vec<FormulaKey>, err::ErrorKind> {
        let logic = BooleanLogic::new(&self.current);
        let mut violated = Vec::default();
        for rule in &self.rules {
            if let Some(value) = logic.evaluate(&self.registry, *rule)? {
                if !value.designated() {
                    violated.push(*rule);
                }
            }
        }
        Ok(violated)
    }

    /// The goals which are designated on the current state.
    pub fn satisfied_goals(&self) -> Result<Vec<FormulaKey>, err::ErrorKind> {
        self.goals_where(true)
    }

    /// The goals which are not designated on the current state, including those without a value.
    pub fn unsatisfied_goals(&self) -> Result<Vec<FormulaKey>, err::ErrorKind> {
        self.goals_where(false)
    }

    fn goals_where(&self, satisfied: bool) -> Result<Vec<FormulaKey>, err::ErrorKind> {
        let logic = BooleanLogic::new(&self.current);
        let mut goals = Vec::default();
        for goal in &self.goals {
            let designated = logic
                .evaluate(&self.registry, *goal)?
                .is_some_and(|value| value.designated());
            if designated == satisfied {
                goals.push(*goal);
            }
        }
        Ok(goals)
    }

    /// The current state, as a formula.
    pub fn state_formula(&mut self) -> Result<Option<FormulaKey>, err::ErrorKind> {
        self.current.to_formula(&mut self.registry)
    }

    /// Clears every formula, rule, and goal, and the current state.
    pub fn reset(&mut self) {
        log::info!(target: targets::WORLD, "Reset");
        self.registry.clear();
        self.rules.clear();
        self.goals.clear();
        self.current = Assignment::default();
    }
}
