/*!
Formulas, as stored in a [registry](crate::db::registry::Registry).

A formula is a node with a [Name], an optional owning [Entity], and a [FormulaKind].
Nodes never own their operands.
Instead, the names of operands are stored, and operands are resolved through the registry when required.

The kinds of formula are:
- Atoms, the leaves of a formula.
- Negations, of one operand.
- Conjunctions and disjunctions, together *junctions*, of a sequence of distinct operands.
- Implications, of an optional antecedent and an optional consequent.
- DNFs, which generate a disjunction of minterms from a bitmask over a list of atoms.

Junctions respect a few invariants on their operands, maintained by the [registry](crate::db::registry::Registry):
- A junction never contains its own name.
- Adding a junction to a junction of the same kind adds the operands of the former individually.
- A name appears at most once.
*/

use crate::{db::FormulaKey, structures::name::Name};

/// An opaque handle to whatever owns a formula, used only for grouping.
pub type Entity = u64;

/// The kind of a junction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JunctionKind {
    Conjunction,
    Disjunction,
}

impl JunctionKind {
    /// The dual kind of junction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Conjunction => Self::Disjunction,
            Self::Disjunction => Self::Conjunction,
        }
    }

    /// A formula kind for a junction of this kind over the given names.
    pub fn with(&self, names: Vec<Name>) -> FormulaKind {
        match self {
            Self::Conjunction => FormulaKind::Conjunction(names),
            Self::Disjunction => FormulaKind::Disjunction(names),
        }
    }
}

/// The kind of a formula, together with the names of any operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormulaKind {
    Atom,

    Negation(Name),

    Conjunction(Vec<Name>),

    Disjunction(Vec<Name>),

    Implication {
        antecedent: Option<Name>,
        consequent: Option<Name>,
    },

    /// A formula generated from the rows of a truth table over `atoms` whose bit is set in `index`.
    ///
    /// The generated formula is built once, when the node is built, and the key to the formula is stored.
    /// If generation resulted in no formula (e.g. an index of zero) the key is absent.
    Dnf {
        atoms: Vec<Name>,
        index: u64,
        formula: Option<FormulaKey>,
    },
}

/// A formula node.
#[derive(Clone, Debug)]
pub struct Formula {
    pub(crate) name: Name,
    pub(crate) entity: Option<Entity>,
    pub(crate) kind: FormulaKind,
}

impl Formula {
    pub fn name(&self) -> Name {
        self.name
    }

    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    pub fn kind(&self) -> &FormulaKind {
        &self.kind
    }

    pub fn is_atom(&self) -> bool {
        matches!(self.kind, FormulaKind::Atom)
    }

    /// The operand of a negation, if the formula is a negation.
    pub fn negated(&self) -> Option<Name> {
        match self.kind {
            FormulaKind::Negation(operand) => Some(operand),
            _ => None,
        }
    }

    /// The kind and operands of a junction, if the formula is a junction.
    pub fn junction(&self) -> Option<(JunctionKind, &[Name])> {
        match &self.kind {
            FormulaKind::Conjunction(names) => Some((JunctionKind::Conjunction, names.as_slice())),
            FormulaKind::Disjunction(names) => Some((JunctionKind::Disjunction, names.as_slice())),
            _ => None,
        }
    }

    pub(crate) fn junction_mut(&mut self) -> Option<&mut Vec<Name>> {
        match &mut self.kind {
            FormulaKind::Conjunction(names) | FormulaKind::Disjunction(names) => Some(names),
            _ => None,
        }
    }

    /// Every name the formula refers to, in order, and excluding the formula's own name.
    pub fn references(&self) -> Vec<Name> {
        match &self.kind {
            FormulaKind::Atom => Vec::default(),
            FormulaKind::Negation(operand) => vec![*operand],
            FormulaKind::Conjunction(names) | FormulaKind::Disjunction(names) => names.clone(),
            FormulaKind::Implication {
                antecedent,
                consequent,
            } => antecedent.iter().chain(consequent.iter()).copied().collect(),
            FormulaKind::Dnf { atoms, .. } => atoms.clone(),
        }
    }
}
