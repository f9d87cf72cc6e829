use otter_logic::{
    config::Config,
    db::registry::Registry,
    interpretation::{BooleanLogic, Interpretation},
    structures::{assignment::Assignment, value::BooleanValue},
};

fn fresh_registry() -> Registry {
    Registry::from_config(&Config::default())
}

mod negation {
    use super::*;

    #[test]
    fn double_negation() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();
        let not_not_a = registry.negation(not_a).unwrap();

        let simplified = registry.simplify(not_not_a).unwrap().unwrap();
        assert!(registry.structurally_eq(simplified, a));
    }

    #[test]
    fn negated_atom_is_itself() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();
        let count = registry.formula_count();

        assert_eq!(registry.simplify(not_a), Ok(Some(not_a)));
        assert_eq!(registry.formula_count(), count);
    }

    #[test]
    fn unresolved_operand() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();
        registry.remove("a");

        assert_eq!(registry.simplify(not_a), Ok(None));
    }

    #[test]
    fn de_morgan() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();

        let a_b = registry.conjunction([a, b]).unwrap();
        let not_a_b = registry.negation(a_b).unwrap();

        let not_a = registry.negation(a).unwrap();
        let not_b = registry.negation(b).unwrap();
        let not_a_or_not_b = registry.disjunction([not_a, not_b]).unwrap();

        let left = registry.simplify(not_a_b).unwrap().unwrap();
        let right = registry.simplify(not_a_or_not_b).unwrap().unwrap();

        assert!(registry.structurally_eq(left, right));
        assert_eq!(registry.as_string(left), "(¬a ∨ ¬b)");
    }

    #[test]
    fn de_morgan_over_disjunction() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let not_b = registry.negation(b).unwrap();

        let a_or_not_b = registry.disjunction([a, not_b]).unwrap();
        let negation = registry.negation(a_or_not_b).unwrap();

        let simplified = registry.simplify(negation).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "(¬a ∧ b)");
    }

    #[test]
    fn collapsed_operand_is_dropped() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let not_b = registry.negation(b).unwrap();

        // ¬(a ∧ ¬(b ∨ ¬b)), where the inner negation collapses with the disjunction.
        let tautology = registry.disjunction([b, not_b]).unwrap();
        let collapsed = registry.negation(tautology).unwrap();
        let conjunction = registry.conjunction([a, collapsed]).unwrap();
        let negation = registry.negation(conjunction).unwrap();

        let simplified = registry.simplify(negation).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "¬a");
    }

    #[test]
    fn negated_implication() {
        let mut registry = fresh_registry();
        let p = registry.atom("p").unwrap();
        let q = registry.atom("q").unwrap();
        let implication = registry.implication(None, Some(q)).unwrap();
        let negation = registry.negation(implication).unwrap();

        // The implication simplifies to q, which is then negated.
        let simplified = registry.simplify(negation).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "¬q");
        assert!(!registry.structurally_eq(simplified, p));
    }
}

mod junction {
    use super::*;

    #[test]
    fn idempotence() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();
        let also_not_a = registry.negation(a).unwrap();

        let conjunction = registry.conjunction([not_a, also_not_a]).unwrap();
        let simplified = registry.simplify(conjunction).unwrap().unwrap();
        assert!(registry.structurally_eq(simplified, not_a));

        let disjunction = registry.disjunction([not_a, also_not_a]).unwrap();
        let simplified = registry.simplify(disjunction).unwrap().unwrap();
        assert!(registry.structurally_eq(simplified, not_a));
    }

    #[test]
    fn idempotence_of_a_single_name() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();

        // The second a is a duplicate name, and is not added.
        let conjunction = registry.conjunction([a, a]).unwrap();
        assert_eq!(registry.simplify(conjunction), Ok(Some(a)));

        let disjunction = registry.disjunction([a, a]).unwrap();
        assert_eq!(registry.simplify(disjunction), Ok(Some(a)));
    }

    #[test]
    fn contradiction() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let not_a = registry.negation(a).unwrap();

        let conjunction = registry.conjunction([b, a, not_a]).unwrap();
        assert_eq!(registry.simplify(conjunction), Ok(None));
    }

    #[test]
    fn complementary_pair_in_disjunction() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();

        let disjunction = registry.disjunction([a, not_a]).unwrap();
        assert_eq!(registry.simplify(disjunction), Ok(None));
    }

    #[test]
    fn complementary_pair_leaves_the_rest() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let not_a = registry.negation(a).unwrap();

        let disjunction = registry.disjunction([not_a, b, a]).unwrap();
        assert_eq!(registry.simplify(disjunction), Ok(Some(b)));
    }

    #[test]
    fn flattening_after_simplification() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let c = registry.atom("c").unwrap();

        // ¬(¬b ∨ ¬c) simplifies to (b ∧ c), which is flattened into the outer conjunction.
        let not_b = registry.negation(b).unwrap();
        let not_c = registry.negation(c).unwrap();
        let inner = registry.disjunction([not_b, not_c]).unwrap();
        let negation = registry.negation(inner).unwrap();
        let outer = registry.conjunction([a, negation]).unwrap();

        let simplified = registry.simplify(outer).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "(a ∧ b ∧ c)");
    }

    #[test]
    fn keeps_name_and_entity() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();

        let conjunction = registry.conjunction([a, b, a]).unwrap();
        registry.rename(conjunction, "goal").unwrap();
        registry.set_entity(conjunction, Some(3)).unwrap();

        let simplified = registry.simplify(conjunction).unwrap().unwrap();
        let formula = registry.formula(simplified).unwrap();

        assert_eq!(registry.name_of(simplified), Some("goal"));
        assert_eq!(formula.entity(), Some(3));

        // The name is adopted only on registration.
        assert_eq!(registry.get("goal"), Some(conjunction));
        assert_eq!(registry.register(simplified), Ok(Some(conjunction)));
        assert_eq!(registry.get("goal"), Some(simplified));
    }

    #[test]
    fn empty_junction() {
        let mut registry = fresh_registry();
        let conjunction = registry.conjunction(Vec::new()).unwrap();
        assert_eq!(registry.simplify(conjunction), Ok(None));
    }
}

mod implication {
    use super::*;

    #[test]
    fn absent_sides() {
        let mut registry = fresh_registry();
        let p = registry.atom("p").unwrap();
        let q = registry.atom("q").unwrap();
        let not_q = registry.negation(q).unwrap();
        let not_not_q = registry.negation(not_q).unwrap();

        let neither = registry.implication(None, None).unwrap();
        assert_eq!(registry.simplify(neither), Ok(None));

        let only_consequent = registry.implication(None, Some(not_not_q)).unwrap();
        let left = registry.simplify(only_consequent).unwrap().unwrap();
        let right = registry.simplify(not_not_q).unwrap().unwrap();
        assert!(registry.structurally_eq(left, right));

        let only_antecedent = registry.implication(Some(p), None).unwrap();
        let left = registry.simplify(only_antecedent).unwrap().unwrap();
        let not_p = registry.negation(p).unwrap();
        let right = registry.simplify(not_p).unwrap().unwrap();
        assert!(registry.structurally_eq(left, right));
    }

    #[test]
    fn material() {
        let mut registry = fresh_registry();
        let p = registry.atom("p").unwrap();
        let q = registry.atom("q").unwrap();

        let implication = registry.implication(Some(p), Some(q)).unwrap();
        let simplified = registry.simplify(implication).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "(¬p ∨ q)");
    }

    #[test]
    fn self_implication() {
        let mut registry = fresh_registry();
        let p = registry.atom("p").unwrap();

        // ¬p ∨ p is a complementary pair.
        let implication = registry.implication(Some(p), Some(p)).unwrap();
        assert_eq!(registry.simplify(implication), Ok(None));
    }

    #[test]
    fn collapsed_antecedent() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let q = registry.atom("q").unwrap();
        let not_a = registry.negation(a).unwrap();
        let contradiction = registry.conjunction([a, not_a]).unwrap();

        // ¬(a ∧ ¬a) collapses, leaving only the consequent.
        let implication = registry.implication(Some(contradiction), Some(q)).unwrap();
        assert_eq!(registry.simplify(implication), Ok(Some(q)));
    }

    #[test]
    fn collapsed_consequent() {
        let mut registry = fresh_registry();
        let p = registry.atom("p").unwrap();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();
        let tautology = registry.disjunction([a, not_a]).unwrap();

        let implication = registry.implication(Some(p), Some(tautology)).unwrap();
        let simplified = registry.simplify(implication).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "¬p");
    }

    #[test]
    fn unresolved_antecedent() {
        let mut registry = fresh_registry();
        let p = registry.atom("p").unwrap();
        let q = registry.atom("q").unwrap();

        let implication = registry.implication(Some(p), Some(q)).unwrap();
        registry.remove("p");

        assert_eq!(registry.simplify(implication), Ok(Some(q)));
    }
}

mod purity {
    use super::*;

    #[test]
    fn operands_are_untouched() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let a_b = registry.conjunction([a, b]).unwrap();
        let negation = registry.negation(a_b).unwrap();

        let before = registry.as_string(negation);
        let _ = registry.simplify(negation).unwrap();
        assert_eq!(registry.as_string(negation), before);
    }

    #[test]
    fn values_are_untouched() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let c = registry.atom("c").unwrap();
        let not_a = registry.negation(a).unwrap();

        // The pair a, ¬a is dropped from the disjunction, which changes its value.
        let disjunction = registry.disjunction([a, not_a, b, c]).unwrap();
        let negation = registry.negation(disjunction).unwrap();
        let name = registry.name_of(disjunction).unwrap().to_string();

        let state = Assignment::from_iter([
            ("a", BooleanValue::TRUE),
            ("b", BooleanValue::FALSE),
            ("c", BooleanValue::FALSE),
        ]);
        let logic = BooleanLogic::new(&state);
        assert_eq!(logic.evaluate(&registry, negation), Ok(Some(BooleanValue::FALSE)));

        let simplified = registry.simplify(negation).unwrap().unwrap();
        assert_eq!(registry.as_string(simplified), "(¬b ∧ ¬c)");
        assert_eq!(logic.evaluate(&registry, simplified), Ok(Some(BooleanValue::TRUE)));

        assert_eq!(logic.evaluate(&registry, negation), Ok(Some(BooleanValue::FALSE)));
        assert_eq!(registry.get(&name), Some(disjunction));
        assert_eq!(logic.evaluate(&registry, disjunction), Ok(Some(BooleanValue::TRUE)));

        // Likewise when the disjunction is simplified directly.
        let simplified = registry.simplify(disjunction).unwrap().unwrap();
        assert_eq!(registry.name_of(simplified), Some(name.as_str()));
        assert_eq!(registry.get(&name), Some(disjunction));
        assert_eq!(logic.evaluate(&registry, disjunction), Ok(Some(BooleanValue::TRUE)));
        assert_eq!(logic.evaluate(&registry, simplified), Ok(Some(BooleanValue::FALSE)));
    }
}
