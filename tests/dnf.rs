use otter_logic::{
    config::Config,
    db::{registry::Registry, FormulaKey},
    interpretation::{BooleanLogic, FOURLogic, Interpretation},
    structures::{
        assignment::Assignment,
        value::{BooleanValue, FOURValue},
    },
    types::err::{ErrorKind, RegistryError},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn fresh_registry() -> Registry {
    Registry::from_config(&Config::default())
}

/// Atoms named `x0`, `x1`, ….
fn atoms(registry: &mut Registry, count: usize) -> Vec<FormulaKey> {
    (0..count)
        .map(|i| registry.atom(&format!("x{i}")).unwrap())
        .collect()
}

/// The assignment of a row of the truth table over atoms named as in [atoms].
fn row_assignment(count: usize, row: u64) -> Assignment<BooleanValue> {
    (0..count)
        .map(|i| (format!("x{i}"), BooleanValue::from((row >> i) & 1 == 1)))
        .collect()
}

mod generation {
    use super::*;

    #[test]
    fn exclusive_or() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let xor = registry.dnf(&[a, b], 6).unwrap();

        for (a_value, b_value, expected) in [
            (true, true, false),
            (true, false, true),
            (false, true, true),
            (false, false, false),
        ] {
            let state = Assignment::from_iter([
                ("a", BooleanValue::from(a_value)),
                ("b", BooleanValue::from(b_value)),
            ]);
            let logic = BooleanLogic::new(&state);
            assert_eq!(
                logic.evaluate(&registry, xor),
                Ok(Some(BooleanValue::from(expected)))
            );
        }
    }

    #[test]
    fn single_row() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();

        // Row 3 sets both bits.
        let both = registry.dnf(&[a, b], 0b1000).unwrap();
        let formula = registry.dnf_formula(both).unwrap().unwrap();
        assert_eq!(registry.as_string(formula), "(a ∧ b)");

        // Row 0 sets neither.
        let neither = registry.dnf(&[a, b], 0b0001).unwrap();
        let formula = registry.dnf_formula(neither).unwrap().unwrap();
        assert_eq!(registry.as_string(formula), "(¬a ∧ ¬b)");
        assert_eq!(registry.as_string(neither), "(¬a ∧ ¬b)");
    }

    #[test]
    fn single_atom() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let positive = registry.dnf(&[a], 0b10).unwrap();

        assert_eq!(registry.dnf_formula(positive), Ok(Some(a)));
    }

    #[test]
    fn empty_index() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let nothing = registry.dnf(&[a], 0).unwrap();

        assert_eq!(registry.dnf_formula(nothing), Ok(None));

        let state = Assignment::from_iter([("a", BooleanValue::TRUE)]);
        let logic = BooleanLogic::new(&state);
        assert_eq!(logic.evaluate(&registry, nothing), Ok(None));
        assert_eq!(registry.simplify(nothing), Ok(None));
    }

    #[test]
    fn errors() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let not_a = registry.negation(a).unwrap();

        assert_eq!(
            registry.dnf(&[a, not_a], 1),
            Err(ErrorKind::Registry(RegistryError::NotAnAtom))
        );
        assert_eq!(registry.dnf_formula(a), Err(RegistryError::NotADnf));

        registry.remove("a");
        assert_eq!(
            registry.dnf(&[a], 1),
            Err(ErrorKind::Registry(RegistryError::UnknownKey))
        );
    }

    #[test]
    fn simplifies_to_generated_formula() {
        let mut registry = fresh_registry();
        let a = registry.atom("a").unwrap();
        let b = registry.atom("b").unwrap();
        let xor = registry.dnf(&[a, b], 6).unwrap();

        let generated = registry.dnf_formula(xor).unwrap();
        assert_eq!(registry.simplify(xor), Ok(generated));
        assert!(registry.structurally_eq(xor, generated.unwrap()));
    }
}

mod truth_tables {
    use super::*;

    #[test]
    fn random_indices_match_rows() {
        let mut rng = StdRng::seed_from_u64(0x0077);

        for _ in 0..64 {
            let count = rng.gen_range(2..=4);
            let rows = 1_u64 << count;
            let index = rng.gen_range(1..(1_u64 << rows));

            let mut registry = fresh_registry();
            let atoms = atoms(&mut registry, count);
            let dnf = registry.dnf(&atoms, index).unwrap();

            for row in 0..rows {
                let expected = BooleanValue::from((index >> row) & 1 == 1);
                let state = row_assignment(count, row);
                let logic = BooleanLogic::new(&state);
                assert_eq!(
                    logic.evaluate(&registry, dnf),
                    Ok(Some(expected)),
                    "atoms: {count}, index: {index:#b}, row: {row}"
                );
            }
        }
    }

    #[test]
    fn classical_rows_agree_in_four() {
        let mut rng = StdRng::seed_from_u64(0x0f0f);

        for _ in 0..16 {
            let count = 3;
            let index = rng.gen_range(1..256);

            let mut registry = fresh_registry();
            let atoms = atoms(&mut registry, count);
            let dnf = registry.dnf(&atoms, index).unwrap();

            for row in 0..8 {
                let boolean = row_assignment(count, row);
                let four = boolean
                    .iter()
                    .map(|(name, value)| (name.to_string(), FOURValue::from(value)))
                    .collect::<Assignment<_>>();

                let classical = BooleanLogic::new(&boolean).evaluate(&registry, dnf).unwrap();
                let belnap = FOURLogic::new(&four).evaluate(&registry, dnf).unwrap();
                assert_eq!(belnap, classical.map(FOURValue::from));
            }
        }
    }
}
