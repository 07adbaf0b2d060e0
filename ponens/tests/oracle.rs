use std::collections::HashMap;

use ponens::{
    config::Config,
    oracle::{evaluate, Enumeration, Oracle},
    parser::parse,
    types::err::{ErrorKind, OracleError},
};

fn formula(text: &str) -> ponens::structures::formula::Formula {
    parse(text).unwrap()
}

mod truth_tables {
    use super::*;

    #[test]
    fn implication() {
        let oracle = Enumeration::default();
        let table = oracle.truth_table(&formula("p implies q")).unwrap();

        assert_eq!(table.atoms(), ["p", "q"]);

        let rows = table
            .rows()
            .iter()
            .map(|(assignment, value)| (assignment.values().to_vec(), *value))
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            vec![
                (vec![false, false], true),
                (vec![false, true], true),
                (vec![true, false], false),
                (vec![true, true], true),
            ]
        );
    }

    #[test]
    fn first_appearance_varies_slowest() {
        let oracle = Enumeration::default();
        let table = oracle.truth_table(&formula("z and (a or z) and m")).unwrap();

        assert_eq!(table.atoms(), ["z", "a", "m"]);
        assert_eq!(table.len(), 8);

        let (assignment, _) = &table.rows()[4];
        assert_eq!(assignment.to_string(), "z=1, a=0, m=0");

        let satisfying = table
            .rows()
            .iter()
            .filter(|(_, value)| *value)
            .map(|(assignment, _)| assignment.to_string())
            .collect::<Vec<_>>();
        assert_eq!(satisfying, vec!["z=1, a=0, m=1", "z=1, a=1, m=1"]);
    }

    #[test]
    fn biconditional() {
        let oracle = Enumeration::default();
        let table = oracle.truth_table(&formula("p iff q")).unwrap();
        assert_eq!(table.values().collect::<Vec<_>>(), vec![true, false, false, true]);
    }

    #[test]
    fn variable_limit() {
        let mut config = Config::default();
        config.variable_limit.value = 3;
        let oracle = Enumeration::from_config(&config);

        assert_eq!(
            oracle.truth_table(&formula("a or b or c or d")),
            Err(ErrorKind::Oracle(OracleError::TooManyVariables {
                count: 4,
                limit: 3
            }))
        );
        assert_eq!(oracle.truth_table(&formula("a or b or c or a")).map(|t| t.len()), Ok(8));
    }
}

mod decisions {
    use super::*;

    #[test]
    fn satisfiability() {
        let oracle = Enumeration::default();

        assert_eq!(oracle.is_satisfiable(&[&formula("p and not p")]), Ok(false));
        assert_eq!(oracle.is_satisfiable(&[&formula("p and not q")]), Ok(true));
        assert_eq!(
            oracle.is_satisfiable(&[&formula("p or q"), &formula("not p"), &formula("not q")]),
            Ok(false)
        );
    }

    #[test]
    fn tautology() {
        let oracle = Enumeration::default();

        assert_eq!(oracle.is_tautology(&formula("p implies p")), Ok(true));
        assert_eq!(
            oracle.is_tautology(&formula("(p implies q) iff (not q implies not p)")),
            Ok(true)
        );
        assert_eq!(oracle.is_tautology(&formula("p implies q")), Ok(false));
    }

    #[test]
    fn models() {
        let oracle = Enumeration::default();

        let model = oracle
            .find_model(&[&formula("p or q"), &formula("not p")])
            .unwrap()
            .expect("a model");
        assert_eq!(model.to_string(), "p=0, q=1");

        assert_eq!(oracle.find_model(&[&formula("p iff not p")]), Ok(None));
    }

    #[test]
    fn entailment() {
        let oracle = Enumeration::default();
        let premises = [formula("p implies q"), formula("q implies r")];
        let premises = premises.iter().collect::<Vec<_>>();

        assert_eq!(oracle.entails(&premises, &formula("p implies r")), Ok(true));
        assert_eq!(oracle.entails(&premises, &formula("r implies p")), Ok(false));
        assert_eq!(oracle.entails(&[], &formula("p or not p")), Ok(true));
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn total_valuation() {
        let valuation = HashMap::from([
            ("p".to_string(), true),
            ("q".to_string(), false),
            ("r".to_string(), true),
        ]);

        assert_eq!(evaluate(&formula("p and (q or r)"), &valuation), Ok(true));
        assert_eq!(evaluate(&formula("p iff q"), &valuation), Ok(false));
        assert_eq!(evaluate(&formula("q implies not r"), &valuation), Ok(true));
    }

    #[test]
    fn missing_variable() {
        let valuation = HashMap::from([("p".to_string(), false)]);

        assert_eq!(
            evaluate(&formula("p and q"), &valuation),
            Err(ErrorKind::Oracle(OracleError::Unassigned("q".to_string())))
        );
    }
}
