use ponens::{
    context::Context,
    parser::parse,
    reports::{InferenceReport, TellReport},
    structures::formula::Formula,
    types::err::{ErrorKind, InferenceError},
};

fn told(report: InferenceReport) -> (String, TellReport) {
    match report {
        InferenceReport::Told { conclusion, report } => (conclusion.to_string(), report),
        InferenceReport::Contradiction => panic!("expected a conclusion"),
    }
}

fn inference_error(result: Result<InferenceReport, ErrorKind>) -> InferenceError {
    match result {
        Err(ErrorKind::Inference(e)) => e,
        other => panic!("expected an inference error, found {other:?}"),
    }
}

mod modus_ponens {
    use super::*;

    #[test]
    fn learned() {
        let mut ctx = Context::default();

        let report = ctx.modus_ponens_str("p", "p implies q").unwrap();
        assert_eq!(
            report,
            InferenceReport::Told {
                conclusion: Formula::var("q"),
                report: TellReport::Learned
            }
        );
        assert_eq!(ctx.formulas(), [Formula::var("q")]);
    }

    #[test]
    fn compound_consequent() {
        let mut ctx = Context::default();

        let report = ctx
            .modus_ponens_str("rain", "rain implies (wet and not dry)")
            .unwrap();
        assert_eq!(
            told(report),
            ("wet & ~dry".to_string(), TellReport::Learned)
        );
    }

    #[test]
    fn already_known() {
        let mut ctx = Context::default();
        assert_eq!(ctx.tell_str("q"), Ok(TellReport::Learned));

        let report = ctx.modus_ponens_str("p", "p implies q").unwrap();
        assert_eq!(told(report), ("q".to_string(), TellReport::AlreadyKnown));
        assert_eq!(ctx.formulas().len(), 1);
    }

    #[test]
    fn not_believed() {
        let mut ctx = Context::default();
        assert_eq!(ctx.tell_str("not q"), Ok(TellReport::Learned));

        let report = ctx.modus_ponens_str("p", "p implies q").unwrap();
        assert_eq!(told(report), ("q".to_string(), TellReport::Rejected));
        assert_eq!(ctx.formulas(), [parse("not q").unwrap()]);
    }

    #[test]
    fn equivalent_premise() {
        let mut ctx = Context::default();

        let report = ctx
            .modus_ponens_str("q and p", "(p and q) implies r")
            .unwrap();
        assert_eq!(told(report), ("r".to_string(), TellReport::Learned));
    }

    #[test]
    fn not_an_implication() {
        let mut ctx = Context::default();

        assert_eq!(
            inference_error(ctx.modus_ponens_str("p", "(p implies q) and r")),
            InferenceError::NotAnImplication(parse("(p implies q) and r").unwrap())
        );
        assert_eq!(
            inference_error(ctx.modus_ponens_str("p", "p iff q")),
            InferenceError::NotAnImplication(parse("p iff q").unwrap())
        );
        assert!(ctx.formulas().is_empty());
    }

    #[test]
    fn antecedent_mismatch() {
        let mut ctx = Context::default();

        assert_eq!(
            inference_error(ctx.modus_ponens_str("r", "p implies q")),
            InferenceError::AntecedentMismatch {
                premise: Formula::var("r"),
                antecedent: Formula::var("p"),
            }
        );
        assert!(ctx.formulas().is_empty());
    }

    #[test]
    fn mismatch_message() {
        let mut ctx = Context::default();

        let error = ctx.modus_ponens_str("r", "p implies q").unwrap_err();
        assert_eq!(
            error.to_string(),
            "premise r does not match implication antecedent p"
        );
    }

    #[test]
    fn syntax_error() {
        let mut ctx = Context::default();
        assert!(matches!(
            ctx.modus_ponens_str("p", "p implies"),
            Err(ErrorKind::Parse(_))
        ));
    }
}

mod resolution {
    use super::*;

    #[test]
    fn resolvent() {
        let mut ctx = Context::default();

        let report = ctx.resolution_str("p or q", "not p or r").unwrap();
        assert_eq!(told(report), ("q | r".to_string(), TellReport::Learned));
        assert_eq!(ctx.formulas().len(), 1);
    }

    #[test]
    fn resolvent_already_known() {
        let mut ctx = Context::default();
        assert_eq!(ctx.tell_str("r or q"), Ok(TellReport::Learned));

        let report = ctx.resolution_str("p or q", "not p or r").unwrap();
        assert_eq!(told(report), ("q | r".to_string(), TellReport::AlreadyKnown));
    }

    #[test]
    fn resolvent_not_believed() {
        let mut ctx = Context::default();
        assert_eq!(ctx.tell_str("not q and not r"), Ok(TellReport::Learned));

        let report = ctx.resolution_str("p or q", "not p or r").unwrap();
        assert_eq!(told(report), ("q | r".to_string(), TellReport::Rejected));
        assert_eq!(ctx.formulas().len(), 1);
    }

    #[test]
    fn either_order() {
        let mut ctx = Context::default();

        let report = ctx.resolution_str("not p or r", "q or p").unwrap();
        assert_eq!(told(report).0, "q | r");
    }

    #[test]
    fn duplicates_removed() {
        let mut ctx = Context::default();

        let report = ctx.resolution_str("p or q", "not p or q").unwrap();
        assert_eq!(told(report), ("q".to_string(), TellReport::Learned));
    }

    #[test]
    fn first_pivot_in_canonical_order() {
        let mut ctx = Context::default();

        let report = ctx.resolution_str("q or p", "not q or not p").unwrap();
        assert_eq!(told(report).0, "q | ~q");
    }

    #[test]
    fn empty_resolvent() {
        let mut ctx = Context::default();
        assert_eq!(ctx.tell_str("s"), Ok(TellReport::Learned));

        assert_eq!(
            ctx.resolution_str("p", "not p"),
            Ok(InferenceReport::Contradiction)
        );
        assert_eq!(ctx.formulas(), [Formula::var("s")]);
    }

    #[test]
    fn no_complementary_literals() {
        let mut ctx = Context::default();

        assert_eq!(
            inference_error(ctx.resolution_str("p or q", "r or q")),
            InferenceError::NoComplementaryLiterals
        );
        assert_eq!(
            ctx.resolution_str("p", "q").unwrap_err().to_string(),
            "no complementary literals found; resolution not applicable"
        );
        assert!(ctx.formulas().is_empty());
    }

    #[test]
    fn not_a_clause() {
        let mut ctx = Context::default();

        assert_eq!(
            inference_error(ctx.resolution_str("p and q", "not p")),
            InferenceError::NotAClause(parse("p and q").unwrap())
        );
        assert_eq!(
            inference_error(ctx.resolution_str("p or not not q", "not p")),
            InferenceError::NotAClause(parse("p or not not q").unwrap())
        );
        assert!(ctx.formulas().is_empty());
    }
}
