use clap::{builder::RangedU64ValueParser, value_parser, Arg, Command};

use ponens::config::{Config, Novelty};

pub fn cli() -> Command {
    let defaults = Config::default();
    let (limit_min, limit_max) = defaults.variable_limit.min_max();

    Command::new("ponens")
        .about("Tells, asks, and reasons with propositional formulas")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("variable_limit")
            .long("variable-limit")
            .value_parser(RangedU64ValueParser::<usize>::new().range(limit_min as u64..=limit_max as u64))
            .required(false)
            .num_args(1)
            .help(format!("The most distinct variables a formula may contain.
Default: {}

Satisfiability is decided by enumerating every assignment, so each additional variable doubles the work.", defaults.variable_limit.value)))

        .arg(Arg::new("novelty")
            .long("novelty")
            .value_parser(novelty_parser)
            .required(false)
            .num_args(1)
            .help(format!("When a told formula is already known.
Default: {}

equivalence: the formula is equivalent to some single formula in the knowledge base.
entailment:  the knowledge base, taken together, entails the formula.", defaults.novelty.value)))

        .arg(Arg::new("keep_tautologies")
            .long("keep-tautologies")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Keep clauses which contain some literal and its negation when converting to CNF."))

        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Do not print the banner or prompt."))
}

fn novelty_parser(arg: &str) -> Result<Novelty, std::io::Error> {
    arg.parse::<Novelty>().map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unknown novelty variant, expected 'equivalence' or 'entailment'",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_bounded() {
        assert!(cli()
            .try_get_matches_from(["ponens", "--variable-limit", "12"])
            .is_ok());
        assert!(cli()
            .try_get_matches_from(["ponens", "--variable-limit", "64"])
            .is_err());
    }

    #[test]
    fn novelty_variants() {
        let matches = cli()
            .try_get_matches_from(["ponens", "--novelty", "entailment"])
            .unwrap();
        assert_eq!(
            matches.get_one::<Novelty>("novelty"),
            Some(&Novelty::Entailment)
        );

        assert!(cli()
            .try_get_matches_from(["ponens", "--novelty", "syntax"])
            .is_err());
    }
}
