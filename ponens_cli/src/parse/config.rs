use clap::ArgMatches;

use ponens::config::{Config, Novelty};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(limit)) = args.try_get_one::<usize>("variable_limit") {
        the_config.variable_limit.set(*limit);
    };

    if let Ok(Some(novelty)) = args.try_get_one::<Novelty>("novelty") {
        the_config.novelty.value = *novelty
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("keep_tautologies") {
        the_config.tautology_elimination.value = false
    };

    the_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::cli::cli;

    #[test]
    fn defaults() {
        let matches = cli().try_get_matches_from(["ponens"]).unwrap();
        let config = config_from_args(&matches);

        assert_eq!(config.variable_limit.value, 20);
        assert_eq!(config.novelty.value, Novelty::Equivalence);
        assert!(config.tautology_elimination.value);
    }

    #[test]
    fn from_args() {
        let matches = cli()
            .try_get_matches_from([
                "ponens",
                "--variable-limit",
                "8",
                "--novelty",
                "entailment",
                "--keep-tautologies",
            ])
            .unwrap();
        let config = config_from_args(&matches);

        assert_eq!(config.variable_limit.value, 8);
        assert_eq!(config.novelty.value, Novelty::Entailment);
        assert!(!config.tautology_elimination.value);
    }
}
