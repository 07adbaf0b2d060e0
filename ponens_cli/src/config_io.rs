use std::io::IsTerminal;

use clap::ArgMatches;

/// Configuration of input and output, as opposed to the configuration of a context.
#[derive(Clone)]
pub struct ConfigIO {
    /// Print the banner and prompt.
    pub chatty: bool,

    /// Style the prompt and errors.
    pub styled: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            chatty: true,
            styled: false,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(true)) = args.try_get_one::<bool>("quiet") {
            the_config.chatty = false
        };

        the_config.styled = std::io::stdout().is_terminal();

        the_config
    }
}
