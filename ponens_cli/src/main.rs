use std::io::BufRead;

use ponens::context::Context;

mod commands;
mod config_io;
mod parse;
mod window;

use commands::{handle_message, Reply};
use config_io::ConfigIO;
use window::Window;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    #[cfg(feature = "log")]
    log::info!("Starting with {config:?}");

    let mut the_context = Context::from_config(config);
    let mut window = Window::new(config_io);

    if let Err(e) = session(&mut the_context, &mut window) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Reads commands from stdin until exit, or the end of input.
fn session(the_context: &mut Context, window: &mut Window) -> std::io::Result<()> {
    window.banner()?;

    let mut lines = std::io::stdin().lock().lines();
    loop {
        window.prompt()?;

        let Some(line) = lines.next() else {
            return window.reply(&Reply::Goodbye);
        };

        let reply = handle_message(the_context, &line?);
        window.reply(&reply)?;

        if reply == Reply::Goodbye {
            return Ok(());
        }
    }
}
