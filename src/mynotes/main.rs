use clap::Parser;
use colored::Colorize;
use mynotes::config::NotesConfig;
use mynotes::error::{NotesError, Result};
use mynotes::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

mod cli;
use cli::menu::{self, Console, BANNER};
use cli::setup::Cli;

fn main() {
    if let Err(e) = run() {
        match e {
            NotesError::AuthenticationFailed(_) => {
                println!("{}", "Login failed. Incorrect password.".red())
            }
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let config = NotesConfig::load(&data_dir)?;
    log::debug!("using data directory {}", data_dir.display());

    let store = FileStore::new(data_dir).with_config(&config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.say(BANNER)?;
    console.say("")?;

    let mut api = menu::login(&mut console, store, cli.username, cli.password)?;
    console.say(&"Login successful!".green().to_string())?;

    menu::load_on_start(&mut console, &mut api)?;
    menu::run_menu(&mut console, &mut api, &config.end_marker)?;
    Ok(())
}
