use chips::application::{split, Session, SplitOptions};
use chips::cli::{format_snapshot, format_tag_list, parse_script, Cli, Commands, ScriptCommand};
use chips::domain::tags::join;
use chips::error::{ChipsError, Result};
use chips::infrastructure::{init_logging, Config, LogLevel};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &current_dir)?;

    // --log-level beats CHIPS_LOG, which beats the config file
    let level = match cli.log_level.as_deref() {
        Some(level) => LogLevel::from_str(level).map_err(ChipsError::Config)?,
        None => config.effective_log_level()?,
    };
    init_logging(level);

    match cli.command {
        Commands::Split { raw, drop_empty } => {
            let raw = match raw {
                Some(raw) => raw,
                None => read_stdin_trimmed()?,
            };

            let tags = split(&raw, SplitOptions { drop_empty });
            print!("{}", format_tag_list(&tags));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Join { tags } => {
            println!("{}", join(&tags));
            Ok(())
        }
        Commands::Session {
            value,
            script,
            output,
        } => {
            let source = match script {
                Some(path) => fs::read_to_string(&path)?,
                None => read_stdin()?,
            };

            run_session(&value, &source, &config, output.as_deref())
        }
    }
}

fn run_session(value: &str, source: &str, config: &Config, output: Option<&Path>) -> Result<()> {
    let commands = parse_script(source)?;
    let mut session = Session::new(value, config.layout.clone());

    for command in commands {
        match command {
            ScriptCommand::Show => print!("{}", format_snapshot(&session.snapshot())),
            ScriptCommand::Event(event) => session.handle(event)?,
        }
    }

    let final_value = session.snapshot().value;
    if let Some(path) = output {
        fs::write(path, format!("{}\n", final_value))?;
    }
    println!("{}", final_value);

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Piped input usually ends with a newline that is not part of the value
fn read_stdin_trimmed() -> Result<String> {
    let buffer = read_stdin()?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}
