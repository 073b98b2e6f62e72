use std::env;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use log::LevelFilter;
use myshell::core::config::Config;
use myshell::error::ShellError;
use myshell::flags::Flags;
use myshell::highlight::SyntaxHighlighter;
use myshell::shell::Shell;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let status = match run(&args) {
        Ok(status) => status,
        Err(e) => {
            let message = format!("myshell: {}", e);
            if io::stderr().is_terminal() {
                eprintln!("{}", SyntaxHighlighter::new().highlight_error(&message));
            } else {
                eprintln!("{}", message);
            }
            e.exit_status()
        }
    };

    std::process::exit(status.into());
}

fn run(args: &[String]) -> Result<u8, ShellError> {
    let mut flags = Flags::new();
    flags.parse(args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("myshell {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    init_logger(&flags);

    let mut shell = Shell::new();
    if let Some(status) = load_config(&mut shell, &flags)? {
        return Ok(status);
    }

    if let Some(script) = flags.script() {
        log::debug!("running script {}", script);
        let file = File::open(script)?;
        shell.run_batch(BufReader::new(file))
    } else if io::stdin().is_terminal() {
        shell.run()
    } else {
        shell.run_batch(io::stdin().lock())
    }
}

fn init_logger(flags: &Flags) {
    let mut builder = env_logger::Builder::new();
    builder.format_timestamp(None).format_target(false);

    if flags.is_set("quiet") {
        builder.filter_level(LevelFilter::Off);
    } else {
        let level = if flags.is_set("debug") {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        builder.filter_level(level).parse_default_env();
    }

    builder.init();
}

fn load_config(shell: &mut Shell, flags: &Flags) -> Result<Option<u8>, ShellError> {
    if flags.is_set("norc") {
        return Ok(None);
    }

    let explicit = flags.get_value("config");
    let config = match explicit {
        Some(path) => Config::with_rc_path(path),
        None => match Config::new() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("no startup file: {}", e);
                return Ok(None);
            }
        },
    };

    log::debug!("loading startup file {}", config.rc_path().display());
    match shell.load_config(&config) {
        Err(ShellError::ConfigError(e)) if explicit.is_none() => {
            log::warn!("skipping startup file: {}", e);
            Ok(None)
        }
        result => result,
    }
}
