use conch::config::ShellConfig;
use conch::flags::Flags;
use conch::shell::Shell;

fn init_logging(flags: &Flags) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if flags.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<(), conch::error::ShellError> {
    let flags: Flags = argh::from_env();

    if flags.version {
        println!("conch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    let config = ShellConfig::from_flags(&flags);
    log::debug!("history file: {}", config.history_file.display());

    let mut shell = Shell::new(config)?;
    let code = shell.run()?;
    std::process::exit(code);
}
