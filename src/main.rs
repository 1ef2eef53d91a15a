use anyhow::ensure;
use file_commands::config::Options;
use file_commands::{Interpreter, Registry};

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(options.log_level.as_str()),
    )
    .init();

    let env = options.environment();
    ensure!(
        env.current_dir.is_dir(),
        "{} is not a directory",
        env.current_dir.display()
    );
    log::info!("working directory: {}", env.current_dir.display());

    Interpreter::new(Registry::default(), env)
        .with_prompt(options.prompt)
        .with_history(options.history)
        .repl()
}
