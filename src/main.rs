mod cli;
mod config;
mod loader;
mod model;
mod report;
mod util;

#[cfg(test)]
mod scenarios;

use anyhow::Result;

fn main() -> Result<()> {
    // RUST_LOG overrides; quiet by default so the summary stays readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cli::parse_args(&args)? {
        cli::Command::Help => cli::print_help(),
        cli::Command::Generate(generate) => cli::handle_generate(generate)?,
    }

    Ok(())
}
