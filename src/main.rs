mod cli;
mod core;
mod report;

fn main() -> anyhow::Result<std::process::ExitCode> {
    cli::run::entry()
}
