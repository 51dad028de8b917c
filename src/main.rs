mod cli;
mod config;
mod error;
mod layout;
mod logging;
mod runner;
mod tasks;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
