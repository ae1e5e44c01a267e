mod cli;
mod error;
mod fs;
mod layout;
mod logging;
mod runner;
mod scaffold;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
