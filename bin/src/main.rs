use anyhow::Result;

mod app;
mod cli;
mod extraction;
mod output;

fn main() -> Result<()> {
    cli::run()
}
