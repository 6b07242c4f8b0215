// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use dynasty_hub::{cli, config::options::AppOptions};

fn main() -> Result<()> {
    color_eyre::install()?;

    let inv = cli::parse_args(std::env::args().skip(1), AppOptions::load())
        .map_err(|e| eyre!("{e}\n\nRun with --help for usage."))?;

    cli::run(inv).map_err(|e| {
        dynasty_hub::loge!("CLI: {}", e);
        eyre!("{e}")
    })
}
