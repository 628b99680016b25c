// src/bin/cli.rs
use veranda_vin::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    veranda_vin::log::init();

    let params = cli::parse_args(std::env::args().skip(1))?;
    cli::run(params)?;
    Ok(())
}
