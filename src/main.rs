mod cli;
mod consts;
mod error;
mod paths;
mod scaffold;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = scaffold::go(cli.day_number, cli.year) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
