//! CLI argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "new-day")]
#[command(about = "Creates the files for a given day from templates", version)]
pub(crate) struct Cli {
    /// Day number to scaffold (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) day_number: u32,

    /// Challenge year the files belong to
    #[arg(long, default_value_t = 2023)]
    pub(crate) year: i32,
}
