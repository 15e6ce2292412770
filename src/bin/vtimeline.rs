use std::process::ExitCode;

use clap::Parser;
use org_ascii_timeline::Layout;
use org_ascii_timeline::cli::{self, CommonArgs};

#[derive(Parser)]
#[command(
    name = "vtimeline",
    about = "Render timeline markup from stdin as a two-sided vertical timeline"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::exit_code(cli::run(Layout::Vertical, &args.common), &args.common)
}
