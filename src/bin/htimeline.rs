use std::process::ExitCode;

use clap::Parser;
use org_ascii_timeline::Layout;
use org_ascii_timeline::cli::{self, CommonArgs};

#[derive(Parser)]
#[command(
    name = "htimeline",
    about = "Render timeline markup from stdin as a chain of boxes"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::exit_code(cli::run(Layout::Horizontal, &args.common), &args.common)
}
