use std::process::ExitCode;

use clap::Parser;
use org_ascii_timeline::Layout;
use org_ascii_timeline::cli::{self, CommonArgs};

#[derive(Parser)]
#[command(
    name = "org-ascii-timeline",
    about = "Render timeline markup from stdin as an ASCII diagram"
)]
struct Args {
    /// Diagram layout
    #[arg(short, long, default_value_t, value_enum)]
    layout: Layout,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::exit_code(cli::run(args.layout, &args.common), &args.common)
}
