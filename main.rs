use std::io;

use clap::Parser;
use fib_term::cli::{init_logging, CliArgs};
use fib_term::write_terms;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_terms(&mut out, &args.report())?;
    Ok(())
}
