// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use textprofile::{Args, init_logging, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
