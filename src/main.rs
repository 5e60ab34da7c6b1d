use clap::Parser;
use log::info;
use simple_logger::init_with_level;
use stitch::{Args, stitch};

fn main() {
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting stitch with args: {}", args);

    if let Err(e) = stitch(args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
