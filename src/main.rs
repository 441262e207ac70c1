use clap::Parser;
use std::path::PathBuf;

/// Edit IQ gains, IQ skills and IQ settings of an Explorers of Sky ROM project.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Project folder containing project.json5.
    project: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    iqed::run_gui(args.project)
}
