use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = ronix::cli::run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
