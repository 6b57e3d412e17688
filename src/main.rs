mod cli;

pub(crate) use eolscan::{config, formatters, traversal, types};

fn main() {
    // Delegate to CLI runner; the error chain is printed here.
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
