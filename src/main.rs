use clap::Parser;

/// Terminal form builder with block-based editing
#[derive(Parser)]
#[command(name = "bform", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = blockform::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
