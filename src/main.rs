use clap::Parser;
use infixcalc::evaluate;

/// infixcalc evaluates a single infix arithmetic expression and prints the
/// result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, e.g. "1 + 2 * (3 - 4)".
    expression: String,
}

fn main() {
    let args = Args::parse();

    match evaluate(&args.expression) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
