use std::fs;

use clap::Parser;
use postfixer::translator::core::Translator;

/// postfixer evaluates infix arithmetic expressions by translating them into
/// postfix (Reverse Polish) form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells postfixer to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of the expression after a successful
    /// evaluation.
    #[arg(short, long)]
    postfix: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    match Translator::new(&expression) {
        Ok(mut translator) => {
            translator.print_result();
            if args.postfix && let Some(postfix) = translator.postfix_expression() {
                println!("Postfix: {postfix}");
            }
        },
        Err(e) => eprintln!("Error: {e}"),
    }
}
