use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use climber::{ast::ast::Expr, parse_source, parser::{lookups::PriorityTable, parser::ExprParser}, render_error};

#[derive(Parser)]
#[command(name = "climber")]
#[command(version, about = "Parse an expression and print its tree", long_about = None)]
struct Cli {
    /// The expression to parse
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    expression: Option<String>,

    /// Read the expression from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print an indented tree instead of the parenthesized form
    #[arg(short, long)]
    tree: bool,

    /// Operator levels, loosest first, e.g. "+ -; * /"
    #[arg(short, long)]
    priorities: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let (source, file_name) = match (&cli.expression, &cli.file) {
        (_, Some(path)) => match read_to_string(path) {
            Ok(contents) => (contents, path.to_string_lossy().to_string()),
            Err(err) => {
                eprintln!("Error: failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        (Some(expression), None) => (expression.clone(), String::from("<expr>")),
        (None, None) => unreachable!("clap requires an expression or a file"),
    };

    let parser = match &cli.priorities {
        Some(levels) => match levels.parse::<PriorityTable>() {
            Ok(priorities) => ExprParser::with_priorities(priorities),
            Err(error) => {
                eprint!("{}", render_error(&error, levels));
                return ExitCode::FAILURE;
            }
        },
        None => ExprParser::default(),
    };

    let start = Instant::now();
    let result = parse_source(&source, Some(file_name), &parser);
    log::info!("Parsed in {:?}", start.elapsed());

    match result {
        Ok(expr) => {
            print_expr(&expr, cli.tree);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}

fn print_expr(expr: &Expr, tree: bool) {
    if tree {
        print!("{}", expr.tree());
    } else {
        println!("{}", expr);
    }
}
