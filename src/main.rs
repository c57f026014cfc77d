use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use shunt::{ast::Expr, compute, interpreter::lexer::join, to_postfix};
use simple_logger::SimpleLogger;

/// shunt evaluates arithmetic expressions built from numbers, `+ - * / ^` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line. Blank lines and lines
    /// starting with `#` are skipped.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Also prints the postfix (reverse Polish) form of each expression.
    #[arg(long)]
    rpn: bool,

    /// Also prints the fully parenthesised form of each expression.
    #[arg(long)]
    tree: bool,

    /// Raises log verbosity. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Silences all log output.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Expressions to evaluate. Read from stdin when neither these nor
    /// `--file` are given.
    expressions: Vec<String>,
}

impl Args {
    const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn read_expressions(args: &Args) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let lines = if let Some(path) = &args.file {
        fs::read_to_string(path).map_err(|e| {
                                    format!("Failed to read the input file '{}': {e}",
                                            path.display())
                                })?
                                .lines()
                                .map(str::to_string)
                                .collect::<Vec<_>>()
    } else if !args.expressions.is_empty() {
        return Ok(args.expressions.clone());
    } else {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    Ok(lines.into_iter()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .collect())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level()).init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    let expressions = match read_expressions(&args) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        },
    };
    log::info!("evaluating {} expression(s)", expressions.len());

    let mut failed = false;
    for expression in &expressions {
        match compute(expression) {
            Ok(value) => {
                println!("{expression} = {value}");

                if (args.rpn || args.tree)
                   && let Ok(postfix) = to_postfix(expression)
                {
                    if args.rpn {
                        println!("  rpn:  {}", join(&postfix));
                    }
                    if args.tree
                       && let Ok(tree) = Expr::from_postfix(&postfix)
                    {
                        println!("  tree: {tree}");
                    }
                }
            },
            Err(e) => {
                eprintln!("{expression}: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
