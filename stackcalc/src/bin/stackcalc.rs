use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stackcalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Postfix calculator", long_about = None)]
struct Args {
    /// Tokens to evaluate once, eg: 3 4 + 2 ×
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Load a saved program before evaluating
    #[arg(long)]
    load: Option<PathBuf>,

    /// Refuse programs with unrecognized tokens
    #[arg(long)]
    strict: bool,

    /// Read and write numbers as 1.234,5
    #[arg(long)]
    decimal_comma: bool,

    /// More log output, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

mod repl {
    use stackcalc::{Evaluator, Program};

    pub fn show(result: Option<f64>) -> String {
        match result {
            Some(x) => x.to_string(),
            None => format!("?"),
        }
    }

    pub fn import(brain: &mut Evaluator, program: &Program, strict: bool) -> Result<(), String> {
        if strict {
            brain.load_program(program).map_err(|e| e.to_string())
        } else {
            brain.set_program(program);
            Ok(())
        }
    }

    // numbers are operands, anything else is tried as an operation
    pub fn feed(brain: &mut Evaluator, program: &Program) -> Option<f64> {
        let mut result = brain.evaluate();
        for token in program.tokens() {
            result = match brain.format().parse(token) {
                Some(x) => brain.push_operand(x),
                None => brain.perform_operation(token),
            };
        }
        result
    }

    pub fn command(brain: &mut Evaluator, input: &str, strict: bool) -> Result<bool, String> {
        let mut words = input.split_whitespace();
        match (words.next(), words.next()) {
            (Some(":quit"), None) | (Some(":q"), None) => return Ok(false),
            (Some(":program"), None) => println!("{}", brain.program()),
            (Some(":clear"), None) => brain.set_program(&Program::default()),
            (Some(":save"), Some(path)) => {
                brain.program().save(path).map_err(|e| e.to_string())?;
            }
            (Some(":load"), Some(path)) => {
                let program = Program::load(path).map_err(|e| e.to_string())?;
                import(brain, &program, strict)?;
                println!("{}", show(brain.evaluate()));
            }
            _ => println!("Commands: :program :save <file> :load <file> :clear :quit"),
        }
        Ok(true)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    use stackcalc::{Evaluator, NumberFormat, Program};

    let args = Args::parse();
    init_logging(args.verbose);

    let format = if args.decimal_comma { NumberFormat::comma() } else { NumberFormat::new() };
    let mut brain = Evaluator::with_format(format);
    if let Some(path) = &args.load {
        let program = Program::load(path).map_err(|e| e.to_string())?;
        repl::import(&mut brain, &program, args.strict)?;
        tracing::info!("loaded {} tokens from {}", program.len(), path.display());
    }

    if !args.tokens.is_empty() {
        let result = repl::feed(&mut brain, &Program(args.tokens));
        println!("{} = {}", brain.program(), repl::show(result));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = dirs::home_dir().map(|h| h.join(".stackcalc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            tracing::info!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                if line.trim_start().starts_with(':') {
                    match repl::command(&mut brain, &line, args.strict) {
                        Ok(true) => (),
                        Ok(false) => break,
                        Err(e) => println!("Error: {}", e),
                    }
                } else {
                    println!("{}", repl::show(repl::feed(&mut brain, &Program::parse_line(&line))));
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
