// exprtree: arithmetic expression parser and step-through evaluator

use std::io::{self, BufRead, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use exprtree::interpreter::{self, engine::Interpreter};
use exprtree::parser::lexer::Lexer;
use exprtree::parser::parse::Parser;
use exprtree::ui::App;

/// Snapshot history memory limit for the viewer (64 MB)
const SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

struct Options {
    show_tokens: bool,
    view: bool,
    expression: Option<String>,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens] [--view] [EXPRESSION...]", program_name);
    eprintln!();
    eprintln!("Without an EXPRESSION, one line is read from standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tokens    Print the token stream before parsing");
    eprintln!("  --view      Step through the evaluation in a terminal UI");
    eprintln!("  -h, --help  Show this message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} \"2 + 3 * 4\"", program_name);
    eprintln!("  {} --view \"(1 + 2) * (3 - 4) / 5\"", program_name);
}

fn parse_args(args: &[String]) -> Options {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("exprtree");
    let mut options = Options {
        show_tokens: false,
        view: false,
        expression: None,
    };
    let mut words = Vec::new();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" => options.show_tokens = true,
            "--view" => options.view = true,
            "-h" | "--help" => {
                print_usage(program_name);
                std::process::exit(0);
            }
            // A lone '-' is an operator word, so only double-dash words are flags
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            word => words.push(word.to_string()),
        }
    }

    if !words.is_empty() {
        options.expression = Some(words.join(" "));
    }
    options
}

fn read_expression() -> io::Result<String> {
    print!("Enter an arithmetic expression: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    let source = match options.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };

    let tokens = Lexer::new(&source).tokenize();
    if options.show_tokens {
        println!("Tokens:");
        for token in &tokens {
            println!(
                "  {:>4}  {:<11} {}",
                token.location.column,
                format!("{:?}", token.kind),
                token.text
            );
        }
    }

    if options.view {
        eprintln!("Parsing...");
    }
    let expr = match Parser::new(&source).parse() {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("{}", e.render_with_source(&source));
            std::process::exit(1);
        }
    };

    if !options.view {
        println!("Syntax Tree:");
        print!("{}", expr.render_tree());
        match interpreter::evaluate(&expr) {
            Ok(value) => println!("Result: {}", value),
            Err(e) => {
                eprintln!("Runtime error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    eprintln!(
        "Parsed successfully. Tree has {} nodes (depth {}).",
        expr.node_count(),
        expr.depth()
    );

    let mut interpreter = Interpreter::new(expr, SNAPSHOT_LIMIT);

    // Run evaluation to build history
    eprintln!("Evaluating...");
    match interpreter.run() {
        Ok(value) => {
            eprintln!("Evaluation completed: {}", value);
            eprintln!("Total snapshots: {}", interpreter.total_snapshots());
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            eprintln!("Entering TUI with partial evaluation history...");
        }
    }

    // Rewind to the beginning for TUI
    if let Err(e) = interpreter.rewind_to_start() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter, source, tokens);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
