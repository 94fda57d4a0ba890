use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use beer::{run, strip_line_ending, AstPrinter, BeerError, Lexer, Token};
use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};

const STDIN_NAME: &str = "<stdin>";
const EXPR_NAME: &str = "<expr>";

#[derive(Debug, Parser)]
#[command(
    name = "beer",
    version,
    about = "Lexer and parser for the Beer arithmetic expression language",
    long_about = "beer reads arithmetic expressions over integers and floats and prints\n\
        the syntax tree, or a report pointing at the first illegal character or\n\
        syntax error.\n\n\
        EXAMPLES:\n\
        \n  beer                          Start the interactive shell\n\
        \n  beer parse -e '2 + 3 * 4'     Parse one expression\n\
        \n  beer parse --json calc.beer   Print the tree of a file as JSON\n\
        \n  echo '1 $ 2' | beer tokens    List the tokens read from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Prompt shown by the interactive shell
    #[arg(long, env = "BEER_PROMPT", default_value = "Beer: ", global = true)]
    prompt: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start an interactive Read-Eval-Print Loop
    #[command(
        long_about = "Start an interactive shell that parses one expression per line.\n\n\
            Commands:\n\
            \n  :help           Show available commands\n\
            \n  :tokens <expr>  Show the tokens of an expression\n\
            \n  :json <expr>    Show the tree of an expression as JSON\n\
            \n  :tree <expr>    Show the tree of an expression, one node per line\n\
            \n  :quit           Exit the shell (also :q, :exit)"
    )]
    Repl,

    /// Parse a file, stdin or an expression and print its syntax tree
    Parse(ParseArgs),

    /// Print the tokens of a file, stdin or an expression
    Tokens(TokensArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Input source file (reads from stdin if neither FILE nor --expr is given)
    #[arg(value_name = "FILE", conflicts_with = "expr")]
    input: Option<PathBuf>,

    /// Source text given on the command line
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    expr: Option<String>,
}

#[derive(Debug, Args, Clone)]
struct ParseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print the tree as JSON
    #[arg(long, conflicts_with = "tree")]
    json: bool,

    /// Print the tree one node per line
    #[arg(long)]
    tree: bool,
}

#[derive(Debug, Args, Clone)]
struct TokensArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Keep scanning after an illegal character and report all of them
    #[arg(long = "all-errors")]
    all_errors: bool,
}

/// Tree output styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
    Tree,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over the -v flags
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Returns `(source_name, text)` for the selected input
fn read_source(input: &InputArgs) -> Result<(String, String), String> {
    if let Some(expr) = &input.expr {
        return Ok((EXPR_NAME.to_string(), expr.clone()));
    }
    let (name, text) = if let Some(path) = &input.input {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))?;
        (path.display().to_string(), text)
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        (STDIN_NAME.to_string(), buf)
    };
    Ok((name, strip_line_ending(&text).to_string()))
}

fn format_tree(ast: &beer::ExpressionNode<'_>, mode: OutputMode) -> Result<String, String> {
    match mode {
        OutputMode::Text => Ok(ast.to_string()),
        OutputMode::Tree => Ok(AstPrinter::new().print(ast).trim_end().to_string()),
        OutputMode::Json => beer_ast::to_json(ast).map_err(|e| format!("failed to encode JSON: {e}")),
    }
}

/// Token kinds in one bracketed list, as the shell shows them
fn format_token_list(tokens: &[Token<'_>]) -> String {
    let kinds: Vec<String> = tokens.iter().map(|t| t.kind.to_string()).collect();
    format!("[{}]", kinds.join(", "))
}

fn run_parse(args: &ParseArgs) -> i32 {
    let (name, text) = match read_source(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let mode = if args.json {
        OutputMode::Json
    } else if args.tree {
        OutputMode::Tree
    } else {
        OutputMode::Text
    };

    let code = match run(&name, &text) {
        Ok(ast) => match format_tree(&ast, mode) {
            Ok(out) => {
                println!("{out}");
                0
            }
            Err(e) => {
                eprintln!("error: {e}");
                2
            }
        },
        Err(err) => {
            eprintln!("{}", err.report());
            1
        }
    };
    code
}

fn run_tokens(args: &TokensArgs) -> i32 {
    let (name, text) = match read_source(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let lexer = Lexer::new(&name, &text);

    if args.all_errors {
        let (tokens, errors) = lexer.tokenize_recovering();
        for token in &tokens {
            println!("{token}");
        }
        for err in &errors {
            eprintln!("{}", err.report());
        }
        return if errors.is_empty() { 0 } else { 1 };
    }

    match lexer.tokenize() {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token}");
            }
            0
        }
        Err(err) => {
            eprintln!("{}", err.report());
            1
        }
    }
}

#[derive(Debug)]
struct ReplSession {
    prompt: String,
}

impl ReplSession {
    fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (trimmed, ""),
        };

        match command {
            ":help" => (
                vec![
                    "commands: :help, :tokens <expr>, :json <expr>, :tree <expr>, :quit"
                        .to_string(),
                    "note: enter an expression such as 2 + 3 * 4 to see its syntax tree"
                        .to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":tokens" | ":json" | ":tree" if rest.is_empty() => {
                (vec![format!("error: usage: {command} <expr>")], false)
            }
            ":tokens" => {
                let out = match Lexer::new(STDIN_NAME, rest).tokenize() {
                    Ok(tokens) => format_token_list(&tokens),
                    Err(err) => err.report(),
                };
                (vec![out], false)
            }
            ":json" => (vec![self.render(rest, OutputMode::Json)], false),
            ":tree" => (vec![self.render(rest, OutputMode::Tree)], false),
            _ => (vec![format!("error: unknown command '{command}'")], false),
        }
    }

    fn render(&self, source: &str, mode: OutputMode) -> String {
        match run(STDIN_NAME, source) {
            Ok(ast) => format_tree(&ast, mode).unwrap_or_else(|e| format!("error: {e}")),
            Err(err) => Self::report(&err),
        }
    }

    fn report(err: &BeerError<'_>) -> String {
        debug!("rejected input: {err}");
        err.report()
    }

    /// Returns the lines to print and whether the session should end
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        // The untrimmed line keeps columns in reports aligned with the prompt input
        (vec![self.render(line, OutputMode::Text)], false)
    }
}

fn run_repl(prompt: &str) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(prompt);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 2 } else { 0 };
        }
    };
    init_logging(cli.verbose);
    debug!("{cli:?}");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(&cli.prompt),
        Command::Parse(args) => run_parse(&args),
        Command::Tokens(args) => run_tokens(&args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
