use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use arith_lexer::{
    config::{Config, LogConfig},
    get_line_at_position,
    logger::{init_with_format, LogFormat},
    tokenize, Error, ErrorTip, Token,
};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "arith-lex", about = "Tokenizer for arithmetic expressions", version)]
struct Cli {
    /// Source file to tokenize
    file: Option<PathBuf>,

    /// Tokenize this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Log level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn build_config(cli: &Cli) -> Config {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };

    Config {
        log: LogConfig::from_verbosity(cli.verbose).with_format(format),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_with_format(&config.log);

    if let Some(expr) = &cli.expr {
        if !run("<expr>", expr) {
            process::exit(1);
        }
        return;
    }

    if let Some(file_path) = &cli.file {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.to_string_lossy().into_owned());

        let contents = match read_to_string(file_path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error: cannot read '{}': {}", file_path.display(), e);
                process::exit(1);
            }
        };

        info!(target: "arith::cli", file = %file_name, bytes = contents.len(), "Read source file");

        if !run(&file_name, &contents) {
            process::exit(1);
        }
        return;
    }

    if let Err(e) = shell() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn shell() -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("arith > ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let text = line.trim_end_matches(['\n', '\r']);
        run("<stdin>", text);
    }
}

fn run(file_name: &str, source: &str) -> bool {
    match tokenize(file_name, source) {
        Ok(tokens) => {
            println!("{}", format_tokens(&tokens));
            true
        }
        Err(error) => {
            display_error(&error);
            false
        }
    }
}

fn format_tokens(tokens: &[Token]) -> String {
    let parts = tokens.iter().map(|token| token.to_string()).collect::<Vec<_>>();
    format!("[{}]", parts.join(", "))
}

fn display_error(error: &Error) {
    /*
        Invalid Character: '$'
        File main.arith, line 1
        hint: ...
           |
         1 | 1 $ 2
           | --^
    */

    eprintln!("{}", error);

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("hint: {}", tip);
    }

    let (line, line_text, line_pos) = get_line_at_position(error.get_position());

    let line_str = line.to_string();
    let padding = line_str.len() + 2;
    let arrows = line_pos + 1;

    eprintln!("{:>padding$}", "|");
    eprintln!("{} | {}", line_str, line_text);
    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}
