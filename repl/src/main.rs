use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use colorized::*;
use lang::{DebugFlags, Error};

#[derive(Debug, Parser)]
#[command(about = "Evaluates arithmetic and boolean expressions, one per line")]
struct Args {
    /// Evaluates every non-blank line of FILE instead of reading from stdin.
    file: Option<PathBuf>,
    /// Prints the tokens of each line.
    #[arg(long)]
    print_tokens: bool,
    /// Prints the syntax tree of each line.
    #[arg(long)]
    print_syntax_tree: bool,
    /// Prints the typed tree of each line as code.
    #[arg(long)]
    print_bound_tree: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let debug_flags = DebugFlags {
        print_tokens: args.print_tokens,
        print_syntax_tree: args.print_syntax_tree,
        print_bound_tree: args.print_bound_tree,
    };

    match args.file {
        Some(file_path) => run_file(&file_path, debug_flags),
        None => repl(debug_flags),
    }
}

fn repl(debug_flags: DebugFlags) -> anyhow::Result<()> {
    let mut session = Session::new(debug_flags, true);
    let mut buf = String::new();
    loop {
        buf.clear();
        print!("> ");
        std::io::stdout().flush()?;
        if std::io::stdin().read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            break;
        }
        session.run_line(line);
    }
    Ok(())
}

fn run_file(file_path: &Path, debug_flags: DebugFlags) -> anyhow::Result<()> {
    let file = std::fs::read_to_string(file_path)?;
    log::debug!("running {} lines of {}", file.lines().count(), file_path.display());
    let mut session = Session::new(debug_flags, false);
    for line in file.lines().map(str::trim).filter(|line| !line.is_empty()) {
        session.run_line(line);
    }
    Ok(())
}

/// The state kept between two lines. Only the debug flags, which the meta
/// commands toggle.
struct Session {
    debug_flags: DebugFlags,
    /// Colors and screen clearing are only used on a terminal.
    interactive: bool,
}

enum MetaCommand {
    ShowTree,
    ShowTokens,
    ShowBound,
    ClearScreen,
    Unknown,
}

impl MetaCommand {
    fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('#') {
            return None;
        }
        Some(match line {
            "#showTree" => Self::ShowTree,
            "#showTokens" => Self::ShowTokens,
            "#showBound" => Self::ShowBound,
            "#cls" => Self::ClearScreen,
            _ => Self::Unknown,
        })
    }
}

impl Session {
    fn new(debug_flags: DebugFlags, interactive: bool) -> Self {
        Self {
            debug_flags,
            interactive,
        }
    }

    fn run_line(&mut self, line: &str) {
        match MetaCommand::parse(line) {
            Some(command) => self.run_meta_command(command),
            None => self.evaluate(line),
        }
    }

    fn run_meta_command(&mut self, command: MetaCommand) {
        match command {
            MetaCommand::ShowTree => {
                let flag = &mut self.debug_flags.print_syntax_tree;
                *flag = !*flag;
                println!("{}", toggle_message(*flag, "parse trees"));
            }
            MetaCommand::ShowTokens => {
                let flag = &mut self.debug_flags.print_tokens;
                *flag = !*flag;
                println!("{}", toggle_message(*flag, "tokens"));
            }
            MetaCommand::ShowBound => {
                let flag = &mut self.debug_flags.print_bound_tree;
                *flag = !*flag;
                println!("{}", toggle_message(*flag, "bound trees"));
            }
            MetaCommand::ClearScreen => {
                if self.interactive {
                    print!("\x1B[2J\x1B[1;1H");
                }
            }
            MetaCommand::Unknown => self.print_error("ERROR: Unknown command."),
        }
    }

    fn evaluate(&self, line: &str) {
        let syntax_tree = lang::SyntaxTree::parse(line, self.debug_flags);
        match syntax_tree.evaluate() {
            Ok(value) => println!("{}", value),
            Err(Error::Diagnostics(diagnostics)) => {
                for diagnostic in diagnostics {
                    self.print_error(&diagnostic.to_string());
                }
            }
            Err(Error::Runtime(error)) => eprintln!("Runtime error: {}", error),
        }
    }

    fn print_error(&self, message: &str) {
        if self.interactive {
            colorize_println(message, Colors::RedFg);
        } else {
            println!("{}", message);
        }
    }
}

fn toggle_message(enabled: bool, what: &str) -> String {
    if enabled {
        format!("Showing {}.", what)
    } else {
        format!("Not showing {}.", what)
    }
}
