use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::string::FromUtf8Error;
use std::sync::atomic::{self, AtomicUsize};

use clap::Parser;
use colorized::*;
use futures::{stream, StreamExt};
use tokio::process::Command;
use tokio::{fs, join};

/// Runs every `*.calc` file through the repl and compares stdout and stderr
/// with the `.out` and `.err` files next to it.
#[derive(Debug, Parser)]
struct Args {
    /// Overwrites the expectations with the current output.
    #[arg(short, long)]
    record: bool,
    /// Only runs files whose path contains this text.
    #[arg(short, long)]
    filter: Option<String>,
    #[arg(short, long, default_value = "tests")]
    directory: String,
    /// Explains why a file failed.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let pattern = format!("{}/**/*.calc", args.directory);
    let input_files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths
            .filter_map(Result::ok)
            .filter(|file| match &args.filter {
                Some(filter) => file.to_string_lossy().contains(filter.as_str()),
                None => true,
            })
            .collect(),
        Err(err) => {
            colorize_print("ERROR: ", Colors::RedFg);
            println!("Invalid directory pattern '{pattern}': {err}");
            return ExitCode::FAILURE;
        }
    };
    let total_files = input_files.len();
    let files_done = AtomicUsize::new(0);
    let files_failed = AtomicUsize::new(0);
    stream::iter(input_files)
        .for_each_concurrent(100, |file| {
            let args = &args;
            let files_done = &files_done;
            let files_failed = &files_failed;
            async move {
                let errors_occured = run_test(&file, args).await;
                let done = files_done.fetch_add(1, atomic::Ordering::Relaxed) + 1;
                let name = file
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                print!("Completed {done:3}/{total_files}: {name}");
                if errors_occured {
                    files_failed.fetch_add(1, atomic::Ordering::Relaxed);
                    colorize_println("   FAILED", Colors::RedFg);
                } else {
                    colorize_println("   PASSED", Colors::BrightGreenFg);
                }
            }
        })
        .await;
    if files_failed.load(atomic::Ordering::Relaxed) == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Returns true, if an error occured.
async fn run_test(file: &Path, args: &Args) -> bool {
    let output = match Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--package")
        .arg("repl")
        .arg(file)
        .output()
        .await
    {
        Ok(it) => it,
        Err(err) => {
            report_error(Error::ProcessFailed(file.to_owned(), err), args.verbose);
            return true;
        }
    };
    if args.record {
        let (t1, t2) = join!(
            fs::write(file.with_extension("out"), output.stdout),
            fs::write(file.with_extension("err"), output.stderr),
        );
        match t1.and(t2) {
            Ok(()) => false,
            Err(err) => {
                report_error(Error::RecordFailed(file.to_owned(), err), args.verbose);
                true
            }
        }
    } else {
        let (t1, t2) = join!(
            ensure_equal(file.with_extension("out"), output.stdout, args.verbose),
            ensure_equal(file.with_extension("err"), output.stderr, args.verbose)
        );
        t1 || t2
    }
}

enum Error {
    FileNotFound(PathBuf, std::io::Error),
    ProcessFailed(PathBuf, std::io::Error),
    RecordFailed(PathBuf, std::io::Error),
    FileLengthDifferent(String, String),
    FileByteDifferentAt(usize, String, String),
    InvalidUtf8(FromUtf8Error),
}

/// Returns true, if an error occured.
async fn ensure_equal(file: PathBuf, output: Vec<u8>, verbose: bool) -> bool {
    let file = match fs::read(&file).await {
        Ok(it) => it,
        Err(err) => {
            report_error(Error::FileNotFound(file, err), verbose);
            return true;
        }
    };
    let (file, output) = match (convert_to_unix_newline(file), convert_to_unix_newline(output)) {
        (Ok(file), Ok(output)) => (file, output),
        (Err(err), _) | (_, Err(err)) => {
            report_error(Error::InvalidUtf8(err), verbose);
            return true;
        }
    };
    if file.len() != output.len() {
        report_error(Error::FileLengthDifferent(file, output), verbose);
        return true;
    }
    let difference = file
        .char_indices()
        .zip(output.chars())
        .find(|((_, f), o)| f != o)
        .map(|((index, _), _)| index);
    if let Some(index) = difference {
        report_error(Error::FileByteDifferentAt(index, file, output), verbose);
        return true;
    }
    false
}

fn convert_to_unix_newline(bytes: Vec<u8>) -> Result<String, FromUtf8Error> {
    let result = String::from_utf8(bytes)?;
    Ok(result.replace('\r', ""))
}

fn report_error(err: Error, verbose: bool) {
    if !verbose {
        return;
    }
    colorize_print("ERROR: ", Colors::RedFg);
    match err {
        Error::FileNotFound(file, err) => {
            println!(
                "Failed to find file '{}', original error was:",
                colorize_this(file.to_string_lossy(), Colors::CyanFg)
            );
            println!("{err}");
        }
        Error::ProcessFailed(file, err) => {
            println!(
                "Failed to run the repl for '{}':",
                colorize_this(file.to_string_lossy(), Colors::CyanFg)
            );
            println!("{err}");
        }
        Error::RecordFailed(file, err) => {
            println!(
                "Failed to record the output of '{}':",
                colorize_this(file.to_string_lossy(), Colors::CyanFg)
            );
            println!("{err}");
        }
        Error::FileLengthDifferent(file, output) => {
            println!(
                "Different lengths. File was {} bytes long and the output {} bytes.",
                file.len(),
                output.len()
            );
            print!("File read  ");
            print_or_empty(&file);
            print!("Output was ");
            print_or_empty(&output);
        }
        Error::FileByteDifferentAt(index, file, output) => {
            println!("Different byte at {index}.");
            print!("File read  ");
            print_difference_highlighted(&file, index, Colors::BrightCyanFg);
            println!();
            print!("Output was ");
            print_difference_highlighted(&output, index, Colors::BrightCyanFg);
            println!();
        }
        Error::InvalidUtf8(err) => {
            println!("Invalid utf8 found:");
            println!();
            println!("{err}");
        }
    }
}

fn print_or_empty(text: &str) {
    if text.is_empty() {
        colorize_println("empty", Colors::BrightBlackFg);
    } else {
        println!("'{text}'");
    }
}

/// `highlighted` has to be a char boundary of `text`.
fn print_difference_highlighted(text: &str, highlighted: usize, highlight_color: Colors) {
    print!("{}", &text[..highlighted]);
    let end = next_char_boundary(text, highlighted);
    colorize_print(&text[highlighted..end], highlight_color);
    print!("{}", &text[end..]);
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len(), |c| index + c.len_utf8())
}
