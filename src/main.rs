use std::env;
use tpose::err;
use tpose::newline::NewlineMode;
use tpose::transpose::transpose;
use tpose::util::{Error, Result};

const USAGE: &str = "USAGE : tpose [--eol MODE] <input> <-t|-c> <output> [...]";

fn main() {
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

// conversions:
// file.txt -t file.tc   rows to column form
// file.tc -c file.txt   column form back to rows
// (they are the same transform, which is its own inverse)
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Direction {
    ToColumns,
    FromColumns,
}

impl Direction {
    fn new(x: &str) -> Option<Self> {
        match x {
            "-t" => Some(Self::ToColumns),
            "-c" => Some(Self::FromColumns),
            _ => None,
        }
    }
}

fn bad_flag(word: &str, pos: usize) {
    eprintln!("Error on argument {} at position 1", pos + 1);
    eprintln!("Here: {}", word);
    eprintln!("{}^ wrong command.", " ".repeat(7));
}

/// Walk the words as (input, direction, output) triples, running each
/// conversion as its triple completes. A bad direction flag or a failed
/// conversion is reported and kills only its own triple.
fn run_triples(words: &[String], mode: NewlineMode) -> Result<()> {
    let mut input: Option<&str> = None;
    let mut dir: Option<Direction> = None;
    let mut failed = 0usize;
    for (i, w) in words.iter().enumerate() {
        match (input, dir) {
            (Some(inp), Some(_)) => {
                if let Err(e) = transpose(inp, w, mode) {
                    eprintln!("Error\t{}", e);
                    failed += 1;
                }
                input = None;
                dir = None;
            }
            (Some(_), None) => match Direction::new(w) {
                Some(d) => dir = Some(d),
                None => {
                    bad_flag(w, i);
                    failed += 1;
                    input = None;
                }
            },
            (None, _) => input = Some(w),
        }
    }
    if failed == 0 {
        Ok(())
    } else {
        Err(Error::Silent)
    }
}

fn inner_main(args: Vec<String>) -> Result<()> {
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        eprintln!("Type 'tpose --help' for more details");
        return Err(Error::Silent);
    }
    let m = clap::Command::new("tpose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transpose the rows and columns of text files.")
        .arg(
            clap::Arg::new("eol")
                .long("eol")
                .value_name("MODE")
                .takes_value(true)
                .possible_values(["lf", "crlf", "any"])
                .default_value("crlf")
                .help("Newline convention for reading and writing."),
        )
        .arg(
            clap::Arg::new("conversions")
                .value_name("INPUT -t|-c OUTPUT")
                .multiple_values(true)
                .allow_hyphen_values(true)
                .help("Conversions to run, each an input file, a direction flag and an output file."),
        )
        .get_matches_from(&args);

    let mode = NewlineMode::new(m.get_one::<String>("eol").map_or("crlf", String::as_str))?;
    let words: Vec<String> = match m.get_many::<String>("conversions") {
        Some(v) => v.cloned().collect(),
        None => return err!("{}", USAGE),
    };
    run_triples(&words, mode)
}
