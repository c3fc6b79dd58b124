use argh::{EarlyExit, FromArgs};
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

#[derive(FromArgs)]
/// Remove black pixels connected to the border of a PBM bitmap.
/// Reads standard input when no file is given and writes plain PBM to
/// standard output.
struct Args {
    /// input PBM file (defaults to standard input)
    #[argh(positional)]
    input: Option<PathBuf>,
}

/// Parse the command line, keeping the input path as the raw OS string.
///
/// argh only sees UTF-8, so it parses a lossy copy. The single positional
/// is always the last argument, with or without a preceding `--`.
fn parse_args(raw: &[OsString]) -> Result<Option<PathBuf>, EarlyExit> {
    let lossy: Vec<String> = raw
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let strs: Vec<&str> = lossy.iter().map(String::as_str).collect();
    let cmd = strs
        .first()
        .and_then(|c| Path::new(c).file_name())
        .and_then(|c| c.to_str())
        .unwrap_or("unblackedges");

    let args = Args::from_args(&[cmd], strs.get(1..).unwrap_or(&[]))?;
    Ok(args.input.and_then(|_| raw.last().map(PathBuf::from)))
}

fn main() {
    env_logger::init();

    let raw: Vec<OsString> = std::env::args_os().collect();
    let input = match parse_args(&raw) {
        Ok(input) => input,
        Err(early) => match early.status {
            Ok(()) => {
                println!("{}", early.output);
                return;
            }
            Err(()) => {
                eprintln!(
                    "{}\nRun unblackedges --help for more information.",
                    early.output
                );
                std::process::exit(1);
            }
        },
    };

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    if let Err(e) = unblackedges::run(input.as_deref(), out) {
        log::debug!("run failed: {e:?}");
        eprintln!("unblackedges: {e}");
        std::process::exit(1);
    }
}
