// Argument parser
use std::path::PathBuf;

use clap::{Arg, Command};

use libmfekpicker::Operation;

pub struct Args {
    pub operation: Operation,
    pub title: String,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub verbosity: u64,
}

fn title_arg(default: &'static str) -> Arg<'static> {
    Arg::new("title")
        .long("title")
        .short('t')
        .takes_value(true)
        .default_value(default)
        .help("Dialog title")
}

pub fn parse_args() -> Args {
    let matches = Command::new("MFEKpicker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Native file picker, Modular Font Editor K project")
        .subcommand_required(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .help("Print the result as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .global(true)
                .help("Log more (repeat for more)"),
        )
        .subcommand(
            Command::new("dir")
                .about("Pick an existing directory")
                .arg(title_arg("Open directory")),
        )
        .subcommand(
            Command::new("file")
                .about("Pick an existing file")
                .arg(title_arg("Open file")),
        )
        .subcommand(
            Command::new("save")
                .about("Pick where to save a file")
                .arg(title_arg("Save file"))
                .arg(
                    Arg::new("PATH")
                        .help("Suggested file name; its extension picks the type filter")
                        .index(1),
                ),
        )
        .get_matches();

    let (operation, sub) = match matches.subcommand() {
        Some(("dir", sub)) => (Operation::OpenDirectory, sub),
        Some(("file", sub)) => (Operation::OpenFile, sub),
        Some(("save", sub)) => (Operation::SaveFile, sub),
        _ => unreachable!("subcommand_required"),
    };

    Args {
        operation,
        title: sub.value_of("title").unwrap_or_default().to_string(),
        path: match operation {
            Operation::SaveFile => sub.value_of("PATH").map(PathBuf::from),
            _ => None,
        },
        json: sub.is_present("json"),
        verbosity: sub.occurrences_of("verbose"),
    }
}
