use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;

mod argparser;
mod output;
mod util;

use libmfekpicker::Operation;

use crate::output::PickerOutput;

fn init_logger(verbosity: u64) {
    let filter = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = LoggerBuilder::new();
    builder.filter(None, filter);
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }
    builder.init();
}

fn main() {
    let args = argparser::parse_args();
    init_logger(args.verbosity);

    let picked = match args.operation {
        Operation::OpenDirectory => libmfekpicker::open_directory(&args.title),
        Operation::OpenFile => libmfekpicker::open_file(&args.title),
        Operation::SaveFile => libmfekpicker::save_file(&args.title, args.path.as_deref()),
    };
    let output = PickerOutput::from(picked);

    if args.json {
        match serde_json::to_string(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => util::hard_error(&format!("Failed to serialize result: {}", e)),
        }
        if !output.success {
            std::process::exit(1);
        }
        return;
    }

    let what = match args.operation {
        Operation::OpenDirectory => "directory",
        Operation::OpenFile | Operation::SaveFile => "file",
    };
    match output.path {
        Some(path) => println!("{}", path.display()),
        None => util::hard_error(&format!("No {} selected.", what)),
    }
}
