use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(
    name = "flutter-icon-gen",
    version,
    about = "Generate iOS and Android launcher icons for a Flutter project"
)]
struct Args {
    /// Path to the source image, at least 1024x1024.
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Root directory of the Flutter project.
    #[clap(value_name = "PROJECT")]
    project: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            log::debug!("{err}");
            println!("usage: flutter-icon-gen <input image> <flutter project directory>");
            return ExitCode::FAILURE;
        }
    };

    let args = flutter_icon_gen::Args {
        input: args.input,
        project: args.project,
    };

    match flutter_icon_gen::generate_icons(&args) {
        Ok(_) => {
            println!("all icons successfully generated.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
