use clap::{error::ErrorKind, Parser};
use flutter_icon_gen::verify::{all_ok, audit_project};
use std::path::PathBuf;
use std::process::ExitCode;

/// Check the launcher icons already present in a Flutter project.
#[derive(Debug, Parser)]
#[clap(name = "verify_icons", version)]
struct Args {
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
            println!("usage: verify_icons <flutter project directory>");
            return ExitCode::FAILURE;
        }
    };
    if !args.project.is_dir() {
        println!("flutter project directory does not exist.");
        return ExitCode::FAILURE;
    }

    let entries = audit_project(&args.project);
    for entry in &entries {
        let path = entry
            .path
            .strip_prefix(&args.project)
            .unwrap_or(&entry.path);
        println!(
            "{} [{}x{}]: {}",
            path.display(),
            entry.expected_edge,
            entry.expected_edge,
            entry.state
        );
    }

    if all_ok(&entries) {
        println!("✓ {} icons checked", entries.len());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
