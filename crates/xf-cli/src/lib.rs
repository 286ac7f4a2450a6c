use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xf_reader::XForm;

mod cli_args;
mod error_map;
mod models;
mod source_loader;

pub(crate) use cli_args::{Cli, FlattenArgs, Mode, ResultsArgs};
pub use error_map::CliError;
pub(crate) use error_map::emit_error;
pub(crate) use models::{FlattenOutput, ResultsOutput};
pub(crate) use source_loader::collect_result_files;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    init_tracing();
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

// Logs go to stderr so stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Mode::Flatten(args) => run_flatten(args),
        Mode::Results(args) => run_results(args),
    }
}

fn run_flatten(args: FlattenArgs) -> Result<i32, CliError> {
    let form = load_form(&args.form, args.lang.as_deref())?;
    print_json(&FlattenOutput {
        languages: form.languages(),
        preferred_language: form.preferred_language(),
        questions: form.flatten(),
    })?;
    Ok(0)
}

fn run_results(args: ResultsArgs) -> Result<i32, CliError> {
    let form = load_form(&args.form, args.lang.as_deref())?;
    let result_path = Path::new(&args.result);

    let output = if result_path.is_dir() {
        let mut by_file = BTreeMap::new();
        for (relative, path) in collect_result_files(result_path)? {
            let records = form.parse_result_file(&path)?;
            info!(file = relative.as_str(), records = records.len(), "normalized result");
            by_file.insert(relative, records);
        }
        ResultsOutput::Directory(by_file)
    } else {
        ResultsOutput::File(form.parse_result_file(result_path)?)
    };

    print_json(&output)?;
    Ok(0)
}

fn load_form(path: &str, lang: Option<&str>) -> Result<XForm, CliError> {
    let mut form = XForm::from_path(path)?;
    if let Some(lang) = lang {
        form.set_language(lang);
    }
    Ok(form)
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod cli_test_support;
