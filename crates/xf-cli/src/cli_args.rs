use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xf-cli")]
#[command(about = "Flatten XForms definitions and normalize their submissions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Print the flattened question table of a form.
    Flatten(FlattenArgs),
    /// Normalize one result file, or every .xml file under a directory.
    Results(ResultsArgs),
}

#[derive(Debug, Args)]
pub(crate) struct FlattenArgs {
    #[arg(long = "form")]
    pub(crate) form: String,
    #[arg(long = "lang")]
    pub(crate) lang: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ResultsArgs {
    #[arg(long = "form")]
    pub(crate) form: String,
    #[arg(long = "result")]
    pub(crate) result: String,
    #[arg(long = "lang")]
    pub(crate) lang: Option<String>,
}
