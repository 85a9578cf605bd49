use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "to-sarif",
    version,
    about = "Convert aggregated static-analysis findings into SARIF 2.1.0"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Aggregated findings JSON file; prints `{}` when omitted.
    /// Everything after the first path, flags included, is ignored.
    #[arg(
        value_name = "INPUT",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    pub fn input(&self) -> Option<PathBuf> {
        self.args.first().map(PathBuf::from)
    }

    pub fn ignored(&self) -> &[OsString] {
        self.args.get(1..).unwrap_or_default()
    }
}
