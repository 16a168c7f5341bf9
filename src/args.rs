mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

use crate::geo_3d::{Scalar, Vector3, Rounding};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Three-component vector calculator.
#[derive(Debug, Parser)]
#[command(name = "trivec")]
pub struct TrivecCli {
    #[clap(subcommand)]
    pub sub_command: SubCommand,
}

/// Parser for the subcommands of the trivec binary using clap.
#[derive(Debug, Subcommand)]
pub enum SubCommand {
    #[command(name = "calc")]
    /// Run a job file of vector operations, optionally saving the results.
    Calc(CalcCli),

    #[command(name = "op")]
    /// Run a single vector operation, printing only the result.
    Op(OpCli),

    #[command(name = "example")]
    /// List operations, or print an example job file for one.
    Example(ExampleCli),

    #[command(name = "show")]
    /// Print a results file saved by calc.
    Show(ShowCli),
}

/// Arguments for the calc command.
#[derive(Debug, Args)]
pub struct CalcCli {
    #[arg(short, long = "input")]
    /// Path to the job file (.yaml/.yml, .json or .toml).
    pub input_path: String,

    #[arg(short, long = "output")]
    /// Path to the results file (.json), overrides the job file.
    pub output_path: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowCli {
    #[arg(short, long = "input")]
    /// Path to the results file (.json).
    pub input_path: String,

    #[arg(short, long, default_value_t = 3)]
    /// Decimal places in the printed results.
    pub precision: usize,
}

/// Arguments for the op command.
#[derive(Debug, Args)]
pub struct OpCli {
    /// Operation name (see `trivec example`).
    pub operation: String,

    #[arg(short, long = "vector", allow_hyphen_values = true)]
    /// Vector operand written as "x,y,z", repeat for each operand.
    pub vectors: Vec<Vector3>,

    #[arg(short, long, allow_hyphen_values = true)]
    /// Scalar operand, for scale and divide.
    pub scalar: Option<Scalar>,

    #[arg(short, long, value_enum)]
    /// Rounding rule, for to_point2d.
    pub rounding: Option<Rounding>,

    #[arg(short, long, default_value_t = 3)]
    /// Decimal places in the printed result.
    pub precision: usize,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleCli {
    /// Operation to show in the example job. Lists operations if absent.
    pub operation: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Output format of the example job.
    pub format: Format,
}

/// Config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Parse the command line arguments for the trivec binary.
pub fn parse_cli_args() -> TrivecCli {
    TrivecCli::parse()
}
