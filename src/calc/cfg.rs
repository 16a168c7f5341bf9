use crate::calc::{Operation, CalcError, ProcResult};
use serde::{Serialize, Deserialize};

/// Arguments for the calc process (the job file).
#[derive(Debug, Serialize, Deserialize)]
pub struct CalcArgs {
    /// Operations to evaluate, in order.
    pub operations: Vec<Operation>,

    /// Output path for the results file (must be json).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,

    /// Force save the results file, failing if no output path is given.
    #[serde(default, rename = "force_save")]
    pub save: bool,
}

/// Calc target struct.
/// Contains the validated job arguments.
#[derive(Debug)]
pub struct CalcTarget {
    pub calc_args: CalcArgs,
}
impl CalcTarget {
    /// Construct a calc target from a config file.
    /// An `output_override` replaces the output path of the file and forces a save.
    pub fn from_cfg_file(cfg_file: &str, output_override: Option<String>) -> ProcResult<Self> {
        let mut calc_args: CalcArgs = crate::io::read_cfg_file(cfg_file)?;
        if let Some(output_path) = output_override {
            calc_args.output_path = Some(output_path);
            calc_args.save = true;
        }
        CalcTarget::new(calc_args)
    }

    /// Construct a calc target from arguments, validating them.
    pub fn new(calc_args: CalcArgs) -> ProcResult<Self> {
        if calc_args.operations.is_empty() {
            return Err(CalcError::EmptyJob);
        }

        if calc_args.save && calc_args.output_path.is_none() {
            return Err(CalcError::OutputPath("not specified, but force_save was set".to_string()));
        }

        if let Some(output_path) = calc_args.output_path.as_ref() {
            if !output_path.ends_with(".json") {
                return Err(CalcError::OutputPath(format!("\"{}\" must end with .json", output_path)));
            }
        }

        Ok(CalcTarget{calc_args})
    }

    /// Where to save results, if anywhere.
    pub fn output_path(&self) -> Option<&str> {
        self.calc_args.output_path.as_deref()
    }
}
