pub mod geo_3d;
pub mod calc;
pub mod args;
pub mod io;
mod example;
mod crate_errors;

pub use crate_errors::{
    TrivecError,
    TrivecResult,
    err_str,
};
pub use example::render_example;

/// Targets enum.
/// What the binary was asked to do, validated and ready to run.
#[derive(Debug)]
pub enum Targets {
    /// Run a job file.
    Calc(calc::CalcTarget),
    /// Run a single operation, printing the result with the given precision.
    Op{
        operation: calc::Operation,
        precision: usize,
    },
    /// Print an example job or the operation listing.
    Example{
        operation: Option<String>,
        format: args::Format,
    },
    /// Print a saved results file.
    Show{
        input_path: String,
        precision: usize,
    },
}

/// [Stage 1.]
/// Turn the parsed command line into targets.
/// Loads and validates job files, checks operation arity.
pub fn handle_cli_args(cli: args::TrivecCli) -> TrivecResult<Targets> {
    match cli.sub_command {
        args::SubCommand::Calc(calc_cli) => {
            println!("Loading calc config file: {}...", calc_cli.input_path);
            let target = calc::CalcTarget::from_cfg_file(&calc_cli.input_path, calc_cli.output_path)?;
            Ok(Targets::Calc(target))
        },
        args::SubCommand::Op(op_cli) => {
            let inputs = calc::OpInputs{
                vectors: op_cli.vectors,
                scalar: op_cli.scalar,
                rounding: op_cli.rounding,
            };
            let operation = calc::Operation::from_inputs(&op_cli.operation, &inputs)?;
            Ok(Targets::Op{operation, precision: op_cli.precision})
        },
        args::SubCommand::Example(example_cli) => {
            Ok(Targets::Example{operation: example_cli.operation, format: example_cli.format})
        },
        args::SubCommand::Show(show_cli) => {
            Ok(Targets::Show{input_path: show_cli.input_path, precision: show_cli.precision})
        },
    }
}

/// [Stage 2.]
/// Run the targets.
pub fn run_process(targets: Targets) -> TrivecResult<()> {
    match targets {
        Targets::Calc(calc_target) => {
            let records = calc::run_calc(&calc_target);
            if let Some(output_path) = calc_target.output_path() {
                calc::save_results(&records, output_path)?;
            }
        },
        Targets::Op{operation, precision} => {
            use calc::Evaluate;
            println!("{:.*}", precision, operation.evaluate());
        },
        Targets::Example{operation, format} => {
            println!("{}", render_example(operation.as_deref(), format)?);
        },
        Targets::Show{input_path, precision} => {
            for record in calc::load_results(&input_path)? {
                println!("{:.*}", precision, record);
            }
        },
    }
    Ok(())
}
