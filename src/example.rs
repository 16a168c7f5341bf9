use crate::{
    args,
    calc,
};

/// Build the text for the example command.
/// Lists operations without an operation name,
/// otherwise renders a job file containing that operation.
pub fn render_example(operation: Option<&str>, format: args::Format) -> args::ProcResult<String> {
    let available = format!("Available operations:\n    {}", calc::Operation::names().join("\n    "));
    let name = match operation {
        Some(name) => name,
        None => return Ok(available),
    };

    let operation = match calc::Operation::from_name(name) {
        Ok(operation) => operation,
        Err(_) => return args::err_str(&format!("Operation \"{}\" not found. {}", name, available)),
    };
    let calc_args = calc::CalcArgs{
        operations: vec![operation],
        output_path: Some("OPTIONAL/PATH/TO/RESULTS.json".to_string()),
        save: false,
    };

    let rendered = match format {
        args::Format::Yaml => serde_yaml::to_string(&calc_args)?,
        args::Format::Json => serde_json::to_string_pretty(&calc_args)?,
        args::Format::Toml => toml::to_string_pretty(&calc_args)?,
    };
    Ok(rendered)
}
