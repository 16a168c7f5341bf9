mod proc_errors;
mod cfg;
mod ops;

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{serde_scalar, Scalar, Vector3, Point2D};

// Re-export errors
pub use proc_errors::{
    CalcError,
    ProcResult,
    operand_err,
};
// Re-export cfg handling
pub use cfg::{
    CalcArgs,
    CalcTarget,
};
// Re-export operations
pub use ops::{
    Evaluate,
    Operation,
    OpInputs,
};

/// Result of evaluating a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Scalar(#[serde(with = "serde_scalar")] Scalar),
    Vector(Vector3),
    Point(Point2D),
    Flag(bool),
    /// Unit vector, with the length it had before normalization.
    Normalized{
        #[serde(with = "serde_scalar")]
        length: Scalar,
        vector: Vector3,
    },
}
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        match self {
            Outcome::Scalar(s) => write!(f, "{:.*}", precision, s),
            Outcome::Vector(v) => write!(f, "{:.*}", precision, v),
            Outcome::Point(p) => write!(f, "{}", p),
            Outcome::Flag(b) => write!(f, "{}", b),
            Outcome::Normalized{length, vector} => write!(f, "{:.*} (length {:.*})", precision, vector, precision, length),
        }
    }
}

/// A single evaluated operation, as saved to the results file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcRecord {
    pub index: usize,
    pub op: String,
    pub outcome: Outcome,
}
impl fmt::Display for CalcRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "[{}] {}: {:.*}", self.index, self.op, precision, self.outcome)
    }
}

/// Run the calc process.
/// Evaluates every operation of the target in order.
pub fn run_calc(calc_target: &CalcTarget) -> Vec<CalcRecord> {
    let operations = &calc_target.calc_args.operations;
    println!("Running {} operation(s)...", operations.len());

    operations.iter().enumerate().map(|(index, operation)| {
        let record = CalcRecord{index, op: operation.name().to_string(), outcome: operation.evaluate()};
        println!("{}", record);
        record
    }).collect()
}

/// Save calc results as JSON.
pub fn save_results(records: &[CalcRecord], output_path: &str) -> ProcResult<()> {
    println!("Saving results to {}...", output_path);
    crate::io::write_json(output_path, &records)?;
    Ok(())
}

/// Load calc results from JSON.
/// Non-finite values written by `save_results` come back unchanged.
pub fn load_results(input_path: &str) -> ProcResult<Vec<CalcRecord>> {
    println!("Loading results from {}...", input_path);
    Ok(crate::io::read_json(input_path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_outcome_display() {
        assert_eq!(Outcome::Scalar(5.0).to_string(), "5.000");
        assert_eq!(format!("{:.1}", Outcome::Vector(Vector3::new(0.0, 0.0, 1.0))), "(0.0, 0.0, 1.0)");
        assert_eq!(Outcome::Point(Point2D::new(3, -3)).to_string(), "(3, -3)");
        assert_eq!(Outcome::Flag(true).to_string(), "true");
        let normalized = Outcome::Normalized{length: 5.0, vector: Vector3::new(0.6, 0.8, 0.0)};
        assert_eq!(normalized.to_string(), "(0.600, 0.800, 0.000) (length 5.000)");
    }

    #[test]
    fn check_results_roundtrip_file() {
        let path = std::env::temp_dir().join(format!("trivec_results_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();
        let records = vec![
            CalcRecord{index: 0, op: "dot".to_string(), outcome: Outcome::Scalar(0.0)},
            CalcRecord{index: 1, op: "to_point2d".to_string(), outcome: Outcome::Point(Point2D::new(3, -3))},
        ];
        save_results(&records, &path).unwrap();
        let loaded = load_results(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].op, "to_point2d");
        assert_eq!(loaded[1].outcome, Outcome::Point(Point2D::new(3, -3)));
    }

    #[test]
    fn check_non_finite_results_survive_file() {
        let path = std::env::temp_dir().join(format!("trivec_results_nan_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();
        let inputs = OpInputs{vectors: vec![Vector3::new(1.0, -1.0, 0.0)], scalar: Some(0.0), rounding: None};
        let target = CalcTarget::new(CalcArgs{
            operations: vec![
                Operation::from_inputs("divide", &inputs).unwrap(),
                Operation::from_inputs("normalize", &OpInputs{vectors: vec![Vector3::zero()], ..Default::default()}).unwrap(),
            ],
            output_path: None,
            save: false,
        }).unwrap();
        let records = run_calc(&target);
        save_results(&records, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let loaded = load_results(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!written.contains("null"));
        assert!(written.contains("\"-inf\""));
        match loaded[0].outcome {
            Outcome::Vector(v) => {
                assert_eq!(v.x, Scalar::INFINITY);
                assert_eq!(v.y, Scalar::NEG_INFINITY);
                assert!(v.z.is_nan());
            },
            other => panic!("Unexpected outcome: {:?}", other),
        }
        match loaded[1].outcome {
            Outcome::Normalized{length, vector} => {
                assert_eq!(length, 0.0);
                assert!(vector.has_nan());
            },
            other => panic!("Unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn check_record_display() {
        let record = CalcRecord{index: 2, op: "length".to_string(), outcome: Outcome::Scalar(5.0)};
        assert_eq!(record.to_string(), "[2] length: 5.000");
        assert_eq!(format!("{:.1}", record), "[2] length: 5.0");
    }
}
