/*!
 * Vector operations available to the calc process.
 *
 * New operations need:
 * - A struct implementing `Evaluate`
 * - An enum variant containing that struct in `Operation`
 *
 * The variant name (snake_case) is the `op` tag in job files
 * and the operation name on the command line.
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::calc::{Outcome, CalcError, ProcResult, operand_err};
use crate::geo_3d::{vec, serde_scalar, Scalar, Vector3, Rounding};

/// Loose operands collected from the command line.
#[derive(Debug, Default)]
pub struct OpInputs {
    pub vectors: Vec<Vector3>,
    pub scalar: Option<Scalar>,
    pub rounding: Option<Rounding>,
}
impl OpInputs {
    /// Check the operands against what the operation takes.
    /// Unused scalars and rounding rules are rejected like a wrong vector count.
    fn check(&self, op: &'static str, count: usize, takes_scalar: bool, takes_rounding: bool) -> ProcResult<()> {
        if self.vectors.len() != count {
            return operand_err(op, format!("takes {} vector(s), got {}", count, self.vectors.len()));
        }
        match (takes_scalar, self.scalar) {
            (true, None) => return operand_err(op, "requires a scalar".to_string()),
            (false, Some(_)) => return operand_err(op, "does not take a scalar".to_string()),
            _ => (),
        }
        if !takes_rounding && self.rounding.is_some() {
            return operand_err(op, "does not take a rounding rule".to_string());
        }
        Ok(())
    }
}

/// Operation trait.
/// Evaluation never fails, numeric failures show up as NaN/Inf in the outcome.
#[enum_dispatch]
pub trait Evaluate {
    /// Get the name of the operation (matches the serde tag).
    fn name(&self) -> &'static str;

    /// Fill the operands from loose command line inputs, checking arity.
    fn fill(&mut self, inputs: &OpInputs) -> ProcResult<()>;

    /// Evaluate the operation.
    fn evaluate(&self) -> Outcome;
}

/// Operations enum.
#[derive(Debug, Clone, Serialize, Deserialize, EnumIter)]
#[serde(tag = "op", rename_all = "snake_case")]
#[enum_dispatch(Evaluate)]
pub enum Operation {
    Add(Add),
    Sub(Sub),
    Neg(Neg),
    Scale(Scale),
    Divide(Divide),
    Dot(Dot),
    Cross(Cross),
    Area(Area),
    Length(Length),
    LengthSq(LengthSq),
    Distance(Distance),
    DistanceSq(DistanceSq),
    Unit(Unit),
    Normalize(Normalize),
    Zero(Zero),
    Equals(Equals),
    ToPoint2d(ToPoint2d),
}
impl Operation {
    /// Names of all available operations.
    pub fn names() -> Vec<&'static str> {
        Operation::iter().map(|op| op.name()).collect()
    }

    /// Construct a default operation from its name.
    pub fn from_name(name: &str) -> ProcResult<Self> {
        match Operation::iter().find(|op| op.name() == name) {
            Some(op) => Ok(op),
            None => Err(CalcError::UnknownOperation{name: name.to_string(), available: Operation::names()}),
        }
    }

    /// Construct an operation from its name and command line inputs.
    pub fn from_inputs(name: &str, inputs: &OpInputs) -> ProcResult<Self> {
        let mut op = Operation::from_name(name)?;
        op.fill(inputs)?;
        Ok(op)
    }
}

/// Implements `Evaluate` for an operation over `lhs` and `rhs`.
macro_rules! binary_op {
    ($op:ident, $name:expr, |$l:ident, $r:ident| $body:expr) => {
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        pub struct $op {
            pub lhs: Vector3,
            pub rhs: Vector3,
        }
        impl Evaluate for $op {
            fn name(&self) -> &'static str {
                $name
            }

            fn fill(&mut self, inputs: &OpInputs) -> ProcResult<()> {
                inputs.check($name, 2, false, false)?;
                (self.lhs, self.rhs) = (inputs.vectors[0], inputs.vectors[1]);
                Ok(())
            }

            fn evaluate(&self) -> Outcome {
                let ($l, $r) = (self.lhs, self.rhs);
                $body
            }
        }
    };
}

/// Implements `Evaluate` for an operation over a single `vector`.
macro_rules! unary_op {
    ($op:ident, $name:expr, |$v:ident| $body:expr) => {
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        pub struct $op {
            pub vector: Vector3,
        }
        impl Evaluate for $op {
            fn name(&self) -> &'static str {
                $name
            }

            fn fill(&mut self, inputs: &OpInputs) -> ProcResult<()> {
                inputs.check($name, 1, false, false)?;
                self.vector = inputs.vectors[0];
                Ok(())
            }

            fn evaluate(&self) -> Outcome {
                let $v = self.vector;
                $body
            }
        }
    };
}

/// Implements `Evaluate` for an operation over a `vector` and a `scalar`.
macro_rules! scalar_op {
    ($op:ident, $name:expr, |$v:ident, $s:ident| $body:expr) => {
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        pub struct $op {
            pub vector: Vector3,
            #[serde(with = "serde_scalar")]
            pub scalar: Scalar,
        }
        impl Evaluate for $op {
            fn name(&self) -> &'static str {
                $name
            }

            fn fill(&mut self, inputs: &OpInputs) -> ProcResult<()> {
                inputs.check($name, 1, true, false)?;
                self.vector = inputs.vectors[0];
                self.scalar = inputs.scalar.unwrap_or_default();
                Ok(())
            }

            fn evaluate(&self) -> Outcome {
                let ($v, $s) = (self.vector, self.scalar);
                $body
            }
        }
    };
}

binary_op!(Add, "add", |l, r| Outcome::Vector(l + r));
binary_op!(Sub, "sub", |l, r| Outcome::Vector(l - r));
binary_op!(Dot, "dot", |l, r| Outcome::Scalar(l.dot(&r)));
binary_op!(Cross, "cross", |l, r| Outcome::Vector(l.cross(&r)));
binary_op!(Area, "area", |l, r| Outcome::Scalar(l.area(&r)));
binary_op!(Distance, "distance", |l, r| Outcome::Scalar(l.distance(&r)));
binary_op!(DistanceSq, "distance_sq", |l, r| Outcome::Scalar(l.distance_sq(&r)));
binary_op!(Equals, "equals", |l, r| Outcome::Flag(l == r));

unary_op!(Neg, "neg", |v| Outcome::Vector(-v));
unary_op!(Length, "length", |v| Outcome::Scalar(v.length()));
unary_op!(LengthSq, "length_sq", |v| Outcome::Scalar(v.length_sq()));
unary_op!(Unit, "unit", |v| Outcome::Vector(v.unit()));
unary_op!(Normalize, "normalize", |v| {
    let mut vector = v;
    let length = vector.normalize();
    Outcome::Normalized{length, vector}
});

scalar_op!(Scale, "scale", |v, s| Outcome::Vector(v * s));
scalar_op!(Divide, "divide", |v, s| Outcome::Vector(v / s));

/// The zero vector, takes no operands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zero {}
impl Evaluate for Zero {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn fill(&mut self, inputs: &OpInputs) -> ProcResult<()> {
        inputs.check("zero", 0, false, false)
    }

    fn evaluate(&self) -> Outcome {
        Outcome::Vector(vec::zero())
    }
}

/// Conversion to an integer 2D point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToPoint2d {
    pub vector: Vector3,
    #[serde(default)]
    pub rounding: Rounding,
}
impl Evaluate for ToPoint2d {
    fn name(&self) -> &'static str {
        "to_point2d"
    }

    fn fill(&mut self, inputs: &OpInputs) -> ProcResult<()> {
        inputs.check("to_point2d", 1, false, true)?;
        self.vector = inputs.vectors[0];
        self.rounding = inputs.rounding.unwrap_or_default();
        Ok(())
    }

    fn evaluate(&self) -> Outcome {
        Outcome::Point(self.vector.to_point2d_with(self.rounding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_3d::Point2D;

    fn inputs(vectors: &[[Scalar; 3]], scalar: Option<Scalar>) -> OpInputs {
        OpInputs{
            vectors: vectors.iter().map(|&v| Vector3::from(v)).collect(),
            scalar,
            rounding: None,
        }
    }

    #[test]
    fn check_names_match_serde_tags() {
        for op in Operation::iter() {
            let value = serde_json::to_value(&op).unwrap();
            assert_eq!(value["op"], op.name());
        }
    }

    #[test]
    fn check_from_inputs() {
        let op = Operation::from_inputs("cross", &inputs(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], None)).unwrap();
        assert_eq!(op.evaluate(), Outcome::Vector(Vector3::new(0.0, 0.0, 1.0)));

        let op = Operation::from_inputs("scale", &inputs(&[[1.0, -2.0, 3.0]], Some(2.0))).unwrap();
        assert_eq!(op.evaluate(), Outcome::Vector(Vector3::new(2.0, -4.0, 6.0)));

        let op = Operation::from_inputs("zero", &inputs(&[], None)).unwrap();
        assert_eq!(op.evaluate(), Outcome::Vector(Vector3::zero()));
    }

    #[test]
    fn check_bad_inputs() {
        assert!(Operation::from_name("matmul").is_err());
        assert!(Operation::from_inputs("dot", &inputs(&[[1.0, 0.0, 0.0]], None)).is_err());
        assert!(Operation::from_inputs("length", &inputs(&[[1.0, 0.0, 0.0], [1.0, 0.0, 0.0]], None)).is_err());
        assert!(Operation::from_inputs("divide", &inputs(&[[1.0, 0.0, 0.0]], None)).is_err());
        assert!(Operation::from_inputs("zero", &inputs(&[[1.0, 0.0, 0.0]], None)).is_err());
    }

    #[test]
    fn check_unused_operands_rejected() {
        let add = Operation::from_inputs("add", &inputs(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], Some(3.0)));
        assert!(matches!(add, Err(CalcError::Operands{op: "add", ..})));

        let mut scale_args = inputs(&[[1.0, 0.0, 0.0]], Some(2.0));
        scale_args.rounding = Some(Rounding::LegacyHalfUp);
        assert!(matches!(Operation::from_inputs("scale", &scale_args), Err(CalcError::Operands{op: "scale", ..})));

        let mut point_args = inputs(&[[1.0, 0.0, 0.0]], Some(2.0));
        point_args.rounding = Some(Rounding::LegacyHalfUp);
        assert!(Operation::from_inputs("to_point2d", &point_args).is_err());
        point_args.scalar = None;
        assert!(Operation::from_inputs("to_point2d", &point_args).is_ok());
    }

    #[test]
    fn check_unknown_operation_lists_available() {
        match Operation::from_name("matmul") {
            Err(CalcError::UnknownOperation{name, available}) => {
                assert_eq!(name, "matmul");
                assert!(available.contains(&"to_point2d"));
            },
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn check_normalize_outcome() {
        let op = Operation::from_inputs("normalize", &inputs(&[[3.0, 4.0, 0.0]], None)).unwrap();
        match op.evaluate() {
            Outcome::Normalized{length, vector} => {
                assert_eq!(length, 5.0);
                assert_eq!(vector, Vector3::new(0.6, 0.8, 0.0));
            },
            other => panic!("Unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn check_divide_by_zero_is_silent() {
        let op = Operation::from_inputs("divide", &inputs(&[[0.0, 1.0, 0.0]], Some(0.0))).unwrap();
        match op.evaluate() {
            Outcome::Vector(v) => assert!(v.has_nan()),
            other => panic!("Unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn check_to_point2d_rounding() {
        let mut args = inputs(&[[2.6, -2.5, 7.0]], None);
        let op = Operation::from_inputs("to_point2d", &args).unwrap();
        assert_eq!(op.evaluate(), Outcome::Point(Point2D::new(3, -3)));

        args.rounding = Some(Rounding::LegacyHalfUp);
        let op = Operation::from_inputs("to_point2d", &args).unwrap();
        assert_eq!(op.evaluate(), Outcome::Point(Point2D::new(3, -2)));
    }

    #[test]
    fn check_parse_yaml_operation() {
        let yaml = "op: to_point2d\nvector: {x: -1.5, y: 0.2, z: 0.0}\n";
        let op: Operation = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(op.evaluate(), Outcome::Point(Point2D::new(-2, 0)));
    }
}
