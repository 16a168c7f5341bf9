//! Serde encoding for scalars that keeps non-finite values.
//! Finite values are plain numbers, Inf/NaN are the strings "inf", "-inf" and "NaN"
//! (JSON has no literal for them and `serde_json` would write `null`).
//! Use with `#[serde(with = "crate::geo_3d::serde_scalar")]`.

use std::fmt;
use serde::{Serialize, Serializer, Deserializer};
use serde::de::{self, Visitor};

use crate::geo_3d::Scalar;

pub fn serialize<S: Serializer>(value: &Scalar, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        value.serialize(serializer)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Scalar, D::Error> {
    deserializer.deserialize_any(ScalarVisitor)
}

struct ScalarVisitor;
impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number, or one of \"inf\", \"-inf\", \"NaN\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(v as Scalar)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(v as Scalar)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(v as Scalar)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        v.trim().parse::<Scalar>().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Serialize, Deserialize};
    use crate::geo_3d::Scalar;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapped {
        #[serde(with = "super")]
        value: Scalar,
    }

    fn roundtrip(value: Scalar) -> (String, Scalar) {
        let json = serde_json::to_string(&Wrapped{value}).unwrap();
        let back: Wrapped = serde_json::from_str(&json).unwrap();
        (json, back.value)
    }

    #[test]
    fn check_non_finite_json() {
        assert_eq!(roundtrip(Scalar::INFINITY), ("{\"value\":\"inf\"}".to_string(), Scalar::INFINITY));
        assert_eq!(roundtrip(Scalar::NEG_INFINITY), ("{\"value\":\"-inf\"}".to_string(), Scalar::NEG_INFINITY));
        let (json, back) = roundtrip(Scalar::NAN);
        assert_eq!(json, "{\"value\":\"NaN\"}");
        assert!(back.is_nan());
    }

    #[test]
    fn check_finite_json() {
        assert_eq!(roundtrip(2.5), ("{\"value\":2.5}".to_string(), 2.5));
    }

    #[test]
    fn check_integers_and_yaml() {
        let w: Wrapped = serde_json::from_str("{\"value\": -3}").unwrap();
        assert_eq!(w.value, -3.0);
        let w: Wrapped = serde_yaml::from_str("value: .inf\n").unwrap();
        assert_eq!(w.value, Scalar::INFINITY);
        assert!(serde_json::from_str::<Wrapped>("{\"value\": \"lots\"}").is_err());
    }
}
