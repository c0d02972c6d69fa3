//! Lenient decoders for scalar fields.
//!
//! The remote API is loose about scalar types: stock counts and priorities
//! arrive as numbers, optional text arrives as `null`. A record field is
//! display text either way, so any JSON scalar is accepted and `null` reads
//! as empty. Only structurally wrong values (arrays, objects) are rejected.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

/// Decode any JSON scalar as text; `null` becomes the empty string.
pub fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<Scalar>::deserialize(d)? {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Bool(b)) => b.to_string(),
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::UInt(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
    })
}

/// Decode a flag sent as a bool, a number or text (`"true"`, `"1"`, ...);
/// `null` reads as `false`.
pub fn lenient_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Option::<Scalar>::deserialize(d)? {
        None => false,
        Some(Scalar::Bool(b)) => b,
        Some(Scalar::Int(n)) => n != 0,
        Some(Scalar::UInt(n)) => n != 0,
        Some(Scalar::Float(n)) => n != 0.0,
        Some(Scalar::Text(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
        }
    })
}
