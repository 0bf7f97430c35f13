//! Human-readable rendering of dynamic values.

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Number(value) => write_number(formatter, *value),
            Self::String(value) => write!(formatter, "{value:?}"),
            Self::Array(values) => {
                if values.is_empty() {
                    return formatter.write_str("[ ]");
                }
                formatter.write_str("[ ")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str(" ]")
            }
            Self::Object(entries) => {
                if entries.is_empty() {
                    return formatter.write_str("{ }");
                }
                formatter.write_str("{ ")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str(" }")
            }
            Self::Function(_) => formatter.write_str("Function"),
            Self::Maybe(Some(value)) => write!(formatter, "Just {value}"),
            Self::Maybe(None) => formatter.write_str("Nothing"),
            Self::Container(container) => write!(formatter, "{container}"),
        }
    }
}

/// Magnitudes at or above this render in exponent form.
const EXPONENT_FROM: f64 = 1e21;

/// Magnitudes below this (other than zero) render in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

fn write_number(formatter: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        formatter.write_str("NaN")
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        write!(formatter, "{sign}Infinity")
    } else if value == 0.0 {
        // covers -0
        formatter.write_str("0")
    } else if value.abs() >= EXPONENT_FROM || value.abs() < EXPONENT_BELOW {
        write_exponent(formatter, value)
    } else {
        write!(formatter, "{value}")
    }
}

/// Writes `1e+21` and `1.5e-7` style exponents; `LowerExp` omits the `+`.
fn write_exponent(formatter: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(formatter, "{mantissa}e+{exponent}")
        }
        _ => formatter.write_str(&rendered),
    }
}
