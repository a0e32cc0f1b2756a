use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved key holding the nested GPS sub-mapping
pub const GPS_INFO_KEY: &str = "GPSInfo";

/// Field name to value mapping produced once per image
pub type MetadataMap = BTreeMap<String, MetadataValue>;

/// A metadata value as exposed to the analyzers.
///
/// Nested GPS data and container info can hold mappings and sequences of
/// mixed types, so the value is a recursive tagged variant rather than a
/// plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Sequence(Vec<MetadataValue>),
    Mapping(MetadataMap),
}

impl MetadataValue {
    pub fn text(value: impl Into<String>) -> Self {
        MetadataValue::Text(value.into())
    }

    /// Returns the text payload of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MetadataMap> {
        match self {
            MetadataValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[MetadataValue]> {
        match self {
            MetadataValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view of the value. Numeric text parses; non-finite results are rejected.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            MetadataValue::Integer(i) => *i as f64,
            MetadataValue::Float(f) => *f,
            MetadataValue::Text(s) => s.trim().parse::<f64>().ok()?,
            MetadataValue::Sequence(_) | MetadataValue::Mapping(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// False for empty text, zero numbers and empty containers
    pub fn is_present(&self) -> bool {
        match self {
            MetadataValue::Text(s) => !s.is_empty(),
            MetadataValue::Integer(i) => *i != 0,
            MetadataValue::Float(f) => *f != 0.0,
            MetadataValue::Sequence(items) => !items.is_empty(),
            MetadataValue::Mapping(map) => !map.is_empty(),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) => f.write_str(s),
            MetadataValue::Integer(i) => write!(f, "{}", i),
            MetadataValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            MetadataValue::Float(v) => write!(f, "{}", v),
            MetadataValue::Sequence(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            MetadataValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Float(value)
    }
}

impl From<MetadataMap> for MetadataValue {
    fn from(value: MetadataMap) -> Self {
        MetadataValue::Mapping(value)
    }
}

impl<T: Into<MetadataValue>> From<Vec<T>> for MetadataValue {
    fn from(values: Vec<T>) -> Self {
        MetadataValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// Everything the extractor learns about one image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Embedded tag data, GPS nested under [`GPS_INFO_KEY`]
    pub exif: MetadataMap,
    /// Container-level key/values (JFIF, PNG text chunks, COM segments)
    pub info: MetadataMap,
    pub format: String,
    pub mode: String,
    pub size: (u32, u32),
}

impl ExtractedMetadata {
    pub fn gps_info(&self) -> Option<&MetadataMap> {
        self.exif.get(GPS_INFO_KEY).and_then(MetadataValue::as_mapping)
    }

    pub fn total_fields(&self) -> usize {
        self.exif.len() + self.info.len()
    }
}
