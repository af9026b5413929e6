//! Telemetry reading model
//!
//! A [`Reading`] is one sample handed to the exporter by the upstream
//! pipeline. It is read-only to the exporter: envelopes borrow from it and
//! are thrown away after serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dynamically typed datapoint value
///
/// The historian only understands strings, so every variant has a canonical
/// rendering through [`DatapointValue::render`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatapointValue {
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free text
    String(String),
    /// Array of floating point numbers
    FloatArray(Vec<f64>),
    /// Nested structured value
    Object(serde_json::Map<String, serde_json::Value>),
}

impl DatapointValue {
    /// Canonical string form embedded in the `value` field of a reading entry.
    ///
    /// Numbers use the shortest representation that parses back to the same
    /// value. Strings are returned verbatim; JSON escaping happens once, when
    /// the envelope is serialized. Structured values render as compact JSON.
    ///
    /// ```
    /// use edgex_north::domain::DatapointValue;
    ///
    /// assert_eq!(DatapointValue::Float(21.5).render(), "21.5");
    /// assert_eq!(DatapointValue::Integer(-3).render(), "-3");
    /// assert_eq!(DatapointValue::String("on".into()).render(), "on");
    /// ```
    pub fn render(&self) -> String {
        match self {
            DatapointValue::Integer(v) => v.to_string(),
            DatapointValue::Float(v) => v.to_string(),
            DatapointValue::String(v) => v.clone(),
            DatapointValue::FloatArray(values) => serde_json::Value::from(values.clone()).to_string(),
            DatapointValue::Object(map) => serde_json::Value::Object(map.clone()).to_string(),
        }
    }

    /// Short type tag, used in log fields
    pub fn type_name(&self) -> &'static str {
        match self {
            DatapointValue::Integer(_) => "integer",
            DatapointValue::Float(_) => "float",
            DatapointValue::String(_) => "string",
            DatapointValue::FloatArray(_) => "float_array",
            DatapointValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for DatapointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<i64> for DatapointValue {
    fn from(v: i64) -> Self {
        DatapointValue::Integer(v)
    }
}

impl From<i32> for DatapointValue {
    fn from(v: i32) -> Self {
        DatapointValue::Integer(i64::from(v))
    }
}

impl From<f64> for DatapointValue {
    fn from(v: f64) -> Self {
        DatapointValue::Float(v)
    }
}

impl From<&str> for DatapointValue {
    fn from(v: &str) -> Self {
        DatapointValue::String(v.to_string())
    }
}

impl From<String> for DatapointValue {
    fn from(v: String) -> Self {
        DatapointValue::String(v)
    }
}

impl From<Vec<f64>> for DatapointValue {
    fn from(v: Vec<f64>) -> Self {
        DatapointValue::FloatArray(v)
    }
}

/// A named value inside a reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datapoint {
    /// Datapoint name, e.g. `temperature`
    pub name: String,

    /// The measured value
    pub value: DatapointValue,
}

impl Datapoint {
    /// Create a new datapoint
    pub fn new(name: impl Into<String>, value: impl Into<DatapointValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One telemetry sample from a single asset
///
/// The serialized form follows the host pipeline's reading layout
/// (`asset_code`, `id`, `user_ts`, `readings`), which is what the CLI reads
/// from batch files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Name of the asset (device or sensor) that produced the sample
    #[serde(rename = "asset_code")]
    pub asset_name: String,

    /// Identifier assigned upstream
    pub id: u64,

    /// Capture time
    #[serde(rename = "user_ts")]
    pub user_timestamp: DateTime<Utc>,

    /// Ordered datapoints
    #[serde(rename = "readings", default)]
    pub datapoints: Vec<Datapoint>,
}

impl Reading {
    /// Create a reading with no datapoints
    pub fn new(asset_name: impl Into<String>, id: u64, user_timestamp: DateTime<Utc>) -> Self {
        Self {
            asset_name: asset_name.into(),
            id,
            user_timestamp,
            datapoints: Vec::new(),
        }
    }

    /// Append a datapoint
    pub fn with_datapoint(mut self, name: impl Into<String>, value: impl Into<DatapointValue>) -> Self {
        self.datapoints.push(Datapoint::new(name, value));
        self
    }

    /// Asset name as a string slice
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }
}

/// How the `origin` field of a reading entry is computed from the capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginTimestamp {
    /// `seconds * 1000 + microseconds`, the value existing historian
    /// deployments were fed. Not true milliseconds.
    #[default]
    Legacy,
    /// Milliseconds since the Unix epoch
    EpochMillis,
}

impl OriginTimestamp {
    /// Convert a capture time to the integer placed in `origin`
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use edgex_north::domain::OriginTimestamp;
    ///
    /// let ts = Utc.timestamp_opt(10, 250_000_000).unwrap();
    /// assert_eq!(OriginTimestamp::Legacy.convert(&ts), 10_000 + 250_000);
    /// assert_eq!(OriginTimestamp::EpochMillis.convert(&ts), 10_250);
    /// ```
    pub fn convert(self, ts: &DateTime<Utc>) -> i64 {
        match self {
            OriginTimestamp::Legacy => ts.timestamp() * 1000 + i64::from(ts.timestamp_subsec_micros()),
            OriginTimestamp::EpochMillis => ts.timestamp_millis(),
        }
    }
}

impl fmt::Display for OriginTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginTimestamp::Legacy => write!(f, "legacy"),
            OriginTimestamp::EpochMillis => write!(f, "epoch_millis"),
        }
    }
}
