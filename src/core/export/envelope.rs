//! Grouping readings by asset and building core-data event envelopes
//!
//! One [`Envelope`] is produced per distinct asset in a batch. Every field
//! goes on the wire as a JSON string, in the order the historian's own
//! clients emit them:
//!
//! ```json
//! {"created":"0","device":"pump","id":"17","modified":"0","origin":"0","pushed":"0",
//!  "readings":[{"id":"flow17","origin":"1600000000123456","pushed":"0","name":"flow","value":"3.5"}]}
//! ```

use crate::domain::{OriginTimestamp, Reading, Result};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Readings of one asset, in batch order
#[derive(Debug, Clone, PartialEq)]
pub struct AssetGroup<'a> {
    /// Asset name shared by every reading in the group
    pub asset: &'a str,

    /// Readings in the order they appeared in the batch
    pub readings: Vec<&'a Reading>,
}

/// Group a batch by asset name
///
/// Groups come back in lexicographic (byte-wise) asset order so repeated
/// passes over the same batch post in the same order.
pub fn group_by_asset(readings: &[Reading]) -> Vec<AssetGroup<'_>> {
    let mut groups: BTreeMap<&str, Vec<&Reading>> = BTreeMap::new();
    for reading in readings {
        groups.entry(reading.asset_name()).or_default().push(reading);
    }

    groups
        .into_iter()
        .map(|(asset, readings)| AssetGroup { asset, readings })
        .collect()
}

/// One datapoint as it appears inside an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingEntry {
    /// Datapoint name followed by the reading id, e.g. `temp1`
    pub id: String,

    /// Capture time converted by [`OriginTimestamp`]
    #[serde(serialize_with = "as_string")]
    pub origin: i64,

    /// Always zero
    #[serde(serialize_with = "as_string")]
    pub pushed: u64,

    /// Datapoint name
    pub name: String,

    /// Rendered datapoint value
    pub value: String,
}

/// Per-asset body of one POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    #[serde(serialize_with = "as_string")]
    pub created: u64,

    /// Asset name
    pub device: String,

    /// Id of the first reading of the asset in the batch
    #[serde(serialize_with = "as_string")]
    pub id: u64,

    #[serde(serialize_with = "as_string")]
    pub modified: u64,

    #[serde(serialize_with = "as_string")]
    pub origin: u64,

    #[serde(serialize_with = "as_string")]
    pub pushed: u64,

    /// Entries in batch order, datapoint order within a reading
    pub readings: Vec<ReadingEntry>,
}

impl Envelope {
    /// Serialize to the JSON request body
    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of reading entries
    pub fn entry_count(&self) -> usize {
        self.readings.len()
    }
}

/// Build the envelope for one asset group
///
/// Returns `None` when the group carries no datapoints at all: an envelope
/// with an empty `readings` array is never sent.
pub fn build_envelope(group: &AssetGroup<'_>, origin: OriginTimestamp) -> Option<Envelope> {
    let first = group.readings.first()?;

    let entries: Vec<ReadingEntry> = group
        .readings
        .iter()
        .flat_map(|reading| {
            let origin = origin.convert(&reading.user_timestamp);
            reading.datapoints.iter().map(move |dp| ReadingEntry {
                id: format!("{}{}", dp.name, reading.id),
                origin,
                pushed: 0,
                name: dp.name.clone(),
                value: dp.value.render(),
            })
        })
        .collect();

    if entries.is_empty() {
        return None;
    }

    Some(Envelope {
        created: 0,
        device: group.asset.to_string(),
        id: first.id,
        modified: 0,
        origin: 0,
        pushed: 0,
        readings: entries,
    })
}

/// Group a batch and build every non-empty envelope, in posting order
pub fn build_envelopes(readings: &[Reading], origin: OriginTimestamp) -> Vec<Envelope> {
    group_by_asset(readings)
        .iter()
        .filter_map(|group| build_envelope(group, origin))
        .collect()
}

fn as_string<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
