// ============================================================================
// DAY INFO - strict schema for the day-info response
// ============================================================================
// Only the fields the table needs are modelled. A field that is present but
// has the wrong shape decodes as `None` instead of failing the whole response.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct DayInfoRequest {
    pub date: String,
    pub cookies: Value,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DayInfoResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<DayInfoData>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DayInfoData {
    #[serde(default, deserialize_with = "lenient")]
    pub remain_buoys: Option<Vec<BuoyAvailability>>,
    #[serde(default, deserialize_with = "lenient")]
    pub remain: Option<RemainSummary>,
}

/// One half-slot: time label and buoys left
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BuoyAvailability {
    pub buoy_time: String,
    pub remain_buoys: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RemainSummary {
    #[serde(default)]
    pub gen: Vec<RemainGen>,
}

/// Remaining user quota shared by both halves of a slot
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RemainGen {
    pub remain: i64,
}

impl DayInfoResponse {
    pub fn remain_buoys(&self) -> Option<&[BuoyAvailability]> {
        self.data.as_ref()?.remain_buoys.as_deref()
    }

    pub fn slot_quota(&self, slot_index: usize) -> Option<i64> {
        let remain = self.data.as_ref()?.remain.as_ref()?;
        remain.gen.get(slot_index).map(|g| g.remain)
    }
}

/// Decodes a present-but-malformed field as `None` instead of failing the parent
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match serde_json::from_value(v) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("⚠️ Ignoring malformed field: {}", e);
            None
        }
    }))
}
