// ============================================================================
// RESERVATION ROWS - day-info reshaped into numbered slots
// ============================================================================
// `remain_buoys` comes in consecutive pairs: entries 2k and 2k+1 are the
// first and second half of slot k+1, whose shared quota is `remain.gen[k]`.
// ============================================================================

use crate::models::day_info::{BuoyAvailability, DayInfoResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    First,
    Second,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HalfSlot {
    pub half: Half,
    pub time: String,
    pub remaining: i64,
    pub bookable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotRow {
    /// 1-based slot number
    pub number: usize,
    /// Shared user quota; a missing `remain.gen` entry counts as 0
    pub remaining_users: i64,
    pub first: HalfSlot,
    /// Absent when the list has an odd trailing entry
    pub second: Option<HalfSlot>,
}

impl SlotRow {
    pub fn is_full(&self) -> bool {
        self.remaining_users <= 0
    }

    pub fn halves(&self) -> impl Iterator<Item = &HalfSlot> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }
}

fn half_slot(half: Half, entry: &BuoyAvailability, remaining_users: i64) -> HalfSlot {
    HalfSlot {
        half,
        time: entry.buoy_time.clone(),
        remaining: entry.remain_buoys,
        bookable: entry.remain_buoys > 0 && remaining_users > 0,
    }
}

/// `None` when the response carries no usable `remain_buoys`
pub fn build_slot_rows(response: &DayInfoResponse) -> Option<Vec<SlotRow>> {
    let buoys = response.remain_buoys()?;

    let rows = buoys
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| {
            let remaining_users = response.slot_quota(index).unwrap_or(0);
            SlotRow {
                number: index + 1,
                remaining_users,
                first: half_slot(Half::First, &pair[0], remaining_users),
                second: pair.get(1).map(|e| half_slot(Half::Second, e, remaining_users)),
            }
        })
        .collect();

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(raw: &str) -> DayInfoResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn half_is_bookable_only_with_own_and_slot_capacity() {
        let day = response(
            r#"{"data":{
                "remain_buoys":[{"buoy_time":"09:00","remain_buoys":3},{"buoy_time":"13:00","remain_buoys":0}],
                "remain":{"gen":[{"remain":2}]}
            }}"#,
        );
        let rows = build_slot_rows(&day).unwrap();
        assert_eq!(rows.len(), 1);

        let slot = &rows[0];
        assert_eq!(slot.number, 1);
        assert_eq!(slot.remaining_users, 2);
        assert_eq!(slot.first.time, "09:00");
        assert!(slot.first.bookable);
        let second = slot.second.as_ref().unwrap();
        assert_eq!(second.time, "13:00");
        assert!(!second.bookable);
    }

    #[test]
    fn exhausted_slot_quota_blocks_both_halves() {
        let day = response(
            r#"{"data":{
                "remain_buoys":[
                    {"buoy_time":"09:00","remain_buoys":5},{"buoy_time":"11:00","remain_buoys":5},
                    {"buoy_time":"13:00","remain_buoys":4},{"buoy_time":"15:00","remain_buoys":1}
                ],
                "remain":{"gen":[{"remain":1},{"remain":0}]}
            }}"#,
        );
        let rows = build_slot_rows(&day).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].halves().all(|h| h.bookable));
        assert_eq!(rows[1].number, 2);
        assert!(rows[1].is_full());
        assert!(rows[1].halves().all(|h| !h.bookable));
    }

    #[test]
    fn odd_entry_and_missing_quota_are_not_bookable_second_halves() {
        let day = response(
            r#"{"data":{
                "remain_buoys":[
                    {"buoy_time":"09:00","remain_buoys":1},{"buoy_time":"11:00","remain_buoys":1},
                    {"buoy_time":"13:00","remain_buoys":2}
                ],
                "remain":{"gen":[{"remain":3}]}
            }}"#,
        );
        let rows = build_slot_rows(&day).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].remaining_users, 0);
        assert!(rows[1].second.is_none());
        assert!(!rows[1].first.bookable);
        assert_eq!(rows[1].halves().count(), 1);
    }

    #[test]
    fn no_rows_without_remain_buoys() {
        assert!(build_slot_rows(&response("{}")).is_none());
        assert!(build_slot_rows(&response(r#"{"data":{"remain_buoys":{"a":1}}}"#)).is_none());
        assert_eq!(
            build_slot_rows(&response(r#"{"data":{"remain_buoys":[]}}"#)),
            Some(Vec::new())
        );
    }
}
