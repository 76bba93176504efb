// ============================================================================
// URL STATE - the selected day lives in the `?date=` query parameter
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::window;

use crate::utils::constants::DATE_QUERY_PARAM;

/// Reads `date` from a `location.search` string (with or without the leading `?`)
pub fn date_param(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == DATE_QUERY_PARAM)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Returns `search` with `date` set to `date`, keeping every other parameter
pub fn with_date_param(search: &str, date: &str) -> String {
    let mut pairs: Vec<String> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(DATE_QUERY_PARAM))
        .map(str::to_string)
        .collect();
    pairs.push(format!("{}={}", DATE_QUERY_PARAM, date));
    format!("?{}", pairs.join("&"))
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_date_param() -> Option<String> {
    date_param(&current_search())
}

/// Rewrites the URL in place (no new history entry)
pub fn replace_date_param(date: &str) -> Result<(), JsValue> {
    let url = with_date_param(&current_search(), date);
    history()?.replace_state_with_url(&JsValue::NULL, "", Some(&url))
}

/// Navigates to another day, adding a history entry
pub fn push_date_param(date: &str) -> Result<(), JsValue> {
    let url = with_date_param(&current_search(), date);
    history()?.push_state_with_url(&JsValue::NULL, "", Some(&url))
}

fn history() -> Result<web_sys::History, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()
}
