use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::date::{format_date, format_with_weekday};
use crate::utils::messages;

#[derive(Properties, PartialEq)]
pub struct DateNavigatorProps {
    pub selected: NaiveDate,
    /// Earliest selectable day
    pub min_date: NaiveDate,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_pick: Callback<String>,
}

#[function_component(DateNavigator)]
pub fn date_navigator(props: &DateNavigatorProps) -> Html {
    let on_change = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_pick.emit(input.value());
        })
    };

    let at_minimum = props.selected <= props.min_date;

    html! {
        <div class="date-navigator">
            <button
                class="btn-nav"
                title={messages::PREV_DAY}
                disabled={at_minimum}
                onclick={props.on_prev.reform(|_| ())}
            >
                {"‹"}
            </button>

            <div class="date-picker">
                <label for="date-picker">{messages::PICK_DATE_LABEL}</label>
                <input
                    id="date-picker"
                    type="date"
                    value={format_date(props.selected)}
                    min={format_date(props.min_date)}
                    onchange={on_change}
                />
                <span class="date-label">{format_with_weekday(props.selected)}</span>
            </div>

            <button
                class="btn-nav"
                title={messages::NEXT_DAY}
                onclick={props.on_next.reform(|_| ())}
            >
                {"›"}
            </button>
        </div>
    }
}
