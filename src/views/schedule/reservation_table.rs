// ============================================================================
// RESERVATION TABLE
// ============================================================================
// One two-row block per slot: slot number and shared quota span both rows,
// each half gets its own time, buoy count and bookable badge.
// ============================================================================

use yew::prelude::*;

use crate::models::{build_slot_rows, Half, HalfSlot, SlotRow};
use crate::state::day_info_state::LoadPhase;
use crate::utils::messages;

#[derive(Properties, PartialEq)]
pub struct ReservationTableProps {
    pub load: LoadPhase,
}

fn half_label(half: Half) -> &'static str {
    match half {
        Half::First => messages::FIRST_HALF,
        Half::Second => messages::SECOND_HALF,
    }
}

fn render_half(slot: &HalfSlot) -> Html {
    let (badge_class, badge_text) = if slot.bookable {
        ("badge bookable", messages::BOOKABLE)
    } else {
        ("badge not-bookable", messages::NOT_BOOKABLE)
    };

    html! {
        <>
            <td class="slot-time">{format!("{} {}", half_label(slot.half), slot.time)}</td>
            <td class="slot-count">{format!("{}{}", slot.remaining, messages::COUNT_SUFFIX)}</td>
            <td class="slot-status"><span class={badge_class}>{badge_text}</span></td>
        </>
    }
}

fn render_slot(row: &SlotRow) -> Html {
    let tone = if row.is_full() { "slot-full" } else { "slot-open" };
    let row_span = if row.second.is_some() { "2" } else { "1" };

    html! {
        <>
            <tr class={classes!("slot-row", tone)}>
                <td class="slot-number" rowspan={row_span}>
                    {format!("{}{}", row.number, messages::SLOT_SUFFIX)}
                </td>
                <td class="slot-quota" rowspan={row_span}>{row.remaining_users}</td>
                {render_half(&row.first)}
            </tr>
            if let Some(second) = &row.second {
                <tr class={classes!("slot-row", "slot-second", tone)}>
                    {render_half(second)}
                </tr>
            }
        </>
    }
}

#[function_component(ReservationTable)]
pub fn reservation_table(props: &ReservationTableProps) -> Html {
    match &props.load {
        LoadPhase::Idle => html! {},
        LoadPhase::Loading => html! {
            <div class="loading-indicator">
                <div class="spinner"></div>
                <p>{messages::LOADING_SCHEDULE}</p>
            </div>
        },
        LoadPhase::Errored(message) => html! {
            <div class="error-banner">
                <p>{*message}</p>
            </div>
        },
        LoadPhase::Loaded(day_info) => {
            let Some(rows) = build_slot_rows(day_info) else {
                return html! {};
            };

            html! {
                <div class="table-wrapper">
                    <table class="reservation-table">
                        <thead>
                            <tr>
                                <th>{messages::COLUMN_SLOT}</th>
                                <th>{messages::COLUMN_REMAINING}</th>
                                <th>{messages::COLUMN_BUOY}</th>
                                <th>{messages::COLUMN_REMAINING}</th>
                                <th>{messages::COLUMN_STATUS}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(render_slot) }
                        </tbody>
                    </table>
                </div>
            }
        }
    }
}
