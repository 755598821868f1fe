//! Dhikr Card Component
//!
//! One self-contained card: formatted text, optional meaning annotation,
//! and a counter control. The card owns its counter state; nothing is
//! shared between cards.

use leptos::prelude::*;

use crate::components::CounterControl;
use crate::counter::Counter;
use crate::models::Item;
use crate::text::{display_meaning, text_lines};

#[component]
pub fn DhikrCard(item: Item) -> impl IntoView {
    let (counter, set_counter) = signal(Counter::new(item.count));

    let lines = text_lines(&item.text);
    let meaning = display_meaning(item.meaning.as_deref());

    let card_class = move || {
        if counter.get().completed() {
            "dhikr-card completed"
        } else {
            "dhikr-card"
        }
    };

    view! {
        <div class=card_class>
            <div class="dhikr-content">
                <div class="dhikr-text">
                    {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
                {meaning.map(|m| view! { <div class="dhikr-meaning">{m}</div> })}
            </div>
            <CounterControl counter=counter set_counter=set_counter />
        </div>
    }
}
