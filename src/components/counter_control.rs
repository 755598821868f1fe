//! Counter Control Component
//!
//! The interactive counter region of a card: primary count button,
//! optional progress ring (bounded mode only), and reset button.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::counter::{Activation, Counter, CounterMode, RING_CIRCUMFERENCE};

/// How long the pulse class stays on after an activation
const PULSE_MS: u32 = 200;

fn vibrate(ms: u32) {
    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        // Not every browser exposes the vibration API
        if js_sys::Reflect::has(navigator.as_ref(), &"vibrate".into()).unwrap_or(false) {
            let _ = navigator.vibrate_with_duration(ms);
        }
    }
}

/// Counter control wired to a card-owned `Counter` signal
#[component]
pub fn CounterControl(
    counter: ReadSignal<Counter>,
    set_counter: WriteSignal<Counter>,
) -> impl IntoView {
    let (pulse, set_pulse) = signal(false);

    let pulse_now = move || {
        set_pulse.set(true);
        Timeout::new(PULSE_MS, move || set_pulse.set(false)).forget();
    };

    let on_count = move |_| {
        let mut c = counter.get_untracked();
        let outcome = c.activate();
        if outcome == Activation::Ignored {
            // Already completed; only reset leaves this state
            return;
        }
        set_counter.set(c);
        pulse_now();
        match outcome {
            Activation::Completed => vibrate(50),
            Activation::Counted if c.mode() == CounterMode::Unbounded => vibrate(50),
            _ => {}
        }
    };

    let on_reset = move |_| {
        let mut c = counter.get_untracked();
        c.reset();
        set_counter.set(c);
        pulse_now();
    };

    // Mode never changes after mount
    match counter.get_untracked().mode() {
        CounterMode::Unbounded => {
            let btn_class = move || {
                if pulse.get() {
                    "counter-btn infinite pulse"
                } else {
                    "counter-btn infinite"
                }
            };

            view! {
                <div class="dhikr-action infinite-mode">
                    <button class=btn_class on:click=on_count>
                        <span class="count-display">{move || counter.get().display()}</span>
                        <span class="label">"تكرار"</span>
                    </button>
                    <button class="reset-btn" title="تصفير" on:click=on_reset>"↺"</button>
                </div>
            }
            .into_any()
        }
        CounterMode::Bounded => {
            let btn_class = move || {
                let mut class = String::from("counter-btn");
                if counter.get().completed() {
                    class.push_str(" done");
                }
                if pulse.get() {
                    class.push_str(" pulse");
                }
                class
            };

            view! {
                <div class="dhikr-action">
                    <div class="counter-wrapper">
                        <button class=btn_class on:click=on_count>
                            {move || {
                                if counter.get().completed() {
                                    view! { <span class="done-mark">"✔"</span> }.into_any()
                                } else {
                                    view! {
                                        <span class="count-display">
                                            {move || counter.get().display()}
                                        </span>
                                        <span class="label">"تكرار"</span>
                                    }
                                    .into_any()
                                }
                            }}
                        </button>
                        <div class="progress-ring">
                            <svg width="86" height="86">
                                <circle cx="43" cy="43" r="40"></circle>
                                <circle
                                    cx="43"
                                    cy="43"
                                    r="40"
                                    class="progress"
                                    style:stroke-dasharray=format!(
                                        "{:.2} {:.2}", RING_CIRCUMFERENCE, RING_CIRCUMFERENCE
                                    )
                                    style:stroke-dashoffset=move || {
                                        format!("{:.2}", counter.get().ring_offset(RING_CIRCUMFERENCE))
                                    }
                                ></circle>
                            </svg>
                        </div>
                    </div>
                    <button class="reset-btn" title="إعادة" on:click=on_reset>"↺"</button>
                </div>
            }
            .into_any()
        }
    }
}
