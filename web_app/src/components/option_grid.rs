//! Card grid for one mutually-exclusive selection group.

use leptos::prelude::*;

use crate::manager::OrderFormManager;

/// Renders the options of `group` as a grid of buttons. Clicking one
/// activates it and deactivates the rest; the active card carries the
/// active class. Options are buttons, so the click handler suppresses any
/// default control behavior before updating the group.
#[component]
pub fn OptionGrid(#[prop(into)] group: String) -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    // Groups are static once rendered: bind one listener per option, once.
    let options = mgr.group_options(&group);

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
            {options
                .into_iter()
                .map(|option| {
                    let value = option.effective_value().to_string();
                    let label = option.label.clone();

                    let active_group = group.clone();
                    let active_value = value.clone();
                    let is_active =
                        move || mgr.is_option_active(&active_group, &active_value);

                    let click_group = group.clone();
                    let click_value = value.clone();

                    view! {
                        <button
                            type="button"
                            data-value=value
                            class=move || format!(
                                "px-4 py-3 rounded-lg border text-sm transition-colors {}",
                                if is_active() {
                                    "active bg-[#00d9ff] border-[#00d9ff] text-black font-semibold"
                                } else {
                                    "bg-[#111111] border-[#ffffff08] text-white hover:border-[#00d9ff]"
                                }
                            )
                            on:click=move |ev| {
                                ev.prevent_default();
                                mgr.select(&click_group, &click_value);
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
