//! Order wizard shell: step indicators and progress fill in the header,
//! one visible step panel, Back/Continue navigation in the footer.

use leptos::prelude::*;

use crate::manager::OrderFormManager;

use super::steps::{AudienceStep, MoodStep, PlanStep, ReviewStep, StyleStep};

/// Main wizard component. Expects an [`OrderFormManager`] in context.
#[component]
pub fn OrderWizard() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    view! {
        <div class="bg-[#0d0d0d] border border-[#ffffff15] rounded-lg shadow-2xl w-full max-w-3xl flex flex-col">
            <WizardHeader/>

            <div class="flex-1 overflow-y-auto p-6">
                <Show when=move || mgr.is_step_visible(1)>
                    <MoodStep/>
                </Show>
                <Show when=move || mgr.is_step_visible(2)>
                    <AudienceStep/>
                </Show>
                <Show when=move || mgr.is_step_visible(3)>
                    <StyleStep/>
                </Show>
                <Show when=move || mgr.is_step_visible(4)>
                    <PlanStep/>
                </Show>
                <Show when=move || mgr.is_step_visible(5)>
                    <ReviewStep/>
                </Show>
            </div>

            <WizardFooter/>
        </div>
    }
}

/// Header with numbered step-indicator buttons and the progress fill.
/// Each indicator jumps straight to its step; the current one carries the
/// active marker.
#[component]
fn WizardHeader() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");
    let total = mgr.total_steps();

    view! {
        <div class="border-b border-[#ffffff08] p-6">
            <h2 class="text-lg font-semibold text-white mb-4">"Create Your Music Video"</h2>

            <div class="flex items-center gap-2">
                <For
                    each=move || 1..=total
                    key=|step| *step
                    children=move |step| {
                        let is_current = move || mgr.current_step() == step;
                        let is_completed = move || mgr.current_step() > step;

                        view! {
                            <button
                                type="button"
                                data-step=step.to_string()
                                class=move || format!(
                                    "flex items-center justify-center w-8 h-8 rounded-full text-xs font-semibold transition-colors {}",
                                    if is_current() {
                                        "active bg-[#00d9ff] text-black"
                                    } else if is_completed() {
                                        "bg-[#22c55e] text-black"
                                    } else {
                                        "bg-[#1a1a1a] text-[#666666] border border-[#ffffff08]"
                                    }
                                )
                                on:click=move |_| mgr.go_to_step(step)
                            >
                                {move || if is_completed() { "✓".to_string() } else { step.to_string() }}
                            </button>

                            <Show when=move || step < total>
                                <div class=move || format!(
                                    "h-0.5 w-12 transition-colors {}",
                                    if is_completed() { "bg-[#22c55e]" } else { "bg-[#ffffff08]" }
                                )></div>
                            </Show>
                        }
                    }
                />
            </div>

            // Progress fill, 0% on step 1 and 100% on the last step
            <div class="w-full bg-[#1a1a1a] rounded-full h-1.5 mt-4">
                <div
                    class="bg-[#00d9ff] h-1.5 rounded-full transition-all duration-300"
                    style=move || format!("width: {}%", mgr.progress_percent())
                ></div>
            </div>
        </div>
    }
}

/// Footer with Back/Continue controls. Both route through the wizard, so
/// they saturate at the ends instead of running past them.
#[component]
fn WizardFooter() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    view! {
        <div class="border-t border-[#ffffff08] p-6 flex items-center justify-between">
            <div>
                <Show when=move || !mgr.is_first_step()>
                    <button
                        type="button"
                        class="px-4 py-2 bg-[#1a1a1a] border border-[#ffffff08] rounded text-sm text-white hover:bg-[#222222] transition-colors"
                        on:click=move |_| mgr.previous()
                    >
                        "← Back"
                    </button>
                </Show>
            </div>

            <Show when=move || !mgr.is_last_step()>
                <button
                    type="button"
                    class="px-4 py-2 bg-[#00d9ff] rounded text-sm text-black font-semibold hover:bg-[#00c4e6] transition-colors"
                    on:click=move |_| mgr.next()
                >
                    "Continue →"
                </button>
            </Show>
        </div>
    }
}
