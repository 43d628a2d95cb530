//! The five step panels of the order form.

use leptos::prelude::*;

use crate::manager::OrderFormManager;

use super::{OptionGrid, ResultPanel};

/// Step 1: mood of the track.
#[component]
pub fn MoodStep() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <h3 class="text-sm font-semibold text-white">"What's the mood?"</h3>
                <p class="text-xs text-[#888888] mt-1">"Sets the overall feel of the song and visuals"</p>
            </div>
            <OptionGrid group="mood"/>
        </div>
    }
}

/// Step 2: target audience.
#[component]
pub fn AudienceStep() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <h3 class="text-sm font-semibold text-white">"Who is it for?"</h3>
                <p class="text-xs text-[#888888] mt-1">"We tune pacing and imagery to the audience"</p>
            </div>
            <OptionGrid group="age"/>
        </div>
    }
}

/// Step 3: musical style, creative vision and lyric theme.
#[component]
pub fn StyleStep() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    view! {
        <div class="space-y-6">
            <div class="space-y-4">
                <div>
                    <h3 class="text-sm font-semibold text-white">"Pick a musical direction"</h3>
                </div>
                <OptionGrid group="style"/>
            </div>

            <Show when=move || mgr.selected("style").as_deref() == Some("similar")>
                <div>
                    <label class="block text-[#888888] text-xs mb-1.5 font-medium">"Artist or song reference"</label>
                    <input
                        type="text"
                        class="w-full bg-[#111111] border border-[#ffffff08] rounded px-3 py-2 text-sm text-white focus:border-[#00d9ff] focus:outline-none transition-colors"
                        placeholder="e.g., Daft Punk"
                        prop:value=move || mgr.text("artist")
                        on:input=move |ev| mgr.set_text("artist", event_target_value(&ev))
                    />
                    <p class="text-xs text-[#666666] mt-1">"We'll match the style, never the recording"</p>
                </div>
            </Show>

            <div>
                <label class="block text-[#888888] text-xs mb-1.5 font-medium">"Describe your vision"</label>
                <textarea
                    class="w-full bg-[#111111] border border-[#ffffff08] rounded px-3 py-2 text-sm text-white focus:border-[#00d9ff] focus:outline-none transition-colors"
                    rows=3
                    placeholder="e.g., hyperrealistic vibrant concert scene"
                    prop:value=move || mgr.text("vision")
                    on:input=move |ev| mgr.set_text("vision", event_target_value(&ev))
                ></textarea>
            </div>

            <div class="space-y-4">
                <div>
                    <h3 class="text-sm font-semibold text-white">"Lyric theme"</h3>
                </div>
                <OptionGrid group="lyricTheme"/>
            </div>

            <Show when=move || mgr.selected("lyricTheme").as_deref() == Some("custom")>
                <div>
                    <label class="block text-[#888888] text-xs mb-1.5 font-medium">"Your lyrics"</label>
                    <textarea
                        class="w-full bg-[#111111] border border-[#ffffff08] rounded px-3 py-2 text-sm text-white focus:border-[#00d9ff] focus:outline-none transition-colors"
                        rows=4
                        placeholder="Paste or write the lyrics to use"
                        prop:value=move || mgr.text("customLyrics")
                        on:input=move |ev| mgr.set_text("customLyrics", event_target_value(&ev))
                    ></textarea>
                </div>
            </Show>
        </div>
    }
}

/// Step 4: video length, pricing plan and the branding add-on.
#[component]
pub fn PlanStep() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    view! {
        <div class="space-y-6">
            <div class="space-y-4">
                <div>
                    <h3 class="text-sm font-semibold text-white">"Video length"</h3>
                </div>
                <OptionGrid group="videoLength"/>
            </div>

            <div class="space-y-4">
                <div>
                    <h3 class="text-sm font-semibold text-white">"Pick your plan"</h3>
                </div>
                <OptionGrid group="pricing"/>
            </div>

            <div class="border-t border-[#ffffff08] pt-4 space-y-4">
                <label class="flex items-center gap-2 text-sm text-white">
                    <input
                        type="checkbox"
                        prop:checked=move || mgr.toggle("branding")
                        on:change=move |ev| mgr.set_toggle("branding", event_target_checked(&ev))
                    />
                    "Add my branding to the video"
                </label>

                <Show when=move || mgr.toggle("branding")>
                    <div>
                        <label class="block text-[#888888] text-xs mb-1.5 font-medium">"Brand name"</label>
                        <input
                            type="text"
                            class="w-full bg-[#111111] border border-[#ffffff08] rounded px-3 py-2 text-sm text-white focus:border-[#00d9ff] focus:outline-none transition-colors"
                            placeholder="e.g., Acme"
                            prop:value=move || mgr.text("brandName")
                            on:input=move |ev| mgr.set_text("brandName", event_target_value(&ev))
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Step 5: review the collected order, submit it, and show the result.
#[component]
pub fn ReviewStep() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    view! {
        <div class="space-y-4">
            <div>
                <h3 class="text-sm font-semibold text-white">"Review your order"</h3>
                <p class="text-xs text-[#888888] mt-1">"Only answered fields are sent"</p>
            </div>

            {move || {
                let selection = mgr.selection();
                if selection.is_empty() {
                    view! {
                        <p class="text-sm text-[#666666]">"Nothing selected yet - you can still go back and pick."</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <ul class="space-y-1">
                            {selection
                                .iter()
                                .map(|(key, value)| {
                                    let key = key.to_string();
                                    let value = value.to_string();
                                    view! {
                                        <li class="flex gap-2 text-sm">
                                            <span class="text-[#888888] w-32">{key}</span>
                                            <span class="text-white">{value}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}

            <button
                type="button"
                class=move || format!(
                    "px-6 py-2 bg-[#22c55e] rounded text-sm text-black font-semibold transition-colors {}",
                    if mgr.is_submitting.get() {
                        "opacity-50 cursor-not-allowed"
                    } else {
                        "hover:bg-[#16a34a]"
                    }
                )
                disabled=move || mgr.is_submitting.get()
                on:click=move |ev| {
                    ev.prevent_default();
                    mgr.submit();
                }
            >
                {move || if mgr.is_submitting.get() { "Creating..." } else { "Create My Video" }}
            </button>

            <ResultPanel/>
        </div>
    }
}
