//! Success/error rendering for the final step.

use leptos::prelude::*;

use web_common::SubmitOutcome;

use crate::manager::OrderFormManager;

/// Shows the outcome of the last submission attempt in the final step's
/// content area. The server's success body is pretty-printed verbatim;
/// failure messages are rendered as text only.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let mgr = use_context::<OrderFormManager>().expect("OrderFormManager context");

    view! {
        {move || {
            mgr.submit_result.get().map(|outcome| match outcome {
                SubmitOutcome::Accepted { result } => {
                    let pretty = serde_json::to_string_pretty(&result)
                        .unwrap_or_else(|_| result.to_string());
                    view! {
                        <div class="p-4 rounded-lg border border-[#22c55e40] bg-[#0a0a0a]">
                            <h4 class="text-sm font-semibold text-[#22c55e] mb-2">"Your order is in!"</h4>
                            <pre class="text-xs text-[#888888] whitespace-pre-wrap">{pretty}</pre>
                        </div>
                    }
                    .into_any()
                }
                SubmitOutcome::Failed { message } => view! {
                    <div class="p-4 rounded-lg border border-[#ef4444] bg-[#ef444410]">
                        <h4 class="text-sm font-semibold text-[#ef4444] mb-2">"Something went wrong"</h4>
                        <p class="text-sm text-[#ef4444]">{message}</p>
                        <p class="text-xs text-[#666666] mt-2">"Nothing was charged - you can try again."</p>
                    </div>
                }
                .into_any(),
            })
        }}
    }
}
