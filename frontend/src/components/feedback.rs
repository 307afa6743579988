//! Error / success banner

use leptos::*;
use waybill_core::{BulkWaybillForm, Feedback};

#[component]
pub fn FeedbackBanner(form: RwSignal<BulkWaybillForm>) -> impl IntoView {
    move || {
        form.with(|f| f.feedback().cloned()).map(|feedback| match feedback {
            Feedback::Error(msg) => view! {
                <div class="feedback error">"❌ " {msg}</div>
            },
            Feedback::Success(msg) => view! {
                <div class="feedback success">"✅ " {msg}</div>
            },
        })
    }
}
