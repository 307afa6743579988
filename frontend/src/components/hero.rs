//! Hero section component

use leptos::*;
use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Fill in the template with one shipment per row, upload it, "
                "and download every waybill in a single PDF."
            </p>
        </div>
    }
}
