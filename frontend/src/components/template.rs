//! Template download button

use leptos::*;
use waybill_core::{BulkWaybillForm, ServiceConfig};
use crate::services::{BrowserWaybillService, LocationNavigator};

#[component]
pub fn TemplateDownload(
    form: RwSignal<BulkWaybillForm>,
    config: ServiceConfig,
) -> impl IntoView {
    let service = BrowserWaybillService::new(config);

    // The browser takes over from here; nothing to track locally.
    let on_click = move |_| {
        form.with_untracked(|f| f.download_template(&service, &LocationNavigator));
    };

    view! {
        <div class="template-section">
            <button class="template-button" on:click=on_click>
                "⬇️ Download XLSX Template"
            </button>
        </div>
    }
}
