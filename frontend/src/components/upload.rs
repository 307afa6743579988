//! Bulk upload form: file picker, label size and submit.
//!
//! The form state lives in an `RwSignal<BulkWaybillForm>`. Submitting takes
//! a [`waybill_core::Submission`] snapshot out of it, runs the upload in
//! `spawn_local`, and writes the outcome back once the request settles.

use leptos::*;
use web_sys::{Event, HtmlInputElement};
use waybill_core::{BulkWaybillForm, LabelSize, ServiceConfig, ACCEPTED_EXTENSIONS};
use crate::components::FeedbackBanner;
use crate::services::{read_selected_file, BrowserDownload, BrowserWaybillService};

#[component]
pub fn UploadForm(
    form: RwSignal<BulkWaybillForm>,
    config: ServiceConfig,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let in_progress = move || form.with(|f| f.in_progress());
    let busy = move || form.with(|f| f.in_progress() || f.reading_file());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            form.update(|f| f.clear_file());
            return;
        };

        // A later pick supersedes this read, whichever finishes first.
        let Some(read) = form.try_update(BulkWaybillForm::start_file_read) else {
            return;
        };
        spawn_local(async move {
            let selected = match read_selected_file(&file).await {
                Ok(selected) => Some(selected),
                Err(e) => {
                    log::error!("❌ {}", e);
                    None
                }
            };
            form.update(|f| {
                f.finish_file_read(read, selected);
            });
        });
    };

    let on_size_change = move |ev: Event| match event_target_value(&ev).parse::<LabelSize>() {
        Ok(size) => form.update(|f| f.set_label_size(size)),
        Err(e) => log::warn!("⚠️ {}", e),
    };

    let on_submit = move |_| {
        // Missing file: the form already carries the validation message.
        let Some(Ok(submission)) = form.try_update(BulkWaybillForm::begin_submission) else {
            return;
        };

        let service = BrowserWaybillService::new(config.clone());
        spawn_local(async move {
            let outcome = submission.run(&service, &BrowserDownload).await;

            if outcome.is_ok() {
                // lets the same file be picked again
                if let Some(input) = input_ref.get_untracked() {
                    input.set_value("");
                }
            }
            form.update(|f| f.finish(&outcome));
        });
    };

    view! {
        <div class="upload-section">
            <h3>"Upload Filled Template"</h3>

            <div class="field">
                <label class="field-label">"Upload File (XLSX / CSV)"</label>
                <div class="file-picker">
                    <input
                        type="file"
                        id="bulkFile"
                        accept=ACCEPTED_EXTENSIONS
                        style="display:none"
                        node_ref=input_ref
                        on:change=on_file_change
                    />
                    <label for="bulkFile" class="browse-button">"Browse…"</label>
                    <span class="file-name">
                        {move || {
                            form.with(|f| {
                                if f.reading_file() {
                                    return "Reading file...".to_string();
                                }
                                f.selected_file()
                                    .map(|file| file.name().to_string())
                                    .unwrap_or_else(|| "No file selected".to_string())
                            })
                        }}
                    </span>
                </div>
            </div>

            <div class="field">
                <label class="field-label" for="labelSize">"Label Size:"</label>
                <select id="labelSize" on:change=on_size_change>
                    {LabelSize::ALL
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option
                                    value=size.as_str()
                                    prop:selected=move || form.with(|f| f.label_size() == size)
                                >
                                    {size.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <button class="submit-button" on:click=on_submit disabled=busy>
                {move || if in_progress() { "Processing..." } else { "Upload & Generate" }}
            </button>

            <FeedbackBanner form=form/>
        </div>
    }
}
