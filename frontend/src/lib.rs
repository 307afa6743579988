//! Bulk Waybill - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for generating Bluedart waybills in bulk from a
//! filled spreadsheet template.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title)                                            │
//! │  ├── TemplateDownload                                        │
//! │  └── UploadForm                                              │
//! │      └── FeedbackBanner                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time service address
//! - [`components`] - UI components
//! - [`services`] - Browser implementations of the `waybill_core` capabilities

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use waybill_core::BulkWaybillForm;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚚 Bulk Waybill - Starting Leptos App ({})", BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    <Route path="/bulk-waybill" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let form = create_rw_signal(BulkWaybillForm::new());

    let body = match service_config() {
        Ok(config) => {
            let template_config = config.clone();
            view! {
                <TemplateDownload form=form config=template_config/>
                <UploadForm form=form config=config/>
            }
            .into_view()
        }
        Err(e) => {
            log::error!("❌ {}", e);
            view! { <div class="feedback error">"❌ " {e.to_string()}</div> }.into_view()
        }
    };

    view! {
        <div class="container">
            <Hero/>
            {body}
        </div>

        <Footer/>
    }
}
