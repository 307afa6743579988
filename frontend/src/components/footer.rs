//! Footer component

use leptos::*;
use crate::BACKEND_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Waybills generated by " <span class="service-url">{BACKEND_URL}</span></div>
            <div class="footer-links">
                <a href="https://www.bluedart.com" class="footer-link" target="_blank">
                    "Bluedart"
                </a>
            </div>
        </footer>
    }
}
