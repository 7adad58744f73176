use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::site_header::{SiteFooter, SiteHeader};
use crate::components::toaster::{ToastViewport, Toaster};
use crate::config;
use crate::pages::homework::HomeworkPage;
use crate::pages::menu::MenuPage;

#[component]
pub fn App() -> impl IntoView {
    // Catalog and toast settings are read once and injected through context
    let toast_settings = match config::load_site_config() {
        Ok(site) => {
            provide_context(site.catalog);
            site.toast
        }
        Err(e) => {
            log::error!("Failed to load site config: {}", e);
            Default::default()
        }
    };
    provide_context(Toaster::new(toast_settings));

    view! {
        <Router>
            <div class="app-layout">
                <SiteHeader />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=MenuPage />
                        <Route path=path!("/homework") view=HomeworkPage />
                    </Routes>
                </main>
                <SiteFooter />
            </div>
            <ToastViewport />
        </Router>
    }
}
