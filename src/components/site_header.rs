use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-brand">"Lethishya's Canteen"</a>
            <nav>
                <ul class="nav-list">
                    <li class="nav-item">
                        <a href="/" class="nav-link">"Menu"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/homework" class="nav-link">"Homework Printer"</a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Made with love. Fresh food and handwritten homework, no cart required."</p>
        </footer>
    }
}
