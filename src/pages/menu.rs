//! Canteen menu with category filtering.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::menu_card::MenuCard;
use crate::components::toaster::use_toaster;
use crate::menu::{Catalog, CategoryFilter, MenuBrowser, MenuItem};

#[component]
pub fn MenuPage() -> impl IntoView {
    match use_context::<Catalog>() {
        Some(catalog) => view! { <MenuBrowserView catalog=catalog /> }.into_any(),
        None => view! {
            <div class="page menu-page">
                <div class="error-message">
                    <h3>"Menu unavailable"</h3>
                    <p>"The canteen menu could not be loaded. Please try again later."</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MenuBrowserView(catalog: Catalog) -> impl IntoView {
    let browser = RwSignal::new(MenuBrowser::new(catalog));
    let toaster = use_toaster();
    let menu_section = NodeRef::<Section>::new();

    let scroll_to_menu = move |_| {
        if let Some(section) = menu_section.get() {
            section.scroll_into_view();
        }
    };

    let on_add = Callback::new(move |item: MenuItem| {
        let toast = browser.with_untracked(|b| b.add_to_cart(&item));
        toaster.show(toast);
    });

    let visible = move || {
        browser.with(|b| b.visible_items().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="page menu-page">
            <style>{include_str!("menu.css")}</style>

            <section class="menu-hero">
                <h1 class="hero-title">"Welcome to Lethishya's Canteen"</h1>
                <p class="hero-subtitle">
                    "Delicious homemade food made with love. Fresh ingredients, authentic taste, and affordable prices!"
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=scroll_to_menu>
                        "Order Now"
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=scroll_to_menu>
                        "View Menu"
                    </button>
                </div>
            </section>

            <section class="menu-section" node_ref=menu_section>
                <div class="section-heading">
                    <h2>"Our Menu"</h2>
                    <p class="page-description">"Explore our delicious offerings"</p>
                </div>

                <div class="category-filter">
                    {CategoryFilter::options()
                        .map(move |filter| {
                            view! {
                                <button
                                    class="btn"
                                    class:btn-primary=move || browser.with(|b| b.filter() == filter)
                                    class:btn-outline=move || browser.with(|b| b.filter() != filter)
                                    on:click=move |_| browser.update(|b| b.select_category(filter))
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="menu-grid">
                    <For
                        each=visible
                        key=|item| item.name.clone()
                        children=move |item| view! { <MenuCard item=item on_add=on_add /> }
                    />
                </div>
            </section>

            <section class="feature-strip">
                <div class="feature">
                    <span class="feature-icon">"\u{1f37d}"</span>
                    <h3>"Fresh Ingredients"</h3>
                    <p>"We use only the freshest ingredients in all our dishes"</p>
                </div>
                <div class="feature">
                    <span class="feature-icon">"\u{26a1}"</span>
                    <h3>"Quick Service"</h3>
                    <p>"Fast preparation and delivery to save your time"</p>
                </div>
                <div class="feature">
                    <span class="feature-icon">"\u{1f4b0}"</span>
                    <h3>"Affordable Prices"</h3>
                    <p>"Great taste at prices that won't break the bank"</p>
                </div>
            </section>
        </div>
    }
}
