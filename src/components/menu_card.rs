use leptos::prelude::*;

use crate::menu::MenuItem;

#[component]
pub fn MenuCard(item: MenuItem, #[prop(into)] on_add: Callback<MenuItem>) -> impl IntoView {
    let price = item.price_label();
    let category = item.category.label();
    let clicked = item.clone();
    let MenuItem {
        name,
        image,
        description,
        ..
    } = item;

    view! {
        <div class="menu-card">
            <div class="menu-card-image">
                <img src=image alt=name.clone() loading="lazy" />
                <span class="menu-card-badge">{category}</span>
            </div>

            <div class="menu-card-header">
                <div class="menu-card-title-row">
                    <h3 class="menu-card-title">{name}</h3>
                    <span class="menu-card-rating">
                        <span class="star">"\u{2605}"</span>
                        "4.5"
                    </span>
                </div>
                <p class="menu-card-description">{description}</p>
            </div>

            <div class="menu-card-footer">
                <span class="menu-card-price">{price}</span>
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_add.run(clicked.clone())
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
