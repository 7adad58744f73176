//! Canteen catalog and the category filter over it.

use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::ConfigError;
use crate::toast::Notification;

/// Fixed set of menu sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Beverages,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Beverages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Beverages => "Beverages",
        }
    }
}

/// Active category selection on the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order: "All" first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    /// Unique within a catalog.
    pub name: String,
    /// Whole rupees.
    pub price: u32,
    pub image: String,
    pub description: String,
    pub category: Category,
}

impl MenuItem {
    pub fn price_label(&self) -> String {
        format!("\u{20b9}{}", self.price)
    }
}

/// Read-only list of menu items, cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[MenuItem]>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists, duplicate names and free items.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::DuplicateItem(item.name.clone()));
            }
            if item.price == 0 {
                return Err(ConfigError::ZeroPrice(item.name.clone()));
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// State behind the menu page: the catalog and the selected category.
#[derive(Debug, Clone)]
pub struct MenuBrowser {
    catalog: Catalog,
    filter: CategoryFilter,
}

impl MenuBrowser {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        log::debug!("Menu filter set to {}", filter.label());
        self.filter = filter;
    }

    /// Items matching the active filter, in catalog order. May be empty.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.catalog
            .items()
            .iter()
            .filter(|item| self.filter.matches(item.category))
            .collect()
    }

    /// There is no cart; this only produces the confirmation toast.
    pub fn add_to_cart(&self, item: &MenuItem) -> Notification {
        log::info!("Add to cart: {}", item.name);
        Notification::new(
            "Added to cart!",
            format!("{} has been added to your cart.", item.name),
        )
    }
}
