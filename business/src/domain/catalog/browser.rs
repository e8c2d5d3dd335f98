use std::ops::RangeInclusive;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Category, Collection, Size};

use super::filter::{FilterSelection, Selector, filter_products};
use super::load::CatalogLoad;
use super::pagination::{page_size_for, page_window, paginate, total_pages};

/// Browsing state of the product grid: loaded catalog, active selectors and
/// current page.
///
/// Any selector change sends the shopper back to page 1.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    load: CatalogLoad,
    selection: FilterSelection,
    current_page: usize,
}

/// Everything needed to render one page of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a Product>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub page_window: RangeInclusive<usize>,
    /// Controls are only offered while browsing every category.
    pub show_pagination: bool,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self {
            load: CatalogLoad::Pending,
            selection: FilterSelection::default(),
            current_page: 1,
        }
    }

    pub fn load_state(&self) -> &CatalogLoad {
        &self.load
    }

    /// Resolves the pending catalog load; see [`CatalogLoad::resolve`].
    pub fn resolve<E: std::fmt::Display>(&mut self, result: Result<Vec<Product>, E>) -> bool {
        self.load.resolve(result)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_category(&mut self, category: Selector<Category>) {
        self.selection.category = category;
        self.current_page = 1;
    }

    pub fn set_collection(&mut self, collection: Selector<Collection>) {
        self.selection.collection = collection;
        self.current_page = 1;
    }

    pub fn set_size(&mut self, size: Selector<Size>) {
        self.selection.size = size;
        self.current_page = 1;
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.current_page = 1;
    }

    pub fn page_size(&self) -> usize {
        page_size_for(&self.selection.category)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.matching().len(), self.page_size())
    }

    /// Jumps to `page`, clamped to the available pages.
    pub fn go_to_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn next_page(&mut self) {
        let last = self.total_pages().max(1);
        self.current_page = (self.current_page + 1).min(last);
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn view(&self) -> CatalogView<'_> {
        let matching = self.matching();
        let page_size = self.page_size();
        let total_pages = total_pages(matching.len(), page_size);
        let items = paginate(&matching, self.current_page, page_size).to_vec();

        CatalogView {
            items,
            total_matches: matching.len(),
            total_pages,
            current_page: self.current_page,
            page_size,
            page_window: page_window(total_pages, self.current_page),
            show_pagination: total_pages > 1 && self.selection.category.is_all(),
        }
    }

    fn matching(&self) -> Vec<&Product> {
        filter_products(self.load.products(), &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::ProductId;

    fn catalog(shirts: u32, watches: u32) -> Vec<Product> {
        (1..=shirts + watches)
            .map(|id| Product {
                id: ProductId::new(id).unwrap(),
                name: format!("Item {}", id),
                price: 120.0,
                category: if id <= shirts {
                    Category::Shirt
                } else {
                    Category::Watch
                },
                collection: if id % 2 == 0 {
                    Collection::New
                } else {
                    Collection::Old
                },
                size: Size::Regular,
                badge: None,
                image: String::new(),
                created_at: None,
                updated_at: None,
            })
            .collect()
    }

    fn ready(products: Vec<Product>) -> CatalogBrowser {
        let mut browser = CatalogBrowser::new();
        browser.resolve::<String>(Ok(products));
        browser
    }

    #[test]
    fn should_render_nothing_while_pending() {
        let browser = CatalogBrowser::new();
        let view = browser.view();

        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(!view.show_pagination);
    }

    #[test]
    fn should_render_nothing_when_load_failed() {
        let mut browser = CatalogBrowser::new();
        browser.resolve::<&str>(Err("Failed to load products"));

        assert_eq!(browser.view().total_matches, 0);
        assert_eq!(browser.load_state().error(), Some("Failed to load products"));
    }

    #[test]
    fn should_page_all_products_by_24() {
        let mut browser = ready(catalog(25, 0));
        let first = browser.view();
        assert_eq!(first.items.len(), 24);
        assert_eq!(first.total_pages, 2);
        assert!(first.show_pagination);

        browser.next_page();
        let second = browser.view();
        assert_eq!(second.current_page, 2);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id.value(), 25);
    }

    #[test]
    fn should_page_single_category_by_20_without_controls() {
        let mut browser = ready(catalog(25, 3));
        browser.set_category(Selector::Only(Category::Shirt));

        let view = browser.view();
        assert_eq!(view.page_size, 20);
        assert_eq!(view.total_matches, 25);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 20);
        assert!(!view.show_pagination);

        browser.go_to_page(2);
        assert_eq!(browser.view().items.len(), 5);
    }

    #[test]
    fn should_reset_to_first_page_on_any_selector_change() {
        let mut browser = ready(catalog(100, 0));
        browser.go_to_page(3);
        browser.set_collection(Selector::Only(Collection::New));
        assert_eq!(browser.current_page(), 1);

        browser.go_to_page(2);
        browser.set_size(Selector::All);
        assert_eq!(browser.current_page(), 1);

        browser.go_to_page(2);
        browser.set_category(Selector::Only(Category::Shirt));
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn should_clamp_navigation_to_available_pages() {
        let mut browser = ready(catalog(30, 0));
        browser.previous_page();
        assert_eq!(browser.current_page(), 1);

        browser.go_to_page(99);
        assert_eq!(browser.current_page(), 2);

        browser.next_page();
        assert_eq!(browser.current_page(), 2);

        browser.go_to_page(0);
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn should_expose_page_window_for_long_catalogs() {
        let mut browser = ready(catalog(24 * 10, 0));
        browser.go_to_page(6);

        let view = browser.view();
        assert_eq!(view.total_pages, 10);
        assert_eq!(view.page_window, 4..=8);
    }
}
