use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// One product's quantity in the cart, with the details needed to show and
/// price it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Shopping cart, keyed by product id.
///
/// Lines keep the order products were first added in. Every line has a
/// quantity of at least one and no id appears twice. Totals are derived on
/// each read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::for_product(product)),
        }
    }

    /// Sets the absolute quantity for `id`; zero or less removes the line.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(line) = self.line_mut(id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Unrounded total; round only when presenting it.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn formatted_total(&self) -> String {
        format_amount(self.total())
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == id)
    }
}

/// Two-decimal presentation of a currency amount.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
