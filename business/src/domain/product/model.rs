use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::{Category, Collection, ProductId, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub collection: Collection,
    pub size: Size,
    pub badge: Option<String>,
    pub image: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub collection: Collection,
    pub size: Size,
    pub badge: Option<String>,
    pub image: String,
}

impl NewProductProps {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Partial update: every `Some` field replaces the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub collection: Option<Collection>,
    pub size: Option<Size>,
    pub badge: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

impl Product {
    /// Builds a freshly created product. `props` must already be validated;
    /// the repository assigns `id` because it owns the id sequence.
    pub fn from_new(id: ProductId, props: NewProductProps, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: props.name,
            price: props.price,
            category: props.category,
            collection: props.collection,
            size: props.size,
            badge: normalize_badge(props.badge),
            image: props.image,
            created_at: Some(now),
            updated_at: None,
        }
    }

    /// Merges `patch` into this product and stamps `updated_at`.
    ///
    /// Leaves the product untouched when the merged result would be invalid.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) -> Result<(), ProductError> {
        patch.validate()?;
        self.merge(patch, now);
        Ok(())
    }

    /// Merges an already validated `patch` and stamps `updated_at`.
    pub fn merge(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(collection) = patch.collection {
            self.collection = collection;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if patch.badge.is_some() {
            self.badge = normalize_badge(patch.badge);
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        self.updated_at = Some(now);
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::PriceInvalid);
    }
    Ok(())
}

fn normalize_badge(badge: Option<String>) -> Option<String> {
    badge.filter(|b| !b.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            price,
            category: Category::Watch,
            collection: Collection::New,
            size: Size::Regular,
            badge: None,
            image: "https://picsum.photos/seed/watch1/400/500".to_string(),
        }
    }

    fn product() -> Product {
        Product::from_new(
            ProductId::first(),
            props("Royal Gold Chronograph Watch", 1299.0),
            Utc::now(),
        )
    }

    #[test]
    fn should_accept_valid_props() {
        assert!(props("Heritage Navy Linen Oxford Dress Shirt", 129.0).validate().is_ok());
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = props("   ", 10.0).validate();
        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_non_positive_or_non_finite_price() {
        for price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                props("Belt", price).validate(),
                Err(ProductError::PriceInvalid)
            ));
        }
    }

    #[test]
    fn should_stamp_created_at_and_drop_blank_badge() {
        let mut p = props("Belt", 79.0);
        p.badge = Some(" ".to_string());
        let product = Product::from_new(ProductId::first(), p, Utc::now());

        assert!(product.created_at.is_some());
        assert!(product.updated_at.is_none());
        assert!(product.badge.is_none());
    }

    #[test]
    fn should_merge_only_present_fields() {
        let mut product = product();
        let patch = ProductPatch {
            price: Some(999.0),
            badge: Some("Limited Edition".to_string()),
            ..Default::default()
        };

        product.apply(patch, Utc::now()).unwrap();

        assert_eq!(product.name, "Royal Gold Chronograph Watch");
        assert_eq!(product.price, 999.0);
        assert_eq!(product.badge.as_deref(), Some("Limited Edition"));
        assert!(product.updated_at.is_some());
    }

    #[test]
    fn should_leave_product_untouched_when_patch_invalid() {
        let mut product = product();
        let before = product.clone();
        let patch = ProductPatch {
            name: Some("Renamed".to_string()),
            price: Some(-1.0),
            ..Default::default()
        };

        let result = product.apply(patch, Utc::now());

        assert!(matches!(result, Err(ProductError::PriceInvalid)));
        assert_eq!(product, before);
    }
}
