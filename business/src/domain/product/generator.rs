//! Demo catalog generation, used to seed an empty database.

use rand::Rng;

use super::model::Product;
use super::value_objects::{Category, Collection, ProductId, Size};

pub const DEFAULT_CATALOG_SIZE: usize = 1000;

struct CategoryTemplate {
    category: Category,
    base: &'static str,
    variants: [&'static str; 10],
    /// Whole currency units, upper bound exclusive.
    price_range: (u32, u32),
}

const TEMPLATES: [CategoryTemplate; 8] = [
    CategoryTemplate {
        category: Category::Shirt,
        base: "Dress Shirt",
        variants: [
            "Classic", "Premium", "Luxury", "Executive", "Slim Fit", "Regular Fit", "Oxford",
            "Linen", "Cotton", "Silk",
        ],
        price_range: (89, 299),
    },
    CategoryTemplate {
        category: Category::TShirt,
        base: "T-Shirt",
        variants: [
            "Crew Neck", "V-Neck", "Polo", "Henley", "Long Sleeve", "Graphic", "Plain",
            "Striped", "Premium Cotton", "Athletic",
        ],
        price_range: (49, 149),
    },
    CategoryTemplate {
        category: Category::Pants,
        base: "Pants",
        variants: [
            "Chino", "Dress", "Casual", "Slim", "Straight", "Tailored", "Cotton", "Wool",
            "Linen", "Cargo",
        ],
        price_range: (129, 399),
    },
    CategoryTemplate {
        category: Category::Watch,
        base: "Watch",
        variants: [
            "Chronograph", "Automatic", "Classic", "Sport", "Dress", "Diver", "Pilot", "Racing",
            "Skeleton", "Smart",
        ],
        price_range: (499, 2999),
    },
    CategoryTemplate {
        category: Category::Perfume,
        base: "Perfume",
        variants: [
            "Eau de Parfum", "Eau de Toilette", "Cologne", "Woody", "Fresh", "Oriental",
            "Citrus", "Aquatic", "Spicy", "Leather",
        ],
        price_range: (149, 599),
    },
    CategoryTemplate {
        category: Category::Sunglasses,
        base: "Sunglasses",
        variants: [
            "Aviator", "Wayfarer", "Round", "Square", "Cat Eye", "Sport", "Classic", "Polarized",
            "Vintage", "Modern",
        ],
        price_range: (199, 799),
    },
    CategoryTemplate {
        category: Category::Shoes,
        base: "Shoes",
        variants: [
            "Oxford", "Derby", "Loafer", "Monk Strap", "Chelsea", "Brogue", "Sneaker", "Boot",
            "Driving", "Moccasin",
        ],
        price_range: (249, 899),
    },
    CategoryTemplate {
        category: Category::Accessories,
        base: "Accessory",
        variants: [
            "Belt", "Wallet", "Tie", "Pocket Square", "Cufflinks", "Briefcase", "Scarf", "Hat",
            "Gloves", "Keychain",
        ],
        price_range: (79, 399),
    },
];

const COLORS: [&str; 10] = [
    "Black", "White", "Navy", "Gray", "Brown", "Burgundy", "Olive", "Charcoal", "Tan", "Blue",
];
const MATERIALS: [&str; 10] = [
    "Cotton", "Leather", "Wool", "Silk", "Linen", "Cashmere", "Stainless Steel", "Gold",
    "Silver", "Titanium",
];
const BRANDS: [&str; 10] = [
    "Luxe", "Elite", "Premium", "Heritage", "Classic", "Modern", "Royal", "Imperial",
    "Signature", "Exclusive",
];

/// Generates `count` products spread evenly over every category.
///
/// Ids run from 1 to `count` in generation order. When `count` is not a
/// multiple of the category count, the remainder is filled with plain
/// "Premium" items in random categories.
pub fn generate_catalog<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Product> {
    let mut products = Vec::with_capacity(count);
    let mut id = ProductId::first();
    let per_category = count / TEMPLATES.len();

    for template in &TEMPLATES {
        for i in 0..per_category {
            products.push(styled_product(rng, template, i, id));
            id = id.next();
        }
    }

    while products.len() < count {
        let template = &TEMPLATES[rng.random_range(0..TEMPLATES.len())];
        let brand = BRANDS[id.value() as usize % BRANDS.len()];
        products.push(Product {
            id,
            name: format!("{} Premium {}", brand, template.base),
            price: f64::from(rng.random_range(100..600u32)),
            category: template.category,
            collection: Collection::New,
            size: Size::Regular,
            badge: None,
            image: image_url(template.category, id),
            created_at: None,
            updated_at: None,
        });
        id = id.next();
    }

    products
}

fn styled_product<R: Rng + ?Sized>(
    rng: &mut R,
    template: &CategoryTemplate,
    index: usize,
    id: ProductId,
) -> Product {
    let variant = template.variants[index % template.variants.len()];
    let color = pick(rng, &COLORS);
    let material = pick(rng, &MATERIALS);
    let brand = pick(rng, &BRANDS);
    let (min_price, max_price) = template.price_range;
    let price = f64::from(rng.random_range(min_price..max_price));

    let collection = if rng.random_bool(0.7) {
        Collection::New
    } else {
        Collection::Old
    };
    let size = Size::ALL[rng.random_range(0..Size::ALL.len())];

    Product {
        id,
        name: format!(
            "{} {} {} {} {}",
            brand, color, material, variant, template.base
        ),
        price,
        category: template.category,
        collection,
        size,
        badge: roll_badge(rng, collection),
        image: image_url(template.category, id),
        created_at: None,
        updated_at: None,
    }
}

fn roll_badge<R: Rng + ?Sized>(rng: &mut R, collection: Collection) -> Option<String> {
    let badge = if collection == Collection::New && rng.random_bool(0.3) {
        "New Arrival"
    } else if collection == Collection::Old && rng.random_bool(0.2) {
        "Vintage Edition"
    } else if rng.random_bool(0.1) {
        "Limited Edition"
    } else {
        return None;
    };
    Some(badge.to_string())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

/// Stable placeholder image for a product.
pub fn image_url(category: Category, id: ProductId) -> String {
    let seed = (u64::from(id.value()) * 7919) % 1000;
    format!("https://picsum.photos/seed/{}{}/400/500", category, seed)
}
