use serde::{Deserialize, Serialize};

/// Positive integer identifying a product in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Returns `None` for zero, which is never a valid identifier.
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Identifier following this one, used when appending to the catalog.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn first() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(ProductId::new)
            .ok_or_else(|| format!("Invalid product id: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Shirt,
    TShirt,
    Pants,
    Watch,
    Perfume,
    Sunglasses,
    Shoes,
    Accessories,
}

impl Category {
    /// Every category, in the order the storefront lists them.
    pub const ALL: [Category; 8] = [
        Category::Shirt,
        Category::TShirt,
        Category::Pants,
        Category::Watch,
        Category::Perfume,
        Category::Sunglasses,
        Category::Shoes,
        Category::Accessories,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Shirt => write!(f, "shirt"),
            Category::TShirt => write!(f, "t-shirt"),
            Category::Pants => write!(f, "pants"),
            Category::Watch => write!(f, "watch"),
            Category::Perfume => write!(f, "perfume"),
            Category::Sunglasses => write!(f, "sunglasses"),
            Category::Shoes => write!(f, "shoes"),
            Category::Accessories => write!(f, "accessories"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shirt" => Ok(Category::Shirt),
            "t-shirt" => Ok(Category::TShirt),
            "pants" => Ok(Category::Pants),
            "watch" => Ok(Category::Watch),
            "perfume" => Ok(Category::Perfume),
            "sunglasses" => Ok(Category::Sunglasses),
            "shoes" => Ok(Category::Shoes),
            "accessories" => Ok(Category::Accessories),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    New,
    Old,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::New, Collection::Old];
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::New => write!(f, "new"),
            Collection::Old => write!(f, "old"),
        }
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Collection::New),
            "old" => Ok(Collection::Old),
            _ => Err(format!("Invalid product collection: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Kids,
    Regular,
    Big,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Kids, Size::Regular, Size::Big];
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Kids => write!(f, "kids"),
            Size::Regular => write!(f, "regular"),
            Size::Big => write!(f, "big"),
        }
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kids" => Ok(Size::Kids),
            "regular" => Ok(Size::Regular),
            "big" => Ok(Size::Big),
            _ => Err(format!("Invalid product size: {}", s)),
        }
    }
}
