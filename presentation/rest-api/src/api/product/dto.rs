use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::product::model::{Product, ProductPatch};
use business::domain::product::value_objects::{Category, Collection, Size};

#[derive(Debug, Clone, Copy, Enum)]
pub enum CategoryDto {
    #[oai(rename = "shirt")]
    Shirt,
    #[oai(rename = "t-shirt")]
    TShirt,
    #[oai(rename = "pants")]
    Pants,
    #[oai(rename = "watch")]
    Watch,
    #[oai(rename = "perfume")]
    Perfume,
    #[oai(rename = "sunglasses")]
    Sunglasses,
    #[oai(rename = "shoes")]
    Shoes,
    #[oai(rename = "accessories")]
    Accessories,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Shirt => CategoryDto::Shirt,
            Category::TShirt => CategoryDto::TShirt,
            Category::Pants => CategoryDto::Pants,
            Category::Watch => CategoryDto::Watch,
            Category::Perfume => CategoryDto::Perfume,
            Category::Sunglasses => CategoryDto::Sunglasses,
            Category::Shoes => CategoryDto::Shoes,
            Category::Accessories => CategoryDto::Accessories,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Shirt => Category::Shirt,
            CategoryDto::TShirt => Category::TShirt,
            CategoryDto::Pants => Category::Pants,
            CategoryDto::Watch => Category::Watch,
            CategoryDto::Perfume => Category::Perfume,
            CategoryDto::Sunglasses => Category::Sunglasses,
            CategoryDto::Shoes => Category::Shoes,
            CategoryDto::Accessories => Category::Accessories,
        }
    }
}

#[derive(Debug, Clone, Copy, Enum)]
pub enum CollectionDto {
    #[oai(rename = "new")]
    New,
    #[oai(rename = "old")]
    Old,
}

impl From<Collection> for CollectionDto {
    fn from(collection: Collection) -> Self {
        match collection {
            Collection::New => CollectionDto::New,
            Collection::Old => CollectionDto::Old,
        }
    }
}

impl From<CollectionDto> for Collection {
    fn from(dto: CollectionDto) -> Self {
        match dto {
            CollectionDto::New => Collection::New,
            CollectionDto::Old => Collection::Old,
        }
    }
}

#[derive(Debug, Clone, Copy, Enum)]
pub enum SizeDto {
    #[oai(rename = "kids")]
    Kids,
    #[oai(rename = "regular")]
    Regular,
    #[oai(rename = "big")]
    Big,
}

impl From<Size> for SizeDto {
    fn from(size: Size) -> Self {
        match size {
            Size::Kids => SizeDto::Kids,
            Size::Regular => SizeDto::Regular,
            Size::Big => SizeDto::Big,
        }
    }
}

impl From<SizeDto> for Size {
    fn from(dto: SizeDto) -> Self {
        match dto {
            SizeDto::Kids => Size::Kids,
            SizeDto::Regular => Size::Regular,
            SizeDto::Big => Size::Big,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price, greater than zero
    pub price: f64,
    pub category: CategoryDto,
    pub collection: CollectionDto,
    pub size: SizeDto,
    /// Promotional label such as "New Arrival"
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    /// Image URL
    pub image: String,
}

/// Fields to overwrite; absent fields keep their stored value.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
    #[oai(skip_serializing_if_is_none)]
    pub collection: Option<CollectionDto>,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<SizeDto>,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(dto: UpdateProductRequest) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            category: dto.category.map(Into::into),
            collection: dto.collection.map(Into::into),
            size: dto.size.map(Into::into),
            badge: dto.badge,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: CategoryDto,
    pub collection: CollectionDto,
    pub size: SizeDto,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    pub image: String,
    /// Creation timestamp
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            category: product.category.into(),
            collection: product.collection.into(),
            size: product.size.into(),
            badge: product.badge,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
