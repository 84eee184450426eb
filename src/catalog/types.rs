//! Catalog entity types, fixed enumerations, and request payloads.
//!
//! Wire format is camelCase JSON; enumeration values serialize as their
//! SCREAMING_SNAKE_CASE names. Filter input arriving as free text is
//! upper-cased before it is compared against these names, so clients may send
//! `electronics`, `Electronics`, or `ELECTRONICS` interchangeably.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Furniture,
    Books,
    Clothing,
    Sports,
    Appliances,
    Vehicles,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Furniture => "FURNITURE",
            Category::Books => "BOOKS",
            Category::Clothing => "CLOTHING",
            Category::Sports => "SPORTS",
            Category::Appliances => "APPLIANCES",
            Category::Vehicles => "VEHICLES",
            Category::Other => "OTHER",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "ELECTRONICS" => Some(Category::Electronics),
            "FURNITURE" => Some(Category::Furniture),
            "BOOKS" => Some(Category::Books),
            "CLOTHING" => Some(Category::Clothing),
            "SPORTS" => Some(Category::Sports),
            "APPLIANCES" => Some(Category::Appliances),
            "VEHICLES" => Some(Category::Vehicles),
            "OTHER" => Some(Category::Other),
            _ => None,
        }
    }
}

/// Service listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    Tutoring,
    Repair,
    Design,
    Photography,
    Fitness,
    Music,
    Other,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Tutoring => "TUTORING",
            ServiceCategory::Repair => "REPAIR",
            ServiceCategory::Design => "DESIGN",
            ServiceCategory::Photography => "PHOTOGRAPHY",
            ServiceCategory::Fitness => "FITNESS",
            ServiceCategory::Music => "MUSIC",
            ServiceCategory::Other => "OTHER",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "TUTORING" => Some(ServiceCategory::Tutoring),
            "REPAIR" => Some(ServiceCategory::Repair),
            "DESIGN" => Some(ServiceCategory::Design),
            "PHOTOGRAPHY" => Some(ServiceCategory::Photography),
            "FITNESS" => Some(ServiceCategory::Fitness),
            "MUSIC" => Some(ServiceCategory::Music),
            "OTHER" => Some(ServiceCategory::Other),
            _ => None,
        }
    }
}

/// Campus residence halls, used as the location filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hall {
    Rk,
    Ms,
    Llr,
    Gh,
    Azad,
    Patel,
    Nehru,
    Mt,
    OffCampus,
}

impl Hall {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hall::Rk => "RK",
            Hall::Ms => "MS",
            Hall::Llr => "LLR",
            Hall::Gh => "GH",
            Hall::Azad => "AZAD",
            Hall::Patel => "PATEL",
            Hall::Nehru => "NEHRU",
            Hall::Mt => "MT",
            Hall::OffCampus => "OFF_CAMPUS",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "RK" => Some(Hall::Rk),
            "MS" => Some(Hall::Ms),
            "LLR" => Some(Hall::Llr),
            "GH" => Some(Hall::Gh),
            "AZAD" => Some(Hall::Azad),
            "PATEL" => Some(Hall::Patel),
            "NEHRU" => Some(Hall::Nehru),
            "MT" => Some(Hall::Mt),
            "OFF_CAMPUS" => Some(Hall::OffCampus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Sell,
    Rent,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Sell => "SELL",
            ProductType::Rent => "RENT",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "SELL" => Some(ProductType::Sell),
            "RENT" => Some(ProductType::Rent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Available,
    Sold,
    Reserved,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "AVAILABLE",
            ListingStatus::Sold => "SOLD",
            ListingStatus::Reserved => "RESERVED",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "AVAILABLE" => Some(ListingStatus::Available),
            "SOLD" => Some(ListingStatus::Sold),
            "RESERVED" => Some(ListingStatus::Reserved),
            _ => None,
        }
    }
}

/// Discriminates which kind of listing a demand asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandKind {
    Product,
    Service,
}

impl DemandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandKind::Product => "PRODUCT",
            DemandKind::Service => "SERVICE",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "PRODUCT" => Some(DemandKind::Product),
            "SERVICE" => Some(DemandKind::Service),
            _ => None,
        }
    }
}

/// Condition ratings run 1 (heavily used) through 5 (like new).
pub const MAX_CONDITION: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Category,
    pub product_type: ProductType,
    pub status: ListingStatus,
    pub condition: u8,
    pub address_hall: Hall,
    pub images: Vec<String>,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub category: ServiceCategory,
    pub experience: String,
    pub address_hall: Hall,
    pub images: Vec<String>,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: DemandKind,
    pub product_category: Option<Category>,
    pub service_category: Option<ServiceCategory>,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

/// Common accessors the store and the ownership checks need from every
/// catalog entity.
pub trait Record: Clone {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn owner_email(&self) -> &str;
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn owner_email(&self) -> &str {
        &self.owner_email
    }
}

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn owner_email(&self) -> &str {
        &self.owner_email
    }
}

impl Record for Demand {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn owner_email(&self) -> &str {
        &self.owner_email
    }
}

// ---- request payloads -------------------------------------------------------
//
// Enum-valued fields arrive as free strings and are parsed through
// `from_input` in the handlers so a bad value maps to 400 rather than a
// deserialization rejection.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub product_type: Option<String>,
    pub condition: i64,
    pub address_hall: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub status: Option<String>,
    pub condition: Option<i64>,
    pub address_hall: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub category: String,
    pub experience: Option<String>,
    pub address_hall: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category: Option<String>,
    pub experience: Option<String>,
    pub address_hall: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDemandRequest {
    pub title: String,
    pub description: Option<String>,
    /// "PRODUCT" or "SERVICE".
    pub kind: String,
    pub category: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDemandRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
