//! Demo listings for the binary.
//!
//! The store is in-memory, so a bare start would come up empty; seeding a
//! few listings of every entity type makes the search and CRUD routes
//! exercisable immediately.

use chrono::Utc;
use uuid::Uuid;

use super::store::{Catalog, StoreResult};
use super::types::{
    Category, Demand, DemandKind, Hall, ListingStatus, Product, ProductType, Service,
    ServiceCategory,
};

pub const SEED_OWNER: &str = "demo@itbhu.ac.in";

pub fn seed_demo_listings(catalog: &dyn Catalog) -> StoreResult<()> {
    let products = [
        ("Study Lamp", "Warm LED study lamp", 300.0, Category::Electronics, Hall::Rk, 4),
        ("Desk Lamp", "Adjustable desk lamp", 800.0, Category::Electronics, Hall::Ms, 5),
        ("Gaming Chair", "Barely used, full recline", 4500.0, Category::Furniture, Hall::Llr, 4),
        ("Calculus Textbook", "Thomas, 14th edition", 250.0, Category::Books, Hall::Gh, 3),
    ];
    for (title, description, price, category, hall, condition) in products {
        catalog.put_product(Product {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            price,
            category,
            product_type: ProductType::Sell,
            status: ListingStatus::Available,
            condition,
            address_hall: hall,
            images: vec![],
            owner_email: SEED_OWNER.to_string(),
            created_at: Utc::now(),
        })?;
    }

    let services = [
        ("Math Tutoring", "Calculus and linear algebra", 150.0, 400.0, ServiceCategory::Tutoring),
        ("Cycle Repair", "Punctures, brakes, gears", 50.0, 300.0, ServiceCategory::Repair),
    ];
    for (title, description, min_price, max_price, category) in services {
        catalog.put_service(Service {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            min_price,
            max_price,
            category,
            experience: "2 years".to_string(),
            address_hall: Hall::Rk,
            images: vec![],
            owner_email: SEED_OWNER.to_string(),
            created_at: Utc::now(),
        })?;
    }

    let demands = [
        ("Need a mini fridge", DemandKind::Product, Some(Category::Appliances), None),
        (
            "Need a guitar teacher",
            DemandKind::Service,
            None,
            Some(ServiceCategory::Music),
        ),
    ];
    for (title, kind, product_category, service_category) in demands {
        catalog.put_demand(Demand {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: None,
            kind,
            product_category,
            service_category,
            owner_email: SEED_OWNER.to_string(),
            created_at: Utc::now(),
        })?;
    }

    Ok(())
}
