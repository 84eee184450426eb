//! Search Module Tests
//!
//! Validates the search pipeline: text normalization, filter parsing, the
//! per-entity predicates, orchestration caps, and the zero-result suggestion
//! generator.
//!
//! ## Test Scopes
//! - **Normalizer**: case- and whitespace-insensitive containment.
//! - **Filters**: sloppy-input policy (blank, malformed, sentinel).
//! - **Engine**: empty-query short-circuit, caps, order preservation.
//! - **Global**: minimum query length, per-type caps, suggestions.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::{
        Extension,
        body::to_bytes,
        extract::Query,
        http::StatusCode,
        response::Response,
    };
    use chrono::{TimeZone, Utc};

    use crate::catalog::store::{Catalog, SharedCatalog, StoreError, StoreResult};
    use crate::catalog::types::{
        Category, Demand, DemandKind, Hall, ListingStatus, Product, ProductType, Service,
        ServiceCategory,
    };
    use crate::search::handlers::{
        GlobalSearchParams, ProductSearchParams, handle_global_search, handle_product_search,
    };
    use crate::search::engine::{
        GLOBAL_MAX_RESULTS, MAX_RESULTS, global_search, search_demands, search_products,
        search_services,
    };
    use crate::search::filters::{
        DemandFilters, ProductFilters, ServiceFilters, category_filter, demand_matches,
        enum_filter, numeric_filter, product_matches, service_matches, text_filter,
    };
    use crate::search::suggest::suggest;
    use crate::search::text::{matches, matches_listing, normalize};
    use crate::search::types::{GlobalSearchResponse, SearchResponse};

    fn product(id: &str, title: &str, category: Category, hall: Hall, price: f64) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            price,
            category,
            product_type: ProductType::Sell,
            status: ListingStatus::Available,
            condition: 4,
            address_hall: hall,
            images: vec![],
            owner_email: "seller@itbhu.ac.in".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn service(id: &str, title: &str, min_price: f64, max_price: f64) -> Service {
        Service {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            min_price,
            max_price,
            category: ServiceCategory::Tutoring,
            experience: "2 years".to_string(),
            address_hall: Hall::Rk,
            images: vec![],
            owner_email: "seller@itbhu.ac.in".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn demand(id: &str, title: &str, kind: DemandKind) -> Demand {
        Demand {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            kind,
            product_category: (kind == DemandKind::Product).then_some(Category::Electronics),
            service_category: (kind == DemandKind::Service).then_some(ServiceCategory::Tutoring),
            owner_email: "seller@itbhu.ac.in".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_lowercases_and_strips_whitespace() {
        assert_eq!(normalize("Mac Book  Pro"), "macbookpro");
        assert_eq!(normalize("  lamp\t"), "lamp");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_matches_direct_substring_case_insensitive() {
        assert!(matches("Study Lamp", "LAMP"));
        assert!(matches("Study Lamp", "study"));
    }

    #[test]
    fn test_matches_whitespace_insensitive_both_directions() {
        // Spaced query against a joined title.
        assert!(matches("MacBook", "mac book"));
        // Joined query against a spaced title.
        assert!(matches("Mac Book Pro", "macbook"));
    }

    #[test]
    fn test_matches_empty_sides_never_match() {
        assert!(!matches("", "lamp"));
        assert!(!matches("Study Lamp", ""));
        assert!(!matches("Study Lamp", "   "));
        assert!(!matches("", ""));
    }

    #[test]
    fn test_matches_no_fuzzy_matching() {
        // Transposition is not a match; only substring containment is.
        assert!(!matches("lamp", "lmap"));
        assert!(!matches("Study Lamp", "lampp"));
    }

    #[test]
    fn test_matches_listing_falls_back_to_description() {
        assert!(matches_listing("bright", "Study Lamp", Some("Very bright LED")));
        // Missing description is a non-match for that field only.
        assert!(!matches_listing("bright", "Study Lamp", None));
        assert!(matches_listing("lamp", "Study Lamp", None));
    }

    // ============================================================
    // FILTER PARSING TESTS
    // ============================================================

    #[test]
    fn test_enum_filter_blank_is_not_supplied() {
        assert_eq!(enum_filter(None), None);
        assert_eq!(enum_filter(Some("")), None);
        assert_eq!(enum_filter(Some("   ")), None);
    }

    #[test]
    fn test_enum_filter_uppercases_input() {
        assert_eq!(enum_filter(Some("electronics")), Some("ELECTRONICS".to_string()));
        assert_eq!(enum_filter(Some(" rk ")), Some("RK".to_string()));
    }

    #[test]
    fn test_category_filter_sentinel_is_not_supplied() {
        assert_eq!(category_filter(Some("All Categories")), None);
        assert_eq!(category_filter(Some("ALL CATEGORIES")), None);
        assert_eq!(category_filter(Some("all categories")), None);
        // A real category still passes through.
        assert_eq!(category_filter(Some("books")), Some("BOOKS".to_string()));
    }

    #[test]
    fn test_numeric_filter_malformed_is_not_supplied() {
        assert_eq!(numeric_filter::<f64>(Some("cheap")), None);
        assert_eq!(numeric_filter::<f64>(Some("")), None);
        assert_eq!(numeric_filter::<f64>(Some("500")), Some(500.0));
        assert_eq!(numeric_filter::<u8>(Some(" 3 ")), Some(3));
    }

    #[test]
    fn test_text_filter_trims_and_drops_blank() {
        assert_eq!(text_filter(Some("  2 years ")), Some("2 years".to_string()));
        assert_eq!(text_filter(Some("   ")), None);
    }

    // ============================================================
    // PREDICATE TESTS - products
    // ============================================================

    #[test]
    fn test_product_predicate_category_and_hall() {
        let p = product("p1", "Study Lamp", Category::Electronics, Hall::Rk, 300.0);

        let mut filters = ProductFilters {
            category: Some("ELECTRONICS".to_string()),
            hall: Some("RK".to_string()),
            ..Default::default()
        };
        assert!(product_matches(&p, "lamp", &filters));

        filters.hall = Some("MS".to_string());
        assert!(!product_matches(&p, "lamp", &filters));
    }

    #[test]
    fn test_product_predicate_unknown_category_matches_nothing() {
        let p = product("p1", "Study Lamp", Category::Electronics, Hall::Rk, 300.0);
        let filters = ProductFilters {
            category: Some("GADGETS".to_string()),
            ..Default::default()
        };
        assert!(!product_matches(&p, "lamp", &filters));
    }

    #[test]
    fn test_product_predicate_price_bounds_inclusive() {
        let p = product("p1", "Study Lamp", Category::Electronics, Hall::Rk, 500.0);

        let min_only = ProductFilters {
            min_price: Some(500.0),
            ..Default::default()
        };
        assert!(product_matches(&p, "lamp", &min_only));

        let max_only = ProductFilters {
            max_price: Some(500.0),
            ..Default::default()
        };
        assert!(product_matches(&p, "lamp", &max_only));

        let too_high = ProductFilters {
            min_price: Some(500.01),
            ..Default::default()
        };
        assert!(!product_matches(&p, "lamp", &too_high));
    }

    #[test]
    fn test_product_predicate_condition_is_lower_bound() {
        let p = product("p1", "Study Lamp", Category::Electronics, Hall::Rk, 300.0);
        // Fixture condition is 4.
        let ok = ProductFilters {
            min_condition: Some(4),
            ..Default::default()
        };
        assert!(product_matches(&p, "lamp", &ok));

        let too_strict = ProductFilters {
            min_condition: Some(5),
            ..Default::default()
        };
        assert!(!product_matches(&p, "lamp", &too_strict));
    }

    #[test]
    fn test_product_predicate_type_and_status() {
        let p = product("p1", "Study Lamp", Category::Electronics, Hall::Rk, 300.0);

        let sell = ProductFilters {
            product_type: Some("SELL".to_string()),
            status: Some("AVAILABLE".to_string()),
            ..Default::default()
        };
        assert!(product_matches(&p, "lamp", &sell));

        let rent = ProductFilters {
            product_type: Some("RENT".to_string()),
            ..Default::default()
        };
        assert!(!product_matches(&p, "lamp", &rent));
    }

    // ============================================================
    // PREDICATE TESTS - services
    // ============================================================

    #[test]
    fn test_service_predicate_price_range_overlap() {
        let s = service("s1", "Math Tutoring", 200.0, 400.0);

        // Overlapping window matches.
        let overlapping = ServiceFilters {
            min_price: Some(300.0),
            max_price: Some(1000.0),
            ..Default::default()
        };
        assert!(service_matches(&s, "tutoring", &overlapping));

        // Touching at the boundary is inclusive.
        let boundary = ServiceFilters {
            min_price: Some(400.0),
            ..Default::default()
        };
        assert!(service_matches(&s, "tutoring", &boundary));

        // Entirely above the service range.
        let above = ServiceFilters {
            min_price: Some(400.01),
            ..Default::default()
        };
        assert!(!service_matches(&s, "tutoring", &above));

        // Entirely below.
        let below = ServiceFilters {
            max_price: Some(199.99),
            ..Default::default()
        };
        assert!(!service_matches(&s, "tutoring", &below));
    }

    #[test]
    fn test_service_predicate_experience_exact_case_insensitive() {
        let s = service("s1", "Math Tutoring", 200.0, 400.0);

        let exact = ServiceFilters {
            experience: Some("2 Years".to_string()),
            ..Default::default()
        };
        assert!(service_matches(&s, "tutoring", &exact));

        let different = ServiceFilters {
            experience: Some("5 years".to_string()),
            ..Default::default()
        };
        assert!(!service_matches(&s, "tutoring", &different));
    }

    // ============================================================
    // PREDICATE TESTS - demands
    // ============================================================

    #[test]
    fn test_demand_predicate_kind_discriminator() {
        let d = demand("d1", "Need a desk chair", DemandKind::Product);

        let product_kind = DemandFilters {
            kind: Some("PRODUCT".to_string()),
        };
        assert!(demand_matches(&d, "chair", &product_kind));

        let service_kind = DemandFilters {
            kind: Some("SERVICE".to_string()),
        };
        assert!(!demand_matches(&d, "chair", &service_kind));
    }

    // ============================================================
    // ENGINE TESTS - per-entity orchestration
    // ============================================================

    #[test]
    fn test_search_empty_query_returns_empty_not_error() {
        let products = vec![product(
            "p1",
            "Study Lamp",
            Category::Electronics,
            Hall::Rk,
            300.0,
        )];
        let services = vec![service("s1", "Math Tutoring", 200.0, 400.0)];
        let demands = vec![demand("d1", "Need a chair", DemandKind::Product)];

        assert!(search_products(&products, "", &ProductFilters::default(), 10).is_empty());
        assert!(search_products(&products, "   ", &ProductFilters::default(), 10).is_empty());
        assert!(search_services(&services, "", &ServiceFilters::default(), 10).is_empty());
        assert!(search_demands(&demands, "", &DemandFilters::default(), 10).is_empty());
    }

    #[test]
    fn test_search_respects_limit_and_hard_ceiling() {
        let candidates: Vec<Product> = (0..150)
            .map(|i| {
                product(
                    &format!("p{i}"),
                    "Desk Lamp",
                    Category::Electronics,
                    Hall::Rk,
                    100.0,
                )
            })
            .collect();

        let capped = search_products(&candidates, "lamp", &ProductFilters::default(), 7);
        assert_eq!(capped.len(), 7);

        // A limit above the ceiling is clamped to MAX_RESULTS.
        let ceiling = search_products(&candidates, "lamp", &ProductFilters::default(), 10_000);
        assert_eq!(ceiling.len(), MAX_RESULTS);
    }

    #[test]
    fn test_search_preserves_candidate_order_and_is_idempotent() {
        let candidates = vec![
            product("p1", "Desk Lamp", Category::Electronics, Hall::Rk, 100.0),
            product("p2", "Floor Lamp", Category::Electronics, Hall::Ms, 200.0),
            product("p3", "Lava Lamp", Category::Electronics, Hall::Gh, 300.0),
        ];

        let first = search_products(&candidates, "lamp", &ProductFilters::default(), 10);
        let second = search_products(&candidates, "lamp", &ProductFilters::default(), 10);

        let first_ids: Vec<&str> = first.iter().map(|p| p.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first_ids, vec!["p1", "p2", "p3"]);
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_all_categories_sentinel_equals_no_filter() {
        let candidates = vec![
            product("p1", "Desk Chair", Category::Furniture, Hall::Rk, 400.0),
            product("p2", "Gaming Chair", Category::Furniture, Hall::Ms, 900.0),
        ];

        let with_sentinel = ProductFilters {
            category: category_filter(Some("All Categories")),
            ..Default::default()
        };
        let without = ProductFilters::default();

        let a = search_products(&candidates, "chair", &with_sentinel, 10);
        let b = search_products(&candidates, "chair", &without, 10);

        let a_ids: Vec<&str> = a.iter().map(|p| p.id.as_str()).collect();
        let b_ids: Vec<&str> = b.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(a_ids, b_ids);
    }

    // ============================================================
    // ENGINE TESTS - global search
    // ============================================================

    fn lamp_corpus() -> (Vec<Product>, Vec<Service>, Vec<Demand>) {
        let products = vec![
            product("pa", "Study Lamp", Category::Electronics, Hall::Rk, 300.0),
            product("pb", "Desk Lamp", Category::Electronics, Hall::Ms, 800.0),
        ];
        (products, vec![], vec![])
    }

    #[test]
    fn test_global_search_short_query_yields_empty_envelope() {
        let (products, services, demands) = lamp_corpus();

        for query in ["", "a", " a "] {
            let outcome = global_search(&products, &services, &demands, query, 20);
            assert_eq!(outcome.total, 0);
            assert!(outcome.products.is_empty());
            assert!(outcome.services.is_empty());
            assert!(outcome.demands.is_empty());
            assert!(outcome.suggestions.is_none(), "no suggestions for {query:?}");
        }
    }

    #[test]
    fn test_global_search_caps_each_type() {
        let products: Vec<Product> = (0..50)
            .map(|i| {
                product(
                    &format!("p{i}"),
                    "Desk Lamp",
                    Category::Electronics,
                    Hall::Rk,
                    100.0,
                )
            })
            .collect();

        let outcome = global_search(&products, &[], &[], "lamp", 1_000);
        assert_eq!(outcome.products.len(), GLOBAL_MAX_RESULTS);

        let small = global_search(&products, &[], &[], "lamp", 3);
        assert_eq!(small.products.len(), 3);
    }

    #[test]
    fn test_global_search_no_suggestions_when_results_exist() {
        let (products, services, demands) = lamp_corpus();
        let outcome = global_search(&products, &services, &demands, "lamp", 20);
        assert_eq!(outcome.total, 2);
        assert!(outcome.suggestions.is_none());
    }

    #[test]
    fn test_end_to_end_lamp_scenario() {
        let (products, services, demands) = lamp_corpus();

        // Hall filter narrows to the RK listing.
        let rk = ProductFilters {
            hall: Some("RK".to_string()),
            ..Default::default()
        };
        let hits = search_products(&products, "lamp", &rk, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pa");

        // Price ceiling narrows to the cheap listing.
        let cheap = ProductFilters {
            max_price: Some(500.0),
            ..Default::default()
        };
        let hits = search_products(&products, "lamp", &cheap, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pa");

        // No chairs anywhere.
        let hits = search_products(&products, "chair", &ProductFilters::default(), 10);
        assert!(hits.is_empty());

        // The zero-result global search proposes corpus terms instead.
        let outcome = global_search(&products, &services, &demands, "chair", 20);
        assert_eq!(outcome.total, 0);
        let suggestions = outcome.suggestions.expect("suggestions for empty result");
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().any(|s| s == "lamp"));
    }

    // ============================================================
    // SUGGESTION GENERATOR TESTS
    // ============================================================

    #[test]
    fn test_suggest_deterministic_and_bounded() {
        let titles = vec![
            "Study Lamp",
            "Desk Lamp",
            "Lava Lamp",
            "Laptop Stand",
            "Calculus Book",
            "Camping Tent",
        ];

        let first = suggest(&titles, "lam", 3);
        let second = suggest(&titles, "lam", 3);
        assert_eq!(first, second);
        assert!(first.len() <= 3);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_suggest_deduplicates_repeated_tokens() {
        let titles = vec!["Desk Lamp", "Desk Lamp", "Desk Lamp"];
        let suggestions = suggest(&titles, "lamps", 10);
        let lamp_count = suggestions.iter().filter(|s| *s == "lamp").count();
        assert_eq!(lamp_count, 1);
    }

    #[test]
    fn test_suggest_prefers_prefix_overlap() {
        let titles = vec!["Laptop Stand", "Desk Lamp", "Camping Tent"];
        let suggestions = suggest(&titles, "lapt", 5);
        assert_eq!(suggestions.first().map(String::as_str), Some("laptop"));
    }

    #[test]
    fn test_suggest_empty_query_or_zero_cap() {
        let titles = vec!["Desk Lamp"];
        assert!(suggest(&titles, "", 5).is_empty());
        assert!(suggest(&titles, "   ", 5).is_empty());
        assert!(suggest(&titles, "lamp", 0).is_empty());
    }

    #[test]
    fn test_suggest_skips_exact_query_token() {
        let titles = vec!["Desk Lamp"];
        let suggestions = suggest(&titles, "lamp", 5);
        assert!(!suggestions.iter().any(|s| s == "lamp"));
    }

    #[test]
    fn test_suggest_empty_corpus() {
        assert!(suggest(&[], "lamp", 5).is_empty());
    }

    // ============================================================
    // ENVELOPE SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_search_response_field_names() {
        let mut applied = HashMap::new();
        applied.insert("hall".to_string(), "RK".to_string());

        let response = SearchResponse {
            success: true,
            data: vec![product(
                "p1",
                "Study Lamp",
                Category::Electronics,
                Hall::Rk,
                300.0,
            )],
            query: "lamp".to_string(),
            applied_filters: applied,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["query"], "lamp");
        assert_eq!(json["appliedFilters"]["hall"], "RK");
        assert_eq!(json["data"][0]["addressHall"], "RK");
        assert_eq!(json["data"][0]["category"], "ELECTRONICS");
    }

    #[test]
    fn test_global_response_omits_absent_suggestions() {
        let response = GlobalSearchResponse {
            products: vec![],
            services: vec![],
            demands: vec![],
            total: 0,
            query: "xy".to_string(),
            suggestions: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("suggestions").is_none());
        assert_eq!(json["total"], 0);
    }

    #[test]
    fn test_global_response_includes_suggestions_when_present() {
        let response = GlobalSearchResponse {
            products: vec![],
            services: vec![],
            demands: vec![],
            total: 0,
            query: "chair".to_string(),
            suggestions: Some(vec!["lamp".to_string()]),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["suggestions"][0], "lamp");
    }

    // ============================================================
    // HANDLER TESTS - store failure
    // ============================================================

    /// A store whose every accessor reports the backend as unreachable.
    struct OfflineCatalog;

    fn offline<T>() -> StoreResult<T> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    impl Catalog for OfflineCatalog {
        fn products(&self) -> StoreResult<Vec<Product>> {
            offline()
        }
        fn product(&self, _id: &str) -> StoreResult<Option<Product>> {
            offline()
        }
        fn put_product(&self, _product: Product) -> StoreResult<()> {
            offline()
        }
        fn remove_product(&self, _id: &str) -> StoreResult<Option<Product>> {
            offline()
        }
        fn services(&self) -> StoreResult<Vec<Service>> {
            offline()
        }
        fn service(&self, _id: &str) -> StoreResult<Option<Service>> {
            offline()
        }
        fn put_service(&self, _service: Service) -> StoreResult<()> {
            offline()
        }
        fn remove_service(&self, _id: &str) -> StoreResult<Option<Service>> {
            offline()
        }
        fn demands(&self) -> StoreResult<Vec<Demand>> {
            offline()
        }
        fn demand(&self, _id: &str) -> StoreResult<Option<Demand>> {
            offline()
        }
        fn put_demand(&self, _demand: Demand) -> StoreResult<()> {
            offline()
        }
        fn remove_demand(&self, _id: &str) -> StoreResult<Option<Demand>> {
            offline()
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_product_search_reports_store_failure() {
        let catalog: SharedCatalog = Arc::new(OfflineCatalog);

        let response = handle_product_search(
            Extension(catalog),
            Query(ProductSearchParams {
                q: Some("lamp".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Search failed");
    }

    #[tokio::test]
    async fn test_global_search_reports_store_failure() {
        let catalog: SharedCatalog = Arc::new(OfflineCatalog);

        let response = handle_global_search(
            Extension(catalog),
            Query(GlobalSearchParams {
                q: Some("lamp".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Search failed");
    }
}
