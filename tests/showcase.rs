use product_patterns::{
    classify, dedup, find_duplicates, sort_by_price, Classification, Locale, PatternDispatcher,
    Price, Product, ShowcaseConfig, Value, DEFAULT_CATEGORY,
};

fn price(text: &str) -> Price {
    text.parse().unwrap()
}

#[test]
fn test_mouse_equality_scenario() {
    let mouse = Product::with_details("Mouse".to_string(), price("25.50"), 50, None);
    let restock = Product::with_details("Mouse".to_string(), price("25.50"), 100, None);

    assert_eq!(mouse, restock);
    assert_eq!(mouse.category, DEFAULT_CATEGORY);
}

#[test]
fn test_laptop_detailed_scenario() {
    let laptop = Product::with_details(
        "Laptop".to_string(),
        price("999.99"),
        10,
        Some("Electronics".to_string()),
    );

    let rendered = laptop.render(Some("D"), None);
    assert!(rendered.contains("Stock: 10"));
    assert!(rendered.contains("Category: Electronics"));
}

#[test]
fn test_sorted_listing() {
    let mut products = vec![
        Product::with_details("Mouse".to_string(), price("25.50"), 50, None),
        Product::with_details("Keyboard".to_string(), price("75.00"), 30, None),
        Product::with_details("Laptop".to_string(), price("999.99"), 10, None),
    ];
    products.reverse();
    sort_by_price(&mut products);

    let listing: Vec<String> = products
        .iter()
        .map(|p| p.render(None, Some(&Locale::en_us())))
        .collect();
    assert_eq!(
        listing,
        vec!["Mouse: $25.50", "Keyboard: $75.00", "Laptop: $999.99"]
    );
}

#[test]
fn test_combined_product() {
    let mouse = Product::with_details("Mouse".to_string(), price("25.50"), 50, None);
    let keyboard = Product::with_details(
        "Keyboard".to_string(),
        price("75.00"),
        30,
        Some("Input".to_string()),
    );

    let bundle = mouse + keyboard;
    assert_eq!(
        bundle.render(Some("D"), Some(&Locale::en_us())),
        "Mouse & Keyboard - Price: $100.50, Stock: 80, Category: Uncategorized"
    );
}

#[test]
fn test_dedup_and_duplicates_agree() {
    let products = vec![
        Product::with_details("Mouse".to_string(), price("25.50"), 50, None),
        Product::with_details("Mouse".to_string(), price("25.5"), 100, Some("Other".to_string())),
        Product::new("Cable".to_string(), price("4.99")),
    ];

    assert_eq!(dedup(&products).len(), 2);
    assert_eq!(find_duplicates(&products).len(), 1);
}

#[test]
fn test_dispatcher_samples() {
    let laptop = Product::with_details("Laptop".to_string(), price("999.99"), 10, None);

    assert_eq!(classify(&Value::from(42)), "Positive integer: 42");
    assert_eq!(classify(&Value::from(-5)), "Negative integer: -5");
    assert_eq!(classify(&Value::from("Hello")), "String with length 5: Hello");
    assert!(classify(&Value::from(laptop.clone())).starts_with("Product: "));
    assert_eq!(classify(&Value::from(vec![1, 2, 3])), "Integer list with 3 items");

    let classification = PatternDispatcher::new().classify(&Value::from(laptop));
    assert!(matches!(classification, Classification::Product(_)));
}

#[test]
fn test_config_drives_rendering() {
    let config = ShowcaseConfig::from_json(r#"{ "locale": "ja-JP" }"#).unwrap();
    let locale = config.resolve_locale().unwrap();

    let laptop = Product::new("Laptop".to_string(), price("999.99"));
    assert_eq!(laptop.render(Some("G"), Some(&locale)), "Laptop: ¥1,000");
}
