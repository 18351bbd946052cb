use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use product_patterns::{
    classify, classify_primitive, dedup, is_record_with_positive_price, sort_by_price, Describe,
    Locale, PatternDispatcher, Price, Product, ShowcaseConfig, Value,
};

#[derive(Parser)]
#[command(name = "product-patterns")]
#[command(about = "Product value records and value classification, end to end.")]
struct CommandLine {
    /// Locale tag for currency output (e.g. en-US, de-DE)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// JSON config with locale settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every product and dispatcher feature (default)
    Demo {
        /// Format specifier for the product listing
        #[arg(long, default_value = "G")]
        format: String,
    },
    /// Classify values given on the command line
    Classify {
        /// Integers, text, "null" or integer lists like "[1,2,3]"
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = CommandLine::parse();
    let locale = resolve_locale(&cli)?;
    Locale::set_current(locale);

    match cli.command {
        Some(Commands::Classify { values }) => run_classify(&values),
        Some(Commands::Demo { format }) => run_demo(&format),
        None => run_demo("G"),
    }
}

fn resolve_locale(cli: &CommandLine) -> Result<Locale> {
    let config = match &cli.config {
        Some(path) => ShowcaseConfig::from_file(path)?,
        None => ShowcaseConfig::default(),
    };

    match &cli.locale {
        Some(tag) => config.find_locale(tag),
        None => config.resolve_locale(),
    }
}

fn price(text: &str) -> Result<Price> {
    Ok(text.parse()?)
}

fn run_demo(format: &str) -> Result<()> {
    println!("=== Product Patterns ===\n");

    // Describe trait
    println!("1. Description:");
    let laptop = Product::with_details(
        "Laptop".to_string(),
        price("999.99")?,
        10,
        Some("Electronics".to_string()),
    );
    println!("  {}", laptop.description());
    laptop.process();

    // Ordering
    println!("\n2. Sorted by price:");
    let mouse = Product::with_details("Mouse".to_string(), price("25.50")?, 50, None);
    let keyboard = Product::with_details("Keyboard".to_string(), price("75.00")?, 30, None);
    let mut products = vec![mouse.clone(), keyboard.clone(), laptop.clone()];
    sort_by_price(&mut products);
    for product in &products {
        println!("  {}", product.render(Some(format), None));
    }

    // Equality
    println!("\n3. Equality (name + price only):");
    let mouse_restock = Product::with_details("Mouse".to_string(), price("25.50")?, 100, None);
    println!("  Mouse x50 equals Mouse x100: {}", mouse == mouse_restock);

    // Rendering
    println!("\n4. Formats:");
    println!("  General:  {}", laptop.render(Some("G"), None));
    println!("  Detailed: {}", laptop.render(Some("D"), None));
    println!("  Stock:    {}", laptop.render(Some("S"), None));

    println!("\n5. Default category: {}", Product::default_category());

    // Deconstruct
    let (name, unit_price, stock) = laptop.clone().into_parts();
    println!("\n6. Parts: name={}, price={}, stock={}", name, unit_price, stock);

    // Combine
    println!("\n7. Combined:");
    let bundle = &mouse + &keyboard;
    println!("  {}", bundle.render(Some("D"), None));

    // Dedup
    println!("\n8. Deduplicated:");
    let unique = dedup(&[mouse.clone(), keyboard, mouse_restock]);
    for product in &unique {
        println!("  {}", product.render(Some("S"), None));
    }

    // Classification
    println!("\n9. Classification:");
    let samples = vec![
        Value::from(42),
        Value::from(-5),
        Value::from(0),
        Value::from("Hello"),
        Value::from(""),
        Value::Null,
        Value::from(laptop.clone()),
        Value::from(vec![1, 2, 3]),
        Value::other(&3.5_f64),
    ];
    for classification in PatternDispatcher::new().classify_all(&samples) {
        println!("  {}", classification);
    }

    println!("\n10. Narrow checks:");
    let has_positive_price = is_record_with_positive_price(&Value::from(laptop));
    println!("  Laptop has positive price: {}", has_positive_price);
    println!("  {}", classify_primitive(&Value::from("Hello")));

    Ok(())
}

fn run_classify(values: &[String]) -> Result<()> {
    for raw in values {
        let value = parse_value(raw);
        println!("{} → {}", raw, classify(&value));
    }
    Ok(())
}

/// Command-line text to a dispatcher value
fn parse_value(raw: &str) -> Value {
    if raw == "null" {
        return Value::Null;
    }
    if let Ok(number) = raw.parse::<i32>() {
        return Value::Integer(number);
    }
    if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let items: Result<Vec<i32>, _> = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<i32>)
            .collect();
        if let Ok(items) = items {
            return Value::IntegerList(items);
        }
    }
    if let Ok(number) = raw.parse::<f64>() {
        return Value::other(&number);
    }
    Value::Text(raw.to_string())
}
