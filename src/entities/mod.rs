// Entity Models
// Value records: compared by what they hold, not by where they live

pub mod product;

pub use product::{Describe, FormatSpec, Product, DEFAULT_CATEGORY};
