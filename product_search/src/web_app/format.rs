// web_app/format.rs - Display formatting for products
//
// Pure string helpers used by ProductCard and the selected chips.
// Missing fields format as empty strings.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::web_app::model::Product;

/// Card titles are cut to this many characters
pub const CARD_TITLE_MAX_CHARS: usize = 20;

/// Chip titles longer than this are abbreviated
pub const CHIP_TITLE_MAX_CHARS: usize = 10;
const CHIP_PREFIX_CHARS: usize = 5;

/// First `max` characters of `text` (by char, not byte)
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Uppercase the first character of each space-separated word, leaving
/// the rest of the word as is. Repeated spaces are preserved.
pub fn title_case_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// "$12.50" style price, or empty when unknown
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(price) => {
            let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            format!("${}", rounded)
        }
        None => String::new(),
    }
}

/// Label for a selected-item chip
pub fn chip_label(title: &str) -> String {
    if title.chars().count() > CHIP_TITLE_MAX_CHARS {
        format!("{}..", truncate_chars(title, CHIP_PREFIX_CHARS))
    } else {
        title.to_string()
    }
}

/// Everything ProductCard prints, already formatted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub category: String,
    pub brand: String,
    pub price: String,
    pub image: String,
    /// Full title, for the image alt text
    pub alt: String,
}

impl CardText {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: truncate_chars(&product.title, CARD_TITLE_MAX_CHARS),
            category: product
                .category
                .as_deref()
                .map(title_case_words)
                .unwrap_or_default(),
            brand: product.brand.as_deref().map(title_case_words).unwrap_or_default(),
            price: format_price(product.price),
            image: product.image.clone().unwrap_or_default(),
            alt: product.title.clone(),
        }
    }
}
