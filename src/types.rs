//! Shared domain types for shoptui
//!
//! This module replaces stringly-typed product and order data with proper
//! Rust types that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Monetary amount in integer cents.
///
/// Stored as cents to keep cart arithmetic exact; floating point never
/// touches a price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from integer cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in integer cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a line quantity, saturating on overflow
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Format with an explicit currency symbol (e.g. from the client config)
    pub fn display_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with("$"))
    }
}

/// Opaque reference to an image resource.
///
/// The client never interprets the contents; it only forwards the handle to
/// whatever renders it (here, the slide art lookup in the onboarding view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[strum(serialize = "clothing")]
    Clothing,
    #[strum(serialize = "shoes")]
    Shoes,
    #[strum(serialize = "electronics")]
    Electronics,
    #[strum(serialize = "accessories")]
    Accessories,
    #[strum(serialize = "home")]
    Home,
    #[strum(serialize = "beauty")]
    Beauty,
}

impl Category {
    /// Human-facing label for menus and headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Shoes => "Shoes",
            Self::Electronics => "Electronics",
            Self::Accessories => "Accessories",
            Self::Home => "Home",
            Self::Beauty => "Beauty",
        }
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    /// Average review rating on a 0.0..=5.0 scale
    pub rating: f32,
    pub stock: u32,
    pub image: ImageRef,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A promotional slide shown by the onboarding carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoSlide {
    pub title: String,
    pub tagline: String,
    pub image: ImageRef,
}

/// Lifecycle status of a placed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "confirmed")]
    Confirmed,
    #[strum(serialize = "shipped")]
    Shipped,
    #[strum(serialize = "delivered")]
    Delivered,
    #[strum(serialize = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// Whether the customer may still cancel the order
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// Order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short display form used in list views
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shipping address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// An order cannot ship without every field filled in
    pub fn is_complete(&self) -> bool {
        !self.line1.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.postal_code.trim().is_empty()
            && !self.country.trim().is_empty()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.line1, self.postal_code, self.city, self.country
        )
    }
}

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1299).to_string(), "$12.99");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-250).display_with("€"), "-€2.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let unit = Money::from_cents(450);
        assert_eq!(unit.times(3), Money::from_cents(1350));

        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }

    #[test]
    fn test_order_status_cancellable() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Confirmed.is_cancellable());
        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_category_roundtrip() {
        let s = Category::Electronics.to_string();
        assert_eq!(s, "electronics");
        let parsed: Category = s.parse().expect("should parse");
        assert_eq!(parsed, Category::Electronics);
    }

    #[test]
    fn test_address_completeness() {
        let mut addr = Address {
            line1: "1 Market St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "94103".to_string(),
            country: "US".to_string(),
        };
        assert!(addr.is_complete());
        addr.postal_code = "  ".to_string();
        assert!(!addr.is_complete());
    }
}
