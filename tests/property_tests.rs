//! Property-Based Tests for shoptui
//!
//! Uses proptest for testing invariants and edge cases:
//! - Carousel settle corrections always land in the valid range
//! - Enum string round-trips (parse -> to_string -> parse)
//! - Cart arithmetic invariants under arbitrary action sequences

use std::time::{Duration, Instant};

use proptest::prelude::*;

use shoptui::carousel::LoopingCarousel;
use shoptui::store::{CartAction, CartState};
use shoptui::types::{Category, Money, OrderStatus};

// =============================================================================
// Carousel Property Tests
// =============================================================================

/// Strategy for a slide deck size worth looping over
fn deck_size_strategy() -> impl Strategy<Value = usize> {
    2usize..10
}

proptest! {
    /// For all N >= 2 and any settle sequence, the corrected index is
    /// always in [1, N] and the offset is page-aligned on it
    #[test]
    fn carousel_settles_in_valid_range(
        n in deck_size_strategy(),
        offsets in prop::collection::vec(-10_000.0f32..10_000.0, 1..40),
    ) {
        let width = 400.0;
        let now = Instant::now();
        let slides: Vec<String> = (0..n).map(|i| format!("slide-{i}")).collect();
        let mut carousel = LoopingCarousel::new(slides, width, Duration::from_secs(4), now);

        for offset in offsets {
            carousel.settle_at(offset, now);
            let index = carousel.current_index();
            prop_assert!(index >= 1 && index <= n, "index {index} out of [1, {n}]");
            prop_assert_eq!(carousel.offset(), width * index as f32);
        }
    }

    /// Ticking never produces an index outside [1, N] either, no matter
    /// how far simulated time jumps between ticks
    #[test]
    fn carousel_ticks_stay_in_valid_range(
        n in deck_size_strategy(),
        steps in prop::collection::vec(0u64..9_000, 1..60),
    ) {
        let now = Instant::now();
        let slides: Vec<String> = (0..n).map(|i| format!("slide-{i}")).collect();
        let mut carousel =
            LoopingCarousel::new(slides, 400.0, Duration::from_secs(4), now);

        let mut t = now;
        for step in steps {
            t += Duration::from_millis(step);
            carousel.tick(t);
            if !carousel.is_transitioning() {
                let index = carousel.current_index();
                prop_assert!(index >= 1 && index <= n);
            }
        }
    }

    /// The extended strip always carries exactly two sentinel clones
    #[test]
    fn carousel_extended_length(n in 1usize..12) {
        let slides: Vec<String> = (0..n).map(|i| format!("slide-{i}")).collect();
        let carousel =
            LoopingCarousel::new(slides, 400.0, Duration::from_secs(4), Instant::now());
        prop_assert_eq!(carousel.extended_items().len(), n + 2);
    }
}

// =============================================================================
// Enum Property Tests
// =============================================================================

/// Strategy for generating valid Category variants
fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Clothing),
        Just(Category::Shoes),
        Just(Category::Electronics),
        Just(Category::Accessories),
        Just(Category::Home),
        Just(Category::Beauty),
    ]
}

/// Strategy for generating valid OrderStatus variants
fn order_status_strategy() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![
        Just(OrderStatus::Pending),
        Just(OrderStatus::Confirmed),
        Just(OrderStatus::Shipped),
        Just(OrderStatus::Delivered),
        Just(OrderStatus::Cancelled),
    ]
}

proptest! {
    /// Category: to_string -> parse round-trip is identity
    #[test]
    fn category_roundtrip(category in category_strategy()) {
        let s = category.to_string();
        let parsed: Category = s.parse().expect("Should parse");
        prop_assert_eq!(category, parsed);
    }

    /// Category: Display output is non-empty lowercase
    #[test]
    fn category_display_is_valid(category in category_strategy()) {
        let s = category.to_string();
        prop_assert!(!s.is_empty());
        let lowercase = s.to_lowercase();
        prop_assert_eq!(s, lowercase);
    }

    /// OrderStatus: to_string -> parse round-trip is identity
    #[test]
    fn order_status_roundtrip(status in order_status_strategy()) {
        let s = status.to_string();
        let parsed: OrderStatus = s.parse().expect("Should parse");
        prop_assert_eq!(status, parsed);
    }

    /// OrderStatus: cancellable statuses are exactly pending and confirmed
    #[test]
    fn order_status_cancellable_consistent(status in order_status_strategy()) {
        let expected = matches!(status, OrderStatus::Pending | OrderStatus::Confirmed);
        prop_assert_eq!(status.is_cancellable(), expected);
    }
}

// =============================================================================
// Cart Property Tests
// =============================================================================

#[derive(Debug, Clone)]
enum CartOp {
    Add(u32, i64),
    Remove(u32),
    SetQuantity(u32, u32),
    Increment(u32),
    Decrement(u32),
}

fn cart_op_strategy() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        (0u32..8, 1i64..10_000).prop_map(|(id, cents)| CartOp::Add(id, cents)),
        (0u32..8).prop_map(CartOp::Remove),
        (0u32..8, 0u32..20).prop_map(|(id, q)| CartOp::SetQuantity(id, q)),
        (0u32..8).prop_map(CartOp::Increment),
        (0u32..8).prop_map(CartOp::Decrement),
    ]
}

proptest! {
    /// Under any action sequence: no zero-quantity lines survive, no
    /// duplicate lines exist, and the subtotal equals the sum of line
    /// totals
    #[test]
    fn cart_invariants_hold(ops in prop::collection::vec(cart_op_strategy(), 0..60)) {
        let mut cart = CartState::default();
        let mut price_of = std::collections::HashMap::new();

        for op in ops {
            match op {
                CartOp::Add(id, cents) => {
                    // A product's unit price is stable across adds
                    let price = *price_of.entry(id).or_insert(cents);
                    cart.reduce(CartAction::Add {
                        product_id: id,
                        name: format!("product-{id}"),
                        unit_price: Money::from_cents(price),
                    });
                }
                CartOp::Remove(id) => cart.reduce(CartAction::Remove { product_id: id }),
                CartOp::SetQuantity(id, q) => cart.reduce(CartAction::SetQuantity {
                    product_id: id,
                    quantity: q,
                }),
                CartOp::Increment(id) => cart.reduce(CartAction::Increment { product_id: id }),
                CartOp::Decrement(id) => cart.reduce(CartAction::Decrement { product_id: id }),
            }

            prop_assert!(cart.items.iter().all(|i| i.quantity >= 1));

            let mut ids: Vec<u32> = cart.items.iter().map(|i| i.product_id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), cart.items.len(), "duplicate cart lines");

            let expected: Money = cart.items.iter().map(|i| i.line_total()).sum();
            prop_assert_eq!(cart.subtotal(), expected);
        }
    }
}
