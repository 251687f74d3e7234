//! Integration tests for the looping carousel controller
//!
//! These tests drive the controller under simulated time and verify the
//! wrap illusion end to end: mount position, auto-advance, seam
//! corrections, overscroll clamping, and teardown.

use std::time::{Duration, Instant};

use shoptui::carousel::{DEFAULT_ADVANCE_INTERVAL, LoopingCarousel};

const WIDTH: f32 = 400.0;
const INTERVAL: Duration = Duration::from_millis(4000);

fn slides(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("slide-{i}")).collect()
}

/// Drive the animation at a fixed simulated instant until the controller
/// comes to rest
fn run_until_settled(carousel: &mut LoopingCarousel<String>, now: Instant) {
    let mut ticks = 0;
    while carousel.is_transitioning() {
        carousel.tick(now);
        ticks += 1;
        assert!(ticks < 500, "animation failed to settle");
    }
}

// =============================================================================
// Mount
// =============================================================================

#[test]
fn test_mount_is_settled_on_first_real_item() {
    let now = Instant::now();
    let carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, now);

    // Settled(1) with the physical offset already on the first real item,
    // before anything ticks or renders
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.offset(), WIDTH);
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_item().map(String::as_str), Some("slide-0"));
}

#[test]
fn test_extended_sequence_length_invariant() {
    let now = Instant::now();
    for n in 1..=8 {
        let carousel = LoopingCarousel::new(slides(n), WIDTH, INTERVAL, now);
        assert_eq!(carousel.extended_items().len(), n + 2, "N = {n}");
    }
}

#[test]
fn test_default_interval_constant() {
    assert_eq!(DEFAULT_ADVANCE_INTERVAL, Duration::from_millis(4000));
}

// =============================================================================
// Auto-advance protocol
// =============================================================================

#[test]
fn test_auto_advance_waits_for_deadline() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, t0);

    // Before the deadline nothing moves
    assert!(!carousel.tick(t0 + Duration::from_millis(3999)));
    assert_eq!(carousel.current_index(), 1);

    // At the deadline an animated scroll starts; the index is untouched
    // until the scroll settles
    assert!(carousel.tick(t0 + INTERVAL));
    assert!(carousel.is_transitioning());
    assert_eq!(carousel.current_index(), 1);

    run_until_settled(&mut carousel, t0 + INTERVAL);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.offset(), WIDTH * 2.0);
}

#[test]
fn test_reference_scenario_four_slides() {
    // N=4, width=400: mount -> (400, 1); four auto-advances -> 2, 3, 4,
    // then the wrap back to (400, 1), matching the very first state
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, t0);
    assert_eq!((carousel.offset(), carousel.current_index()), (400.0, 1));

    let mut now = t0;
    let mut observed = Vec::new();
    for _ in 0..4 {
        now += INTERVAL;
        assert!(carousel.tick(now), "deadline should fire");
        run_until_settled(&mut carousel, now);
        observed.push(carousel.current_index());
    }

    assert_eq!(observed, vec![2, 3, 4, 1]);
    assert_eq!(carousel.offset(), WIDTH);
}

#[test]
fn test_settle_rearms_the_timer() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(3), WIDTH, INTERVAL, t0);

    let settle_time = t0 + Duration::from_millis(1500);
    carousel.settle_at(WIDTH * 2.0, settle_time);

    // The cadence is anchored to the settle, not the mount
    assert!(!carousel.tick(t0 + INTERVAL));
    assert!(carousel.tick(settle_time + INTERVAL));
    assert!(carousel.is_transitioning());
}

// =============================================================================
// Wrap corrections
// =============================================================================

#[test]
fn test_wrap_to_end_is_instantaneous() {
    let now = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, now);

    // Landing on the prepended clone repositions in a single step
    let wrapped = carousel.settle_at(0.0, now);
    assert!(wrapped);
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.offset(), WIDTH * 4.0);
    assert!(!carousel.is_transitioning());
}

#[test]
fn test_wrap_to_start_is_instantaneous() {
    let now = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, now);

    let wrapped = carousel.settle_at(WIDTH * 5.0, now);
    assert!(wrapped);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.offset(), WIDTH);
}

#[test]
fn test_clone_content_matches_wrap_target() {
    let now = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, now);
    let extended = carousel.extended_items().to_vec();

    // The prepended clone shows the same content as the real last item
    assert_eq!(extended[0], extended[4]);
    // The appended clone shows the same content as the real first item
    assert_eq!(extended[5], extended[1]);

    // So each jump lands on identical content
    carousel.settle_at(0.0, now);
    assert_eq!(carousel.current_item(), Some(&extended[0]));
}

#[test]
fn test_overscroll_clamps_into_real_range() {
    let now = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(3), WIDTH, INTERVAL, now);

    carousel.settle_at(WIDTH * 40.0, now);
    assert_eq!(carousel.current_index(), 3);

    carousel.settle_at(-WIDTH * 10.0, now);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_idempotent_settle_at_rest_position() {
    let now = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, now);
    carousel.settle_at(WIDTH * 3.0, now);
    let before = (carousel.current_index(), carousel.offset());

    for _ in 0..5 {
        let wrapped = carousel.settle_at(carousel.offset(), now);
        assert!(!wrapped);
        assert_eq!((carousel.current_index(), carousel.offset()), before);
    }
}

// =============================================================================
// Manual paging
// =============================================================================

#[test]
fn test_manual_and_auto_share_the_settle_path() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, t0);

    // Manual forward paging from the last slide crosses the seam exactly
    // like the timer does
    carousel.settle_at(WIDTH * 4.0, t0);
    carousel.advance();
    run_until_settled(&mut carousel, t0);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.offset(), WIDTH);

    // Manual backward paging from the first slide wraps to the end
    carousel.retreat();
    run_until_settled(&mut carousel, t0);
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.offset(), WIDTH * 4.0);
}

#[test]
fn test_paging_ignored_mid_transition() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, t0);

    carousel.advance();
    assert!(carousel.is_transitioning());
    // A second request while in flight changes nothing
    carousel.advance();
    carousel.retreat();
    run_until_settled(&mut carousel, t0);
    assert_eq!(carousel.current_index(), 2);
}

// =============================================================================
// Degenerate inputs
// =============================================================================

#[test]
fn test_empty_deck_never_arms_timer() {
    let t0 = Instant::now();
    let mut carousel: LoopingCarousel<String> =
        LoopingCarousel::new(Vec::new(), WIDTH, INTERVAL, t0);
    assert!(!carousel.is_running());
    assert!(carousel.extended_items().is_empty());
    assert!(!carousel.tick(t0 + Duration::from_secs(3600)));
}

#[test]
fn test_single_slide_is_static() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(1), WIDTH, INTERVAL, t0);
    assert!(!carousel.is_running());

    carousel.advance();
    carousel.retreat();
    assert!(!carousel.is_transitioning());
    assert!(!carousel.tick(t0 + Duration::from_secs(3600)));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.offset(), WIDTH);
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn test_stop_leaves_no_pending_work() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, Duration::from_millis(100), t0);
    carousel.stop();

    let before = (carousel.current_index(), carousel.offset());
    // Advance simulated time far past many would-be deadlines; nothing
    // may mutate
    for i in 1..50 {
        assert!(!carousel.tick(t0 + Duration::from_millis(100 * i)));
        assert_eq!((carousel.current_index(), carousel.offset()), before);
    }
    assert!(!carousel.is_running());
}

#[test]
fn test_stop_mid_transition_freezes_in_place() {
    let t0 = Instant::now();
    let mut carousel = LoopingCarousel::new(slides(4), WIDTH, INTERVAL, t0);
    carousel.advance();
    carousel.tick(t0); // move partway
    carousel.stop();

    let frozen_offset = carousel.offset();
    assert!(!carousel.tick(t0 + Duration::from_secs(60)));
    assert_eq!(carousel.offset(), frozen_offset);
}
