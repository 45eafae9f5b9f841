mod common;

use common::*;
use slidepager_core::prelude::*;
use std::rc::Rc;

/// Deterministic offsets in roughly [-20, 220).
fn offsets(seed: u32, count: usize) -> Vec<f32> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f32 / (1u32 << 24) as f32 * 240.0 - 20.0
        })
        .collect()
}

fn assert_invariants(pager: &Pager, step: usize) {
    assert!(pager.cached_len() <= 2, "step {step}: cache overflow");
    let current = pager.current_page().expect("a current page");
    for position in Position::ALL {
        if let Some(cached) = pager.cached_page(position) {
            assert!(
                !Rc::ptr_eq(cached, current),
                "step {step}: current page also cached at {position:?}"
            );
        }
    }
    assert_eq!(
        pager.content_extent(),
        3.0 * pager.viewport_extent(),
        "step {step}: content extent"
    );
    assert_eq!(
        pager.surface().attached_pages().len(),
        1 + pager.cached_len(),
        "step {step}: attached pages out of sync with slots"
    );
}

fn sweep(config: PagerConfig, seed: u32) {
    let (mut pager, _log) = book_pager(config, 6, 3);
    for (step, to) in offsets(seed, 300).into_iter().enumerate() {
        drag(&mut pager, to);
        assert_invariants(&pager, step);
        if step % 17 == 0 {
            pager.on_scroll_settled();
            assert_invariants(&pager, step);
            assert_eq!(pager.current_position(), Some(Position::Center));
        }
    }
}

#[test]
fn invariants_hold_at_edge_prefetch() {
    sweep(PagerConfig::default(), 7);
    sweep(PagerConfig::default().with_bounces(false), 11);
}

#[test]
fn invariants_hold_with_eager_prefetch() {
    let eager = PagerConfig::default().with_prefetch(PrefetchStrategy::Eager);
    sweep(eager.clone(), 3);
    sweep(eager.with_bounces(false), 5);
}

#[test]
fn settling_at_center_is_idempotent() {
    let config = PagerConfig::default().with_prefetch(PrefetchStrategy::Eager);
    let (mut pager, _log) = book_pager(config, 3, 1);
    drag(&mut pager, 150.0);
    assert_eq!(pager.cached_len(), 1);

    pager.settle(Position::Center, 0.0);
    let events = pager.surface().events().len();
    pager.settle(Position::Center, 0.0);

    assert_eq!(pager.cached_len(), 0);
    assert_eq!(pager.surface().events().len(), events);
    assert_eq!(current_id(&pager), Some(1));
}

#[test]
fn settling_without_a_cached_slot_is_tolerated() {
    let (mut pager, log) = book_pager(PagerConfig::default(), 3, 1);

    pager.settle(Position::Right, 4.0);
    pager.settle(Position::Left, -4.0);

    assert_eq!(current_id(&pager), Some(1));
    assert!(pager.surface().events().is_empty());
    assert!(log.calls().is_empty());
}

#[test]
fn explicit_neighbor_request_is_cached_once() {
    let (mut pager, log) = book_pager(PagerConfig::default(), 3, 1);

    pager.request_neighbor(Position::Left);
    pager.request_neighbor(Position::Left);
    pager.request_neighbor(Position::Center);

    assert_eq!(cached_id(&pager, Position::Left), Some(0));
    assert_eq!(log.provide_count(), 1);
    assert_eq!(pager.surface().origin_of(0), Some(Point::new(0.0, 0.0)));
}
