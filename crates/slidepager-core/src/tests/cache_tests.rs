use super::*;
use crate::test_support::{Board, BoardEvent};
use slidepager_geometry::{Direction, ViewportMapper};
use std::rc::Rc;

fn attached(board: &mut Board, id: u32, position: Position) -> Slot<u32> {
    let mapper = ViewportMapper::new(100.0, Direction::Horizontal);
    let mut slot = Slot::new(Rc::new(id));
    slot.attach(board, &mapper, position);
    slot
}

#[test]
fn store_and_get_by_side() {
    let mut board = Board::default();
    let mut cache = PageCache::new();
    let left = attached(&mut board, 1, Position::Left);
    let right = attached(&mut board, 2, Position::Right);

    cache.store(Position::Left, left, &mut board).unwrap();
    cache.store(Position::Right, right, &mut board).unwrap();

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(Position::Left).map(|s| **s.page()), Some(1));
    assert_eq!(cache.get(Position::Right).map(|s| **s.page()), Some(2));
    assert!(cache.get(Position::Center).is_none());
    assert_eq!(
        cache.positions().collect::<Vec<_>>(),
        vec![Position::Left, Position::Right]
    );
    cache.clear(None, &mut board);
}

#[test]
fn store_replaces_and_releases_previous() {
    let mut board = Board::default();
    let mut cache = PageCache::new();
    let first = attached(&mut board, 1, Position::Right);
    let second = attached(&mut board, 2, Position::Right);

    cache.store(Position::Right, first, &mut board).unwrap();
    cache.store(Position::Right, second, &mut board).unwrap();

    assert_eq!(cache.len(), 1);
    assert_eq!(board.attached, vec![2]);
    assert!(board.events.contains(&BoardEvent::Detach(1)));
    cache.clear(None, &mut board);
}

#[test]
fn store_at_center_is_rejected() {
    let mut board = Board::default();
    let mut cache = PageCache::new();
    let slot = attached(&mut board, 9, Position::Center);

    let result = cache.store(Position::Center, slot, &mut board);

    assert_eq!(
        result.map(|_| ()),
        Err(PagerError::NotANeighbor(Position::Center))
    );
    assert!(cache.is_empty());
    assert!(board.attached.is_empty());
}

#[test]
fn clear_single_position() {
    let mut board = Board::default();
    let mut cache = PageCache::new();
    let left = attached(&mut board, 1, Position::Left);
    let right = attached(&mut board, 2, Position::Right);
    cache.store(Position::Left, left, &mut board).unwrap();
    cache.store(Position::Right, right, &mut board).unwrap();

    cache.clear(Some(Position::Left), &mut board);

    assert!(!cache.contains(Position::Left));
    assert!(cache.contains(Position::Right));
    assert_eq!(board.attached, vec![2]);

    // clearing an empty position is a no-op
    cache.clear(Some(Position::Left), &mut board);
    cache.clear(Some(Position::Center), &mut board);
    assert_eq!(cache.len(), 1);
    cache.clear(None, &mut board);
    assert!(cache.is_empty());
    assert!(board.attached.is_empty());
}

#[test]
fn promote_transfers_without_release() {
    let mut board = Board::default();
    let mut cache = PageCache::new();
    let right = attached(&mut board, 4, Position::Right);
    cache.store(Position::Right, right, &mut board).unwrap();
    let events_before = board.events.len();

    let promoted = cache.promote(Position::Right).expect("slot at right");

    assert!(cache.is_empty());
    assert!(promoted.is_active());
    assert_eq!(board.events.len(), events_before);
    assert!(cache.promote(Position::Right).is_none());
    promoted.release(&mut board);
}
