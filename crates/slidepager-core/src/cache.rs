//! Storage for the two neighbor slots.

use crate::error::PagerError;
use crate::slot::Slot;
use crate::surface::PageContainer;
use slidepager_geometry::Position;

/// Holds at most one slot on each side of the current page.
///
/// This is the only place neighbor slots are created into and released
/// from. The current slot is never stored here.
pub struct PageCache<P: ?Sized> {
    left: Option<Slot<P>>,
    right: Option<Slot<P>>,
}

impl<P: ?Sized> Default for PageCache<P> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
        }
    }
}

impl<P: ?Sized> PageCache<P> {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, position: Position) -> Option<&Option<Slot<P>>> {
        match position {
            Position::Left => Some(&self.left),
            Position::Right => Some(&self.right),
            Position::Center => None,
        }
    }

    fn entry_mut(&mut self, position: Position) -> Option<&mut Option<Slot<P>>> {
        match position {
            Position::Left => Some(&mut self.left),
            Position::Right => Some(&mut self.right),
            Position::Center => None,
        }
    }

    /// Stores `slot` at `position`, releasing whatever was there before.
    ///
    /// Center is not a neighbor position: the slot is released and an error
    /// returned.
    pub fn store<C>(
        &mut self,
        position: Position,
        slot: Slot<P>,
        container: &mut C,
    ) -> Result<&Slot<P>, PagerError>
    where
        C: PageContainer<P> + ?Sized,
    {
        let Some(entry) = self.entry_mut(position) else {
            slot.release(container);
            return Err(PagerError::NotANeighbor(position));
        };
        if let Some(previous) = entry.take() {
            log::debug!("replacing cached neighbor at {position:?}");
            previous.release(container);
        }
        Ok(entry.insert(slot))
    }

    pub fn get(&self, position: Position) -> Option<&Slot<P>> {
        self.entry(position).and_then(Option::as_ref)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Releases the slot at `position`, or every cached slot when `None`.
    pub fn clear<C>(&mut self, position: Option<Position>, container: &mut C)
    where
        C: PageContainer<P> + ?Sized,
    {
        match position {
            Some(position) => {
                if let Some(slot) = self.entry_mut(position).and_then(Option::take) {
                    slot.release(container);
                }
            }
            None => {
                for slot in [self.left.take(), self.right.take()].into_iter().flatten() {
                    slot.release(container);
                }
            }
        }
    }

    /// Removes the slot at `position` without releasing it.
    pub fn promote(&mut self, position: Position) -> Option<Slot<P>> {
        self.entry_mut(position).and_then(Option::take)
    }

    pub fn len(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        [Position::Left, Position::Right]
            .into_iter()
            .filter(|position| self.contains(*position))
    }
}

impl<P: ?Sized> std::fmt::Debug for PageCache<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
