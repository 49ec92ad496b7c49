//! Child storage behind one access contract.
//!
//! Fixed arity uses a slot array with holes, unbounded arity a dense list.

use crate::domain::arity::Arity;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// Contiguous list, never contains vacant entries.
    Dense(Vec<NodeId>),
    /// Slot array whose length never changes; `occupied` counts `Some` slots.
    Slots {
        slots: Vec<Option<NodeId>>,
        occupied: usize,
    },
}

impl Children {
    pub fn for_arity(arity: Arity) -> Self {
        match arity.capacity() {
            None => Children::Dense(Vec::new()),
            Some(capacity) => Children::Slots {
                slots: vec![None; capacity],
                occupied: 0,
            },
        }
    }

    /// Number of occupied positions.
    pub fn count(&self) -> usize {
        match self {
            Children::Dense(list) => list.len(),
            Children::Slots { occupied, .. } => *occupied,
        }
    }

    /// Slot count for fixed storage, `None` for dense storage.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Children::Dense(_) => None,
            Children::Slots { slots, .. } => Some(slots.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Child at `index`; `None` when out of range or the slot is vacant.
    pub fn get_at(&self, index: usize) -> Option<NodeId> {
        match self {
            Children::Dense(list) => list.get(index).copied(),
            Children::Slots { slots, .. } => slots.get(index).copied().flatten(),
        }
    }

    /// Upper bound (exclusive) an insertion index must respect.
    pub fn insert_bound(&self) -> usize {
        match self {
            Children::Dense(list) => list.len() + 1,
            Children::Slots { slots, .. } => slots.len(),
        }
    }

    /// Places `child` at `index`.
    ///
    /// Dense storage shifts later children right and accepts `index <= count`.
    /// Slot storage only fills a vacant slot below capacity.
    /// On error nothing changes.
    pub fn insert_at(&mut self, index: usize, child: NodeId) -> TreeResult<()> {
        let bound = self.insert_bound();
        if index >= bound {
            return Err(TreeError::IndexOutOfBounds { index, bound });
        }
        match self {
            Children::Dense(list) => list.insert(index, child),
            Children::Slots { slots, occupied } => {
                let slot = &mut slots[index];
                if slot.is_some() {
                    return Err(TreeError::SlotOccupied(index));
                }
                *slot = Some(child);
                *occupied += 1;
            }
        }
        Ok(())
    }

    /// Detaches the child at `index`, returning its id.
    ///
    /// Out-of-range indices and vacant slots are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<NodeId> {
        match self {
            Children::Dense(list) => (index < list.len()).then(|| list.remove(index)),
            Children::Slots { slots, occupied } => {
                let removed = slots.get_mut(index)?.take();
                if removed.is_some() {
                    *occupied -= 1;
                }
                removed
            }
        }
    }

    /// Occupied children with their slot index, in slot order.
    pub fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            children: self,
            pos: 0,
        }
    }

    /// Every position including vacant slots; dense storage yields only `Some`.
    pub fn slots(&self) -> Box<dyn Iterator<Item = Option<NodeId>> + '_> {
        match self {
            Children::Dense(list) => Box::new(list.iter().copied().map(Some)),
            Children::Slots { slots, .. } => Box::new(slots.iter().copied()),
        }
    }

    /// Index of the last occupied position.
    pub fn last_index(&self) -> Option<usize> {
        match self {
            Children::Dense(list) => list.len().checked_sub(1),
            Children::Slots { slots, .. } => slots.iter().rposition(Option::is_some),
        }
    }
}

/// Iterator over occupied children that carries its own position.
pub struct ChildIter<'a> {
    children: &'a Children,
    pos: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        match self.children {
            Children::Dense(list) => {
                let id = *list.get(self.pos)?;
                let index = self.pos;
                self.pos += 1;
                Some((index, id))
            }
            Children::Slots { slots, .. } => {
                while self.pos < slots.len() {
                    let index = self.pos;
                    self.pos += 1;
                    if let Some(id) = slots[index] {
                        return Some((index, id));
                    }
                }
                None
            }
        }
    }
}
