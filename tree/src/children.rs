//! Ownership collections.
//!
//! A [`ChildList`] or [`ChildSlot`] is the only place a node's parent link is
//! written. Inserting sets it to the owner, removing clears it, and an item
//! that still carries a parent is rejected, so every node has at most one
//! owner.

use crate::{CopyNode, IntentNode, TreeError, TreeResult};
use intent_core::NodeId;
use std::fmt;
use tracing::{trace, warn};

/// An insertion that was refused, with the item handed back unchanged.
#[derive(Debug)]
pub struct Rejected<T> {
    pub error: TreeError,
    pub item: T,
}

impl<T> Rejected<T> {
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<T> From<Rejected<T>> for TreeError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}

fn check_insertable(owner: NodeId, item: &dyn IntentNode) -> TreeResult<()> {
    let child = item.base().id();
    if child == owner {
        return Err(TreeError::SelfOwnership(child));
    }
    match item.base().parent() {
        Some(current) => {
            warn!(%child, %current, new_owner = %owner, "rejected insertion of owned node");
            Err(TreeError::AlreadyOwned {
                child,
                owner: current,
            })
        }
        None => Ok(()),
    }
}

/// Ordered children of one owner.
#[derive(Debug)]
pub struct ChildList<T> {
    owner: NodeId,
    items: Vec<T>,
}

impl<T: IntentNode> ChildList<T> {
    pub fn new(owner: NodeId) -> Self {
        Self {
            owner,
            items: Vec::new(),
        }
    }

    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Append `item` and make this collection's owner its parent.
    pub fn add(&mut self, item: T) -> TreeResult<()> {
        self.try_add(item).map_err(TreeError::from)
    }

    /// Like [`ChildList::add`], but a refused item is returned to the caller.
    pub fn try_add(&mut self, mut item: T) -> Result<(), Rejected<T>> {
        if let Err(error) = check_insertable(self.owner, &item) {
            return Err(Rejected { error, item });
        }
        item.base_mut().set_parent(Some(self.owner));
        self.items.push(item);
        Ok(())
    }

    /// Append every item. All items are checked first; on error none is
    /// inserted.
    pub fn add_range(&mut self, items: impl IntoIterator<Item = T>) -> TreeResult<()> {
        let items: Vec<T> = items.into_iter().collect();
        for item in &items {
            check_insertable(self.owner, item)?;
        }
        for mut item in items {
            item.base_mut().set_parent(Some(self.owner));
            self.items.push(item);
        }
        Ok(())
    }

    /// Remove the child with this identity and clear its parent.
    ///
    /// Returns `None` when no such child exists.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let index = self.position(id)?;
        let mut item = self.items.remove(index);
        item.base_mut().set_parent(None);
        Some(item)
    }

    /// Detach a child from this collection and attach it to `dest` as one
    /// step. Nothing changes when the move is rejected.
    pub fn move_to(&mut self, id: NodeId, dest: &mut ChildList<T>) -> TreeResult<()> {
        let index = self.position(id).ok_or(TreeError::ChildNotFound(id))?;
        if id == dest.owner {
            return Err(TreeError::SelfOwnership(id));
        }
        let mut item = self.items.remove(index);
        item.base_mut().set_parent(Some(dest.owner));
        dest.items.push(item);
        trace!(child = %id, from = %self.owner, to = %dest.owner, "moved node");
        Ok(())
    }

    /// Deep-copy every child, parented to `owner`.
    pub fn copy_for(&self, owner: NodeId) -> TreeResult<ChildList<T>>
    where
        T: CopyNode,
    {
        let mut copy = ChildList::new(owner);
        for item in &self.items {
            let mut item = item.copy()?;
            item.base_mut().set_parent(Some(owner));
            copy.items.push(item);
        }
        Ok(copy)
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.items.iter().position(|item| item.base().id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn find(&self, id: NodeId) -> Option<&T> {
        self.items.iter().find(|item| item.base().id() == id)
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.base().id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The children as generic nodes.
    pub fn as_nodes(&self) -> Vec<&dyn IntentNode> {
        self.items.iter().map(|item| item as &dyn IntentNode).collect()
    }
}

impl<'a, T: IntentNode> IntoIterator for &'a ChildList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// At most one child of one owner.
#[derive(Debug)]
pub struct ChildSlot<T> {
    owner: NodeId,
    item: Option<T>,
}

impl<T: IntentNode> ChildSlot<T> {
    pub fn new(owner: NodeId) -> Self {
        Self { owner, item: None }
    }

    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Place `item` in the slot, returning the previous occupant detached.
    pub fn set(&mut self, item: T) -> TreeResult<Option<T>> {
        self.try_set(item).map_err(TreeError::from)
    }

    /// Like [`ChildSlot::set`], but a refused item is returned to the caller
    /// and the current occupant stays.
    pub fn try_set(&mut self, mut item: T) -> Result<Option<T>, Rejected<T>> {
        if let Err(error) = check_insertable(self.owner, &item) {
            return Err(Rejected { error, item });
        }
        item.base_mut().set_parent(Some(self.owner));
        let previous = self.take();
        self.item = Some(item);
        Ok(previous)
    }

    /// Empty the slot, returning the occupant detached.
    pub fn take(&mut self) -> Option<T> {
        let mut item = self.item.take()?;
        item.base_mut().set_parent(None);
        Some(item)
    }

    pub fn get(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.item.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn as_node(&self) -> Option<&dyn IntentNode> {
        self.item.as_ref().map(|item| item as &dyn IntentNode)
    }

    pub fn copy_for(&self, owner: NodeId) -> TreeResult<ChildSlot<T>>
    where
        T: CopyNode,
    {
        let item = match &self.item {
            Some(item) => {
                let mut item = item.copy()?;
                item.base_mut().set_parent(Some(owner));
                Some(item)
            }
            None => None,
        };
        Ok(ChildSlot { owner, item })
    }
}
