//! Group resolution
//!
//! Recent people only tracks individuals. Anything the group directory knows
//! to be a group is turned away.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use uuid::Uuid;

/// Answers "is this identifier a group?"
pub trait GroupDirectory {
    fn is_group(&self, id: &Uuid) -> bool;
}

/// Directory that knows no groups
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGroups;

impl GroupDirectory for NoGroups {
    fn is_group(&self, _id: &Uuid) -> bool {
        false
    }
}

impl GroupDirectory for HashSet<Uuid> {
    fn is_group(&self, id: &Uuid) -> bool {
        self.contains(id)
    }
}

/// Shared, growable set of known group ids.
///
/// Clones see the same set, so the session can keep registering groups as
/// their data arrives after the registry was built.
#[derive(Debug, Clone, Default)]
pub struct KnownGroups {
    ids: Rc<RefCell<HashSet<Uuid>>>,
}

impl KnownGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not already known
    pub fn insert(&self, id: Uuid) -> bool {
        self.ids.borrow_mut().insert(id)
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.ids.borrow_mut().remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }
}

impl GroupDirectory for KnownGroups {
    fn is_group(&self, id: &Uuid) -> bool {
        self.ids.borrow().contains(id)
    }
}
