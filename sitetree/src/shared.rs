use std::cell::RefCell;
use std::rc::Rc;

/// A value owned jointly by the page's event listeners, such as the [`CrawlView`] that both a
/// pending crawl and the form listener write to.
///
/// Access goes through closures, so a borrow never outlives the call and can't be held across
/// an `.await`:
///
/// ```
/// # use sitetree::shared::Shared;
/// let shown = Shared::new(Vec::new());
/// let pending = shown.clone();
/// pending.exec_mut(|shown| shown.push("https://example.com/"));
/// assert_eq!(shown.exec(|shown| shown.len()), 1);
/// ```
///
/// [`CrawlView`]: crate::view::CrawlView
pub struct Shared<T> {
    rc: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    pub fn new(val: T) -> Self {
        Shared {
            rc: Rc::new(RefCell::new(val)),
        }
    }

    /// # Panics
    /// Panics if called from inside `exec_mut` on the same value.
    pub fn exec<Ret>(&self, f: impl FnOnce(&T) -> Ret) -> Ret {
        f(&self.rc.borrow())
    }

    /// # Panics
    /// Panics if called from inside `exec` or `exec_mut` on the same value.
    pub fn exec_mut<Ret>(&self, f: impl FnOnce(&mut T) -> Ret) -> Ret {
        f(&mut self.rc.borrow_mut())
    }

    /// Whether both handles refer to the same value.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rc, &other.rc)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared {
            rc: self.rc.clone(),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
