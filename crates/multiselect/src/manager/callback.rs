//! Selection observers.

/// Observes selection changes made by a
/// [`MultiSelectManager`](super::MultiSelectManager).
///
/// Observers are notified in reverse registration order: the most recently
/// added observer hears about a change first.
pub trait SelectionCallback: Send {
    /// Called before an interactive toggle changes `position` to `selected`.
    ///
    /// Return `false` to cancel the change. Observers registered earlier are
    /// then not consulted, and no [`on_item_state_changed`](Self::on_item_state_changed)
    /// follows.
    fn on_before_item_state_change(&mut self, _position: usize, _selected: bool) -> bool {
        true
    }

    /// Called after `position` became selected (`true`) or deselected (`false`).
    fn on_item_state_changed(&mut self, position: usize, selected: bool);
}

/// Ordered list of registered observers.
#[derive(Default)]
pub(crate) struct CallbackList {
    callbacks: Vec<Box<dyn SelectionCallback>>,
}

impl CallbackList {
    pub(crate) fn push(&mut self, callback: Box<dyn SelectionCallback>) {
        self.callbacks.push(callback);
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Asks every observer, newest first, whether the change may happen.
    ///
    /// Stops at the first veto.
    pub(crate) fn notify_before(&mut self, position: usize, selected: bool) -> bool {
        self.callbacks
            .iter_mut()
            .rev()
            .all(|callback| callback.on_before_item_state_change(position, selected))
    }

    /// Tells every observer, newest first, that the change happened.
    pub(crate) fn notify_changed(&mut self, position: usize, selected: bool) {
        for callback in self.callbacks.iter_mut().rev() {
            callback.on_item_state_changed(position, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Voter {
        id: usize,
        allow: bool,
        log: Arc<Mutex<Vec<(usize, &'static str)>>>,
    }

    impl SelectionCallback for Voter {
        fn on_before_item_state_change(&mut self, _position: usize, _selected: bool) -> bool {
            self.log.lock().push((self.id, "before"));
            self.allow
        }

        fn on_item_state_changed(&mut self, _position: usize, _selected: bool) {
            self.log.lock().push((self.id, "after"));
        }
    }

    fn list_of(votes: &[bool], log: &Arc<Mutex<Vec<(usize, &'static str)>>>) -> CallbackList {
        let mut list = CallbackList::default();
        for (id, &allow) in votes.iter().enumerate() {
            list.push(Box::new(Voter {
                id,
                allow,
                log: log.clone(),
            }));
        }
        list
    }

    #[test]
    fn test_before_runs_newest_first() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = list_of(&[true, true, true], &log);

        assert!(list.notify_before(1, true));
        assert_eq!(*log.lock(), vec![(2, "before"), (1, "before"), (0, "before")]);
    }

    #[test]
    fn test_veto_stops_chain() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = list_of(&[true, false, true], &log);

        assert!(!list.notify_before(1, true));
        assert_eq!(*log.lock(), vec![(2, "before"), (1, "before")]);
    }

    #[test]
    fn test_changed_reaches_everyone() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = list_of(&[false, false], &log);

        list.notify_changed(4, false);
        assert_eq!(*log.lock(), vec![(1, "after"), (0, "after")]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_list_allows() {
        let mut list = CallbackList::default();
        assert!(list.notify_before(0, true));
    }
}
