use std::rc::Rc;

use log::debug;
use web_sys::window;

/// Page level scroll effects. The hire form only talks to this trait so the
/// controller can run without a browser.
pub trait PageScroll {
    fn scroll_to_top(&self);
    fn lock(&self);
    fn unlock(&self);
}

/// Scrolls the window and toggles `overflow` on `document.body`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScroll;

impl BrowserScroll {
    fn set_body_overflow(value: &str) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if body.style().set_property("overflow", value).is_err() {
            log::warn!("Could not set body overflow to {}", value);
        }
    }
}

impl PageScroll for BrowserScroll {
    fn scroll_to_top(&self) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn lock(&self) {
        Self::set_body_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_body_overflow("auto");
    }
}

/// Background scrolling stays locked for as long as this guard lives.
pub struct ScrollLock {
    page: Rc<dyn PageScroll>,
}

impl ScrollLock {
    pub fn acquire(page: Rc<dyn PageScroll>) -> Self {
        debug!("Locking page scroll");
        page.scroll_to_top();
        page.lock();
        Self { page }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        debug!("Releasing page scroll");
        self.page.unlock();
    }
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScrollLock")
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::PageScroll;

    /// Records every call instead of touching a page.
    #[derive(Default)]
    pub struct RecordingScroll {
        pub calls: RefCell<Vec<&'static str>>,
    }

    impl RecordingScroll {
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }

        pub fn is_locked(&self) -> bool {
            let calls = self.calls.borrow();
            calls.iter().rev().find(|c| **c == "lock" || **c == "unlock") == Some(&"lock")
        }
    }

    impl PageScroll for RecordingScroll {
        fn scroll_to_top(&self) {
            self.calls.borrow_mut().push("scroll_to_top");
        }

        fn lock(&self) {
            self.calls.borrow_mut().push("lock");
        }

        fn unlock(&self) {
            self.calls.borrow_mut().push("unlock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingScroll;
    use super::*;

    #[test]
    fn test_lock_scrolls_up_then_locks_and_unlocks_on_drop() {
        let page = Rc::new(RecordingScroll::default());
        let lock = ScrollLock::acquire(page.clone());
        assert_eq!(page.calls(), vec!["scroll_to_top", "lock"]);
        assert!(page.is_locked());

        drop(lock);
        assert_eq!(page.calls(), vec!["scroll_to_top", "lock", "unlock"]);
        assert!(!page.is_locked());
    }
}
