//! Navigation intents handed to the host page.
//!
//! The page never touches `window` directly for scrolling or redirecting; it goes
//! through a [`NavigationPort`] taken from context, so tests can swap in a fake.

use std::rc::Rc;

use log::{debug, error};
use web_sys::{window, Document, Element, ScrollBehavior, ScrollIntoViewOptions};

pub trait NavigationPort {
    /// Smooth-scrolls the element with this id into view. Missing elements are ignored.
    fn scroll_into_view(&self, anchor_id: &str);

    /// Leaves the page for `url`, as given.
    fn redirect(&self, url: &str);
}

/// Something an anchor id resolves to and that can be scrolled to.
pub trait ScrollTarget {
    fn smooth_scroll_into_view(&self);
}

/// Resolves anchor ids, like `Document::get_element_by_id`.
pub trait AnchorLookup {
    type Target: ScrollTarget;

    fn find_anchor(&self, anchor_id: &str) -> Option<Self::Target>;
}

impl ScrollTarget for Element {
    fn smooth_scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl AnchorLookup for Document {
    type Target = Element;

    fn find_anchor(&self, anchor_id: &str) -> Option<Element> {
        self.get_element_by_id(anchor_id)
    }
}

/// Scrolls to `anchor_id` if the document has it. Returns whether anything scrolled.
pub fn scroll_to_anchor<L: AnchorLookup>(document: Option<&L>, anchor_id: &str) -> bool {
    match document.and_then(|doc| doc.find_anchor(anchor_id)) {
        Some(target) => {
            target.smooth_scroll_into_view();
            true
        }
        None => {
            debug!("No element with id '{}', nothing to scroll to", anchor_id);
            false
        }
    }
}

pub struct BrowserNavigation;

impl NavigationPort for BrowserNavigation {
    fn scroll_into_view(&self, anchor_id: &str) {
        let document = window().and_then(|w| w.document());
        scroll_to_anchor(document.as_ref(), anchor_id);
    }

    fn redirect(&self, url: &str) {
        if let Some(window) = window() {
            if let Err(e) = window.location().set_href(url) {
                error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
}

/// Shared handle to a navigation port, cheap to clone into callbacks and context.
#[derive(Clone)]
pub struct NavigationHandle(Rc<dyn NavigationPort>);

impl NavigationHandle {
    pub fn new(port: Rc<dyn NavigationPort>) -> Self {
        Self(port)
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserNavigation))
    }

    pub fn port(&self) -> &dyn NavigationPort {
        self.0.as_ref()
    }
}

impl PartialEq for NavigationHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::NavigationPort;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Intent {
        Scroll(String),
        Redirect(String),
    }

    /// Fake port over a fixed set of anchor ids. Records what a browser would have done.
    #[derive(Default)]
    pub struct RecordingNavigation {
        anchors: HashSet<String>,
        intents: RefCell<Vec<Intent>>,
    }

    impl RecordingNavigation {
        pub fn with_anchors(anchors: &[&str]) -> Self {
            Self {
                anchors: anchors.iter().map(|a| a.to_string()).collect(),
                intents: RefCell::new(Vec::new()),
            }
        }

        pub fn intents(&self) -> Vec<Intent> {
            self.intents.borrow().clone()
        }
    }

    impl NavigationPort for RecordingNavigation {
        fn scroll_into_view(&self, anchor_id: &str) {
            if self.anchors.contains(anchor_id) {
                self.intents.borrow_mut().push(Intent::Scroll(anchor_id.to_string()));
            }
        }

        fn redirect(&self, url: &str) {
            self.intents.borrow_mut().push(Intent::Redirect(url.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::testing::{Intent, RecordingNavigation};
    use super::*;

    /// In-memory page: a list of element ids and a log of the ones scrolled to.
    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    struct FakeElement {
        id: String,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollTarget for FakeElement {
        fn smooth_scroll_into_view(&self) {
            self.scrolled.borrow_mut().push(self.id.clone());
        }
    }

    impl AnchorLookup for FakePage {
        type Target = FakeElement;

        fn find_anchor(&self, anchor_id: &str) -> Option<FakeElement> {
            self.ids.iter().any(|id| *id == anchor_id).then(|| FakeElement {
                id: anchor_id.to_string(),
                scrolled: self.scrolled.clone(),
            })
        }
    }

    fn page(ids: &[&'static str]) -> FakePage {
        FakePage {
            ids: ids.to_vec(),
            scrolled: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[test]
    fn test_scroll_to_present_anchor() {
        let page = page(&["hero", "offer"]);
        assert!(scroll_to_anchor(Some(&page), "offer"));
        assert_eq!(*page.scrolled.borrow(), vec!["offer".to_string()]);
    }

    #[test]
    fn test_scroll_to_missing_anchor_does_nothing() {
        let page = page(&["hero"]);
        assert!(!scroll_to_anchor(Some(&page), "offer"));
        assert!(!scroll_to_anchor(Some(&page), ""));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_scroll_without_document_does_nothing() {
        assert!(!scroll_to_anchor(None::<&FakePage>, "offer"));
    }

    #[test]
    fn test_handles_compare_by_port_identity() {
        let port: Rc<dyn NavigationPort> = Rc::new(RecordingNavigation::default());
        let a = NavigationHandle::new(port.clone());
        let b = NavigationHandle::new(port);
        let c = NavigationHandle::new(Rc::new(RecordingNavigation::default()));

        assert!(a == b);
        assert!(a != c);
        assert!(a.clone() == a);
    }

    #[test]
    fn test_handle_forwards_to_port() {
        let fake = Rc::new(RecordingNavigation::with_anchors(&["offer"]));
        let handle = NavigationHandle::new(fake.clone());

        handle.port().scroll_into_view("offer");
        handle.port().redirect("https://example.com/pay");

        assert_eq!(
            fake.intents(),
            vec![
                Intent::Scroll("offer".to_string()),
                Intent::Redirect("https://example.com/pay".to_string()),
            ]
        );
    }
}
