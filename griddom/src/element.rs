use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A retained DOM node: string id, `data-*` attributes, children with parent
/// links, and a host-set layout measurement.
///
/// Cheaply clonable handle (`Rc`-shared, single-threaded). Layout is owned by
/// the host: `offset_width` is whatever the host last measured, `None` when
/// the element has never been laid out.
#[derive(Clone)]
pub struct Element {
    inner: Rc<Inner>,
}

struct Inner {
    id: RefCell<String>,
    data: RefCell<HashMap<String, String>>,
    offset_width: Cell<Option<f32>>,
    parent: RefCell<Weak<Inner>>,
    children: RefCell<Vec<Element>>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl Element {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                id: RefCell::new(generate_id("el")),
                data: RefCell::new(HashMap::new()),
                offset_width: Cell::new(None),
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        *self.inner.id.borrow_mut() = id.into();
        self
    }

    pub fn get_id(&self) -> String {
        self.inner.id.borrow().clone()
    }

    // Data attributes
    pub fn data(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.data.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<String> {
        self.inner.data.borrow().get(key).cloned()
    }

    // Layout measurement (host-set)
    pub fn offset_width(&self) -> Option<f32> {
        self.inner.offset_width.get()
    }

    pub fn set_offset_width(&self, width: Option<f32>) {
        self.inner.offset_width.set(width);
    }

    /// Builder form of `set_offset_width`.
    pub fn measured(self, width: f32) -> Self {
        self.inner.offset_width.set(Some(width));
        self
    }

    // Tree
    pub fn child(self, child: Element) -> Self {
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
        self.inner.children.borrow_mut().push(child);
        self
    }

    pub fn children(self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
            self.inner.children.borrow_mut().push(child);
        }
        self
    }

    pub fn parent(&self) -> Option<Element> {
        self.inner
            .parent
            .borrow()
            .upgrade()
            .map(|inner| Element { inner })
    }

    pub fn child_count(&self) -> usize {
        self.inner.children.borrow().len()
    }

    /// All descendants in depth-first order (self excluded).
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<Element>) {
        for child in self.inner.children.borrow().iter() {
            out.push(child.clone());
            child.collect_descendants(out);
        }
    }

    /// First element (self included) whose data attribute `key` equals `value`.
    pub fn find_by_data(&self, key: &str, value: &str) -> Option<Element> {
        if self.get_data(key).as_deref() == Some(value) {
            return Some(self.clone());
        }
        self.descendants()
            .into_iter()
            .find(|el| el.get_data(key).as_deref() == Some(value))
    }

    /// Identity comparison (same underlying node, not structural equality).
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id.borrow())
            .field("data", &self.inner.data.borrow())
            .field("offset_width", &self.inner.offset_width.get())
            .field("children", &self.inner.children.borrow().len())
            .finish()
    }
}
