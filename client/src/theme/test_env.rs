//! In-memory theme environment for native tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::env::{ColorScheme, PreferenceStore, ThemeSurface, WatchGuard};
use super::{ResolvedTheme, ThemeError};

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    unavailable: bool,
    pub writes: Cell<usize>,
}

impl MemoryStore {
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable("disabled".into()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable("disabled".into()));
        }
        self.writes.set(self.writes.get() + 1);
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn(bool)>)>>>;

pub struct FakeScheme {
    dark: Cell<bool>,
    supported: bool,
    listeners: Listeners,
    next_id: Cell<u64>,
}

impl FakeScheme {
    pub fn new(dark: bool) -> Self {
        Self { dark: Cell::new(dark), supported: true, listeners: Rc::default(), next_id: Cell::new(0) }
    }

    pub fn unsupported() -> Self {
        Self { supported: false, ..Self::new(true) }
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
        let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, f)| Rc::clone(f)).collect();
        for listener in listeners {
            listener(dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ColorScheme for FakeScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        if !self.supported {
            return Err(ThemeError::SignalUnavailable("no matchMedia".into()));
        }
        Ok(self.dark.get())
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<WatchGuard, ThemeError> {
        if !self.supported {
            return Err(ThemeError::SignalUnavailable("no matchMedia".into()));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_change)));
        let listeners = Rc::clone(&self.listeners);
        Ok(WatchGuard::new(move || listeners.borrow_mut().retain(|(other, _)| *other != id)))
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    markers: RefCell<BTreeSet<&'static str>>,
    pub applied: RefCell<Vec<ResolvedTheme>>,
}

impl RecordingSurface {
    pub fn markers(&self) -> Vec<&'static str> {
        self.markers.borrow().iter().copied().collect()
    }

    pub fn last(&self) -> Option<ResolvedTheme> {
        self.applied.borrow().last().copied()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, resolved: ResolvedTheme) {
        let mut markers = self.markers.borrow_mut();
        markers.remove(resolved.opposite().as_str());
        markers.insert(resolved.as_str());
        self.applied.borrow_mut().push(resolved);
    }
}

