//! Browser implementations of the theme environment seams.
//!
//! `localStorage` for persistence, `matchMedia` for the OS signal, and the
//! `<html>` element as the presentation surface. Requires a browser
//! environment; every missing API maps to the matching `ThemeError`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::env::{ColorScheme, PreferenceStore, ThemeSurface, WatchGuard};
use super::manager::ThemeEnv;
use super::{Marker, PREFERS_DARK_QUERY, ResolvedTheme, ThemeAttribute, ThemeError};

/// Build the browser environment for the given marker style.
pub fn environment(attribute: ThemeAttribute) -> ThemeEnv {
    ThemeEnv {
        store: Rc::new(LocalStorage),
        scheme: Rc::new(MediaQueryScheme),
        surface: Rc::new(DocumentSurface { attribute }),
    }
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage not accessible".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
    }
}

pub struct MediaQueryScheme;

impl MediaQueryScheme {
    fn query() -> Result<web_sys::MediaQueryList, ThemeError> {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .ok_or_else(|| ThemeError::SignalUnavailable("matchMedia not supported".into()))
    }
}

impl ColorScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Ok(Self::query()?.matches())
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<WatchGuard, ThemeError> {
        let mq = Self::query()?;
        let mq_inner = mq.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            on_change(mq_inner.matches());
        });

        mq.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::SignalUnavailable(format!("{e:?}")))?;

        Ok(WatchGuard::new(move || {
            let _ = mq.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }))
    }
}

/// Marks the document root element.
pub struct DocumentSurface {
    attribute: ThemeAttribute,
}

impl ThemeSurface for DocumentSurface {
    fn apply(&self, resolved: ResolvedTheme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        match self.attribute.marker(resolved) {
            Marker::Class { add, remove } => {
                let classes = root.class_list();
                let _ = classes.remove_1(remove);
                let _ = classes.add_1(add);
            }
            Marker::Attribute { name, value } => {
                let _ = root.remove_attribute(name);
                let _ = root.set_attribute(name, value);
            }
        }
    }
}
