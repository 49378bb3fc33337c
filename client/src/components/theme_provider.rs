//! Theme context provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Injects an explicitly owned `ThemeContext` into the view tree. Consumers
//! read the selection and the resolved presentation through it and change
//! the theme only through `ThemeContext::set_theme`.
//!
//! DESIGN
//! ======
//! On the server the context carries the configured default and nothing
//! else. In the browser the provider builds a `ThemeManager` after mount,
//! hydrates it from storage, and mirrors context writes into it through a
//! `ManagerLink`. The manager lives in local reactive storage owned by the
//! provider, so its OS subscription is released when the provider is torn
//! down.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::theme::{ResolvedTheme, Theme, ThemeConfig, ThemeEnv, ThemeManager, ThemeSurface, resolve};

/// Shared theme handle provided via context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    resolved: RwSignal<ResolvedTheme>,
}

impl ThemeContext {
    pub fn new(default_theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(default_theme),
            resolved: RwSignal::new(resolve(default_theme, || None)),
        }
    }

    /// Current selection (tracked).
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Presentation currently applied (tracked).
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved.get()
    }

    pub fn theme_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// The single writer for the theme selection.
    pub fn set_theme(&self, theme: Theme) {
        if self.theme.get_untracked() != theme {
            self.theme.set(theme);
        }
    }

    /// Advance light -> dark -> system -> light.
    pub fn cycle(&self) {
        self.set_theme(self.theme_untracked().next());
    }
}

/// Access the theme context.
///
/// # Panics
///
/// Panics when called outside a `ThemeProvider`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Provides `ThemeContext` to `children`.
#[component]
pub fn ThemeProvider(#[prop(optional)] config: Option<ThemeConfig>, children: Children) -> impl IntoView {
    let config = config.unwrap_or_default();
    let ctx = ThemeContext::new(config.default_theme);
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        let env = crate::theme::browser::environment(config.attribute.clone());
        attach_manager(ctx, config, env);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    children()
}

/// Mirrors every applied presentation into the context signal.
struct SignalSurface {
    inner: Rc<dyn ThemeSurface>,
    resolved: RwSignal<ResolvedTheme>,
}

impl ThemeSurface for SignalSurface {
    fn apply(&self, resolved: ResolvedTheme) {
        self.inner.apply(resolved);
        self.resolved.set(resolved);
    }
}

/// Connects a `ThemeContext` to the `ThemeManager` that persists it.
///
/// The manager sits in local reactive storage, so it is dropped with the
/// owning scope.
#[derive(Clone, Copy)]
pub struct ManagerLink {
    ctx: ThemeContext,
    manager: StoredValue<Option<ThemeManager>, LocalStorage>,
}

impl ManagerLink {
    pub fn new(ctx: ThemeContext) -> Self {
        Self { ctx, manager: StoredValue::new_local(None) }
    }

    pub fn is_hydrated(&self) -> bool {
        self.manager.with_value(Option::is_some)
    }

    /// Build and hydrate the manager once; the context adopts its value.
    pub fn hydrate(&self, config: &ThemeConfig, mut env: ThemeEnv) {
        if self.is_hydrated() {
            return;
        }
        env.surface = Rc::new(SignalSurface { inner: env.surface, resolved: self.ctx.resolved });

        let mut manager = ThemeManager::new(config.clone(), env);
        manager.hydrate();
        log::debug!("theme hydrated: {} ({})", manager.theme(), manager.resolved());
        self.ctx.theme.set(manager.theme());
        self.manager.set_value(Some(manager));
    }

    /// Hand a context selection to the manager. No-op before hydration.
    pub fn forward(&self, theme: Theme) {
        self.manager.update_value(|manager| {
            if let Some(m) = manager.as_mut() {
                if m.theme() != theme {
                    m.set_theme(theme);
                }
            }
        });
    }
}

/// Hydrate after mount, then forward every context write to the manager.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn attach_manager(ctx: ThemeContext, config: ThemeConfig, env: ThemeEnv) -> ManagerLink {
    let link = ManagerLink::new(ctx);

    let mut env = Some(env);
    Effect::new(move |_| {
        if let Some(env) = env.take() {
            link.hydrate(&config, env);
        }
    });

    Effect::new(move |_| {
        let next = ctx.theme.get();
        link.forward(next);
    });

    link
}
