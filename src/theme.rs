// Appearance state and the ratatui palettes derived from it

use std::path::PathBuf;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

type Listener = Box<dyn FnMut(ThemeMode) + Send>;

#[derive(Default)]
struct Registry {
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Single source of truth for the active appearance mode. Built once at
/// startup and handed to `App`; views read the resolved palette, the top
/// bar's toggle action flips it.
pub struct ThemeStore {
    mode: Mutex<ThemeMode>,
    registry: Arc<Mutex<Registry>>,
    persist_path: Option<PathBuf>,
}

impl ThemeStore {
    /// In-memory store with no persistence.
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Mutex::new(initial),
            registry: Arc::new(Mutex::new(Registry::default())),
            persist_path: None,
        }
    }

    /// Restore the persisted mode from the config file at `path` and keep
    /// persisting toggles there. A missing or unreadable file falls back to
    /// the default mode.
    pub fn load(path: PathBuf) -> Self {
        let config = Config::load_from(&path);
        Self {
            mode: Mutex::new(config.theme),
            registry: Arc::new(Mutex::new(Registry::default())),
            persist_path: Some(path),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.lock()
    }

    /// Flip the mode, persist it, and notify every live subscriber with the
    /// new value before returning. Persistence failure is non-fatal: the
    /// in-memory mode still changes and propagates.
    pub fn toggle(&self) -> ThemeMode {
        let next = {
            let mut mode = self.mode.lock();
            *mode = mode.flipped();
            *mode
        };

        if let Some(path) = &self.persist_path {
            let snapshot = Config { theme: next };
            if let Err(err) = snapshot.save_to(path) {
                log::warn!("could not persist theme to {}: {}", path.display(), err);
            }
        }

        // The mode lock is released here, so listeners may call mode().
        let mut registry = self.registry.lock();
        for (_, listener) in registry.listeners.iter_mut() {
            listener(next);
        }
        next
    }

    /// Register a callback invoked on every toggle. Dropping the returned
    /// `Subscription` removes the listener.
    pub fn subscribe(&self, listener: impl FnMut(ThemeMode) + Send + 'static) -> Subscription {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }
}

pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Resolved color palette for a mode. Views take every color from here.
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_active: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub highlight: Color,
    pub chart_dim: Color,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xf8, 0xfa, 0xfc), // slate-50
            surface: Color::Rgb(0xff, 0xff, 0xff),
            foreground: Color::Rgb(0x0f, 0x17, 0x2a), // slate-900
            muted: Color::Rgb(0x64, 0x74, 0x8b),      // slate-500
            border: Color::Rgb(0xe2, 0xe8, 0xf0),     // slate-200
            border_active: Color::Rgb(0x3b, 0x82, 0xf6),
            selection_bg: Color::Rgb(0xef, 0xf6, 0xff), // blue-50
            selection_fg: Color::Rgb(0x25, 0x63, 0xeb), // blue-600
            accent: Color::Rgb(0x3b, 0x82, 0xf6),       // blue-500
            success: Color::Rgb(0x10, 0xb9, 0x81),      // emerald-500
            warning: Color::Rgb(0xf9, 0x73, 0x16),      // orange-500
            danger: Color::Rgb(0xef, 0x44, 0x44),
            highlight: Color::Rgb(0xa8, 0x55, 0xf7), // purple-500
            chart_dim: Color::Rgb(0xcb, 0xd5, 0xe1), // slate-300
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x02, 0x06, 0x17), // slate-950
            surface: Color::Rgb(0x0f, 0x17, 0x2a),    // slate-900
            foreground: Color::Rgb(0xf1, 0xf5, 0xf9), // slate-100
            muted: Color::Rgb(0x94, 0xa3, 0xb8),      // slate-400
            border: Color::Rgb(0x1e, 0x29, 0x3b),     // slate-800
            border_active: Color::Rgb(0x60, 0xa5, 0xfa),
            selection_bg: Color::Rgb(0x17, 0x25, 0x54), // blue-950
            selection_fg: Color::Rgb(0x60, 0xa5, 0xfa), // blue-400
            accent: Color::Rgb(0x60, 0xa5, 0xfa),
            success: Color::Rgb(0x34, 0xd3, 0x99), // emerald-400
            warning: Color::Rgb(0xfb, 0x92, 0x3c), // orange-400
            danger: Color::Rgb(0xf8, 0x71, 0x71),
            highlight: Color::Rgb(0xc0, 0x84, 0xfc), // purple-400
            chart_dim: Color::Rgb(0x33, 0x41, 0x55), // slate-700
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_mode_is_light() {
        let store = ThemeStore::new(ThemeMode::default());
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_returns_the_new_mode() {
        let store = ThemeStore::new(ThemeMode::Light);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_parity() {
        // After n toggles the mode equals the initial mode iff n is even.
        for n in 0..6 {
            let store = ThemeStore::new(ThemeMode::Light);
            for _ in 0..n {
                store.toggle();
            }
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(store.mode(), expected);
        }
    }

    #[test]
    fn test_subscriber_invoked_once_per_toggle() {
        let store = ThemeStore::new(ThemeMode::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (calls2, seen2) = (calls.clone(), seen.clone());
        let _sub = store.subscribe(move |mode| {
            calls2.fetch_add(1, Ordering::SeqCst);
            seen2.lock().push(mode);
        });

        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*seen.lock(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_every_subscriber_notified() {
        let store = ThemeStore::new(ThemeMode::Light);
        let a = Arc::new(AtomicUsize::new(0));
        let b = Arc::new(AtomicUsize::new(0));
        let (a2, b2) = (a.clone(), b.clone());
        let _sub_a = store.subscribe(move |_| {
            a2.fetch_add(1, Ordering::SeqCst);
        });
        let _sub_b = store.subscribe(move |_| {
            b2.fetch_add(1, Ordering::SeqCst);
        });

        store.toggle();
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_subscription_is_not_invoked() {
        let store = ThemeStore::new(ThemeMode::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();
        let sub = store.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        store.toggle();
        drop(sub);
        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_persisted_dark_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config {
            theme: ThemeMode::Dark,
        }
        .save_to(&path)
        .unwrap();

        let store = ThemeStore::load(path);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_missing_persisted_value_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::load(dir.path().join("config.json"));
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_corrupted_persisted_value_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "????").unwrap();
        let store = ThemeStore::load(path);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists_the_new_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = ThemeStore::load(path.clone());

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(Config::load_from(&path).theme, ThemeMode::Dark);
    }

    #[test]
    fn test_persistence_failure_degrades_silently() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so every write fails.
        let path = dir.path().join("missing").join("config.json");
        let store = ThemeStore::load(path);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();
        let _sub = store.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_palette_matches_mode() {
        assert_eq!(Theme::new(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Theme::new(ThemeMode::Dark).mode, ThemeMode::Dark);
    }
}
