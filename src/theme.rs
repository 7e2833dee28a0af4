//! Page-lifetime theme state.
//!
//! [`ThemeStore`] is the only shared mutable state on the page. It is handed
//! to consumers by reference and mutated only through [`ThemeStore::toggle`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::{VizError, VizResult};

/// Storage key holding the literal `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }
}

impl FromStr for Theme {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(VizError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Linear 0..1 channels for shader uniforms.
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// CSS `rgba(...)` with the given alpha.
    pub fn css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl FromStr for Color {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(VizError::config(format!("expected #rrggbb color, got {s:?}")));
        }
        let rgb = u32::from_str_radix(digits, 16)
            .map_err(|_| VizError::config(format!("invalid hex color {s:?}")))?;
        Ok(Self::hex(rgb))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
}

pub const DARK: Palette = Palette {
    primary: Color::hex(0x10b981),
    secondary: Color::hex(0x34d399),
    accent: Color::hex(0x059669),
    background: Color::hex(0x000000),
    foreground: Color::hex(0xffffff),
    muted: Color::hex(0x6b7280),
};

pub const LIGHT: Palette = Palette {
    primary: Color::hex(0x059669),
    secondary: Color::hex(0x10b981),
    accent: Color::hex(0x047857),
    background: Color::hex(0xf9fafb),
    foreground: Color::hex(0x111827),
    muted: Color::hex(0x9ca3af),
};

/// Durable key-value storage for the persisted theme.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> VizResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> VizResult<()>;
}

/// In-process storage, used off the browser and in tests. Clones share the
/// same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage that fails every call, like `localStorage` in some private
    /// browsing modes.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> VizResult<Option<String>> {
        if self.unavailable {
            return Err(VizError::storage("storage disabled"));
        }
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> VizResult<()> {
        if self.unavailable {
            return Err(VizError::storage("storage disabled"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Theme, Palette)>;

pub struct ThemeStore {
    theme: Theme,
    storage: Box<dyn ThemeStorage>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Builds the store after one attempt to read the persisted theme.
    /// Unreadable or unknown values leave the default dark theme.
    pub fn hydrate(storage: impl ThemeStorage + 'static) -> Self {
        let theme = match storage.load(STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err| {
                log::debug!("ignoring persisted theme: {err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::debug!("theme storage unreadable: {err}");
                Theme::default()
            }
        };
        Self {
            theme,
            storage: Box::new(storage),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flips the theme, persists it, and notifies subscribers. Persistence
    /// failures are non-fatal.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.storage.save(STORAGE_KEY, self.theme.as_str()) {
            log::debug!("theme not persisted: {err}");
        }
        let palette = self.palette();
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.theme, palette);
        }
        self.theme
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme, Palette) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
