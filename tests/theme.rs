use std::cell::RefCell;
use std::rc::Rc;

use folio_viz::theme::{Color, MemoryStorage, Theme, ThemeStore, DARK, LIGHT, STORAGE_KEY};
use folio_viz::VizError;

#[test]
fn defaults_to_dark_without_persisted_value() {
    let store = ThemeStore::hydrate(MemoryStorage::new());
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.palette(), DARK);
}

#[test]
fn toggle_parity() {
    for n in 0..7 {
        let mut store = ThemeStore::hydrate(MemoryStorage::new());
        for _ in 0..n {
            store.toggle();
        }
        let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
        assert_eq!(store.theme(), expected, "after {n} toggles");
    }
}

#[test]
fn palette_snapshot_is_stable_across_toggles() {
    let mut store = ThemeStore::hydrate(MemoryStorage::new());
    let before = store.palette();
    store.toggle();
    assert_eq!(before, DARK);
    assert_eq!(store.palette(), LIGHT);
    assert_eq!(before.primary.to_string(), "#10b981");
    assert_eq!(LIGHT.background.to_string(), "#f9fafb");
}

#[test]
fn persisted_light_round_trips() {
    let storage = MemoryStorage::with_entry(STORAGE_KEY, "light");
    let mut store = ThemeStore::hydrate(storage.clone());
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.palette(), LIGHT);

    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn unknown_persisted_value_falls_back_to_dark() {
    let store = ThemeStore::hydrate(MemoryStorage::with_entry(STORAGE_KEY, "sepia"));
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn unavailable_storage_still_toggles() {
    let mut store = ThemeStore::hydrate(MemoryStorage::unavailable());
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.toggle(), Theme::Dark);
}

#[test]
fn subscribers_run_in_order_and_can_leave() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = ThemeStore::hydrate(MemoryStorage::new());

    let first = seen.clone();
    let a = store.subscribe(move |theme, _| first.borrow_mut().push(("a", theme)));
    let second = seen.clone();
    store.subscribe(move |theme, palette| {
        assert_eq!(palette, theme.palette());
        second.borrow_mut().push(("b", theme));
    });

    store.toggle();
    assert!(store.unsubscribe(a));
    assert!(!store.unsubscribe(a));
    store.toggle();

    assert_eq!(
        *seen.borrow(),
        vec![("a", Theme::Light), ("b", Theme::Light), ("b", Theme::Dark)]
    );
}

#[test]
fn theme_names_parse() {
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
    assert!(matches!("Dark".parse::<Theme>(), Err(VizError::UnknownTheme(_))));
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn colors_parse_and_format() {
    let color: Color = "#34d399".parse().unwrap();
    assert_eq!(color, DARK.secondary);
    assert_eq!(color.to_string(), "#34d399");
    assert_eq!(Color::hex(0x000000).css_rgba(0.8), "rgba(0, 0, 0, 0.8)");
    assert_eq!(Color::hex(0xffffff).to_rgb_f32(), [1.0, 1.0, 1.0]);

    assert!("#12345".parse::<Color>().is_err());
    assert!("#zzzzzz".parse::<Color>().is_err());
}
