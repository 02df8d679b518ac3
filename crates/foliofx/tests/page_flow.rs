#![forbid(unsafe_code)]

//! End-to-end page wiring: hero intro, navigation, and theme switching.
//!
//! Run:
//!   cargo test -p foliofx --test page_flow

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use foliofx::prelude::*;
use foliofx::{Background, LogoVariant, Region, ScramblePhase};

/// A browser-like page: stacked sections in document coordinates and a
/// shared scroll offset.
struct Page {
    viewport: f64,
    scroll_y: Mutex<f64>,
    layout: Vec<(SectionId, f64, f64)>,
}

impl Page {
    fn portfolio() -> Arc<Self> {
        Arc::new(Self {
            viewport: 800.0,
            scroll_y: Mutex::new(0.0),
            layout: vec![
                (SectionId::Hero, 0.0, 900.0),
                (SectionId::About, 900.0, 1700.0),
                (SectionId::Role, 1700.0, 2300.0),
                (SectionId::Services, 2300.0, 3100.0),
                (SectionId::Experience, 3100.0, 3900.0),
                (SectionId::Projects, 3900.0, 5000.0),
            ],
        })
    }
}

impl ScrollSurface for Page {
    fn scroll_y(&self) -> f64 {
        *self.scroll_y.lock().unwrap()
    }

    fn set_scroll_y(&self, y: f64) {
        *self.scroll_y.lock().unwrap() = y;
    }
}

impl RegionProvider for Page {
    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn regions(&self) -> Vec<Region> {
        let y = self.scroll_y();
        self.layout
            .iter()
            .map(|&(id, top, bottom)| Region::new(id, top - y, bottom - y))
            .collect()
    }
}

fn fast_config() -> FolioConfig {
    FolioConfig::from_toml_str(
        r#"
        [scramble]
        tick_interval_ms = 1
        start_delay_ms = 0
        seed = 42

        [scroll]
        duration_ms = 30
        frame_interval_ms = 1
        "#,
    )
    .unwrap()
}

#[test]
fn hero_intro_resolves_all_titles() {
    let last = Arc::new(Mutex::new(Vec::new()));
    let ticks = Arc::new(AtomicUsize::new(0));
    let (sink_last, sink_ticks) = (Arc::clone(&last), Arc::clone(&ticks));

    let handle = start_hero_titles(&fast_config(), move |frames| {
        sink_ticks.fetch_add(1, Ordering::SeqCst);
        *sink_last.lock().unwrap() = frames.to_vec();
    })
    .unwrap();
    handle.wait();

    assert_eq!(ticks.load(Ordering::SeqCst), 53);
    let last = last.lock().unwrap();
    let texts: Vec<&str> = last.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(texts, [foliofx::HERO_TITLE, foliofx::HERO_SUBTITLE, foliofx::HERO_ROLE]);
    assert!(last.iter().all(|f| f.phase == ScramblePhase::Done));
}

#[test]
fn cancelled_intro_stays_silent() {
    let mut config = fast_config();
    config.scramble.total_steps = 10_000;
    let ticks = Arc::new(AtomicUsize::new(0));
    let sink_ticks = Arc::clone(&ticks);

    let mut handle = start_hero_titles(&config, move |_| {
        sink_ticks.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    thread::sleep(Duration::from_millis(10));
    handle.cancel();
    let at_cancel = ticks.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(25));
    assert_eq!(ticks.load(Ordering::SeqCst), at_cancel);
    assert!(!handle.is_done());
}

#[test]
fn navigation_lands_on_section_and_switches_theme() {
    let config = fast_config();
    let page = Page::portfolio();
    let sections = SectionController::new(config.themes);
    let reader = sections.reader();
    let nav = ScrollNavigator::new(Arc::clone(&page)).timing(config.scroll_timing());

    nav.jump_to(0.0);
    assert_eq!(sections.observe(page.as_ref()), config.themes.hero);

    nav.scroll_to(page.as_ref(), SectionId::Role).unwrap().unwrap().wait();
    assert_eq!(page.scroll_y(), 1700.0);
    sections.observe(page.as_ref());
    assert_eq!(sections.active(), Some(SectionId::Role));
    assert_eq!(reader.get().logo, LogoVariant::Secondary);

    nav.scroll_to(page.as_ref(), SectionId::Projects).unwrap().unwrap().wait();
    assert_eq!(page.scroll_y(), 3900.0);
    sections.observe(page.as_ref());
    assert_eq!(reader.get().background, Background::Light);
}

#[test]
fn themes_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[themes.hero]\nbackground = \"light\"\naccent = \"dark\"\nlogo = \"secondary\""
    )
    .unwrap();
    let config = FolioConfig::load_toml_file(file.path()).unwrap();
    let sections = SectionController::new(config.themes);
    let page = Page::portfolio();
    let theme = sections.observe(page.as_ref());
    assert_eq!(theme.background, Background::Light);
    assert_eq!(theme.logo, LogoVariant::Secondary);
}

#[test]
fn invalid_config_surfaces_as_facade_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[scramble]\ncharset = \"\"").unwrap();
    let err: foliofx::Error = FolioConfig::load_toml_file(file.path()).unwrap_err().into();
    assert!(matches!(err, foliofx::Error::Config(_)));
    assert!(err.to_string().contains("scramble.charset"));
}
