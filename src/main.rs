//! Headless driver for the multiline text widget.
//!
//! Loads `rune.toml` (plus `RUNE_*` overrides), builds one widget, replays a
//! short scripted editing session and prints the resulting state. Pass
//! `--system-clipboard` to route copy/paste through the OS clipboard instead
//! of an in-process one.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use rune_config::RuneConfig;
use rune_text::{ClipboardService, MemoryClipboard, MonospaceMetrics, Rect, SystemClipboard};
use rune_widgets::{EventHandler, KeyboardEvent, MultilineText, ScrollEvent};
use tracing_subscriber::EnvFilter;
use winit::keyboard::{KeyCode, ModifiersState};

const SAMPLE: &str = "The quick brown fox\njumps over\nthe lazy dog.\n\nPack my box with\nfive dozen liquor jugs.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = RuneConfig::load();
    config.multiline.selectable = true;
    tracing::info!(?config, "configuration loaded");

    let clipboard: Arc<dyn ClipboardService> = if std::env::args().any(|a| a == "--system-clipboard") {
        Arc::new(SystemClipboard)
    } else {
        Arc::new(MemoryClipboard::new())
    };

    let mut widget = MultilineText::new(
        Rect::new(0.0, 0.0, 240.0, 64.0),
        &config,
        Arc::new(MonospaceMetrics::default()),
        clipboard,
    )
    .with_text(SAMPLE);
    widget.set_focused(true);

    let command = ModifiersState::CONTROL;
    let shift = ModifiersState::SHIFT;
    let script = [
        (KeyCode::ArrowDown, ModifiersState::empty()),
        (KeyCode::ArrowRight, command),
        (KeyCode::ArrowRight, command | shift),
        (KeyCode::KeyC, command),
        (KeyCode::End, command),
        (KeyCode::Enter, ModifiersState::empty()),
        (KeyCode::KeyV, command),
        (KeyCode::Home, command | shift),
    ];

    let repeat_gap = config.multiline.repeat_delay() + Duration::from_millis(1);
    let mut clock = Instant::now();
    for (key, modifiers) in script {
        clock += repeat_gap;
        let result = widget.handle_keyboard(KeyboardEvent::pressed(key, modifiers).at(clock));
        tracing::info!(
            ?key,
            handled = result.is_handled(),
            caret = widget.caret_index(),
            selection = ?widget.selection().range(),
            "key"
        );
        if key == KeyCode::KeyC {
            // Let the detached copy land before pasting it back.
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    widget.handle_scroll(ScrollEvent { x: 10.0, y: 10.0, delta: 1.0 });
    widget.update(Duration::from_millis(16));

    let render = widget.render_data();
    println!("text:\n{}\n", widget.text());
    println!("caret: {}", widget.caret_index());
    println!("selection: {:?}", widget.selection().range());
    println!("selected: {:?}", widget.selected_text());
    println!(
        "scroll: {:.1} / {:.1}",
        widget.scroll_offset(),
        widget.scroll().max_offset()
    );
    println!("caret rect: {:?}", render.caret);
    println!("selection rects: {}", render.selection.len());
    println!("scrollbar thumb: {:?}", render.scrollbar_thumb);

    Ok(())
}
