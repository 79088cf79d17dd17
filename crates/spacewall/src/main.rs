//! Spacewall demo application
//!
//! Hosts the scene engine in a terminal: builds the tech-icon catalog,
//! loads icon sprites (with color-swatch stand-ins when no icon files are
//! around), then drives the engine at a fixed cadence and paints each
//! frame with ANSI truecolor half blocks.
//!
//! Usage: `spacewall [FRAMES]`. Without a frame count it runs until
//! interrupted.

mod icons;
mod term;

use scene_engine::prelude::*;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Scene size in engine pixels; the canvas scales it down to cells
const SCENE_WIDTH: f32 = 640.0;
const SCENE_HEIGHT: f32 = 360.0;

/// Terminal grid: 128 columns, 36 rows of two stacked pixels each
const GRID_COLS: usize = 128;
const GRID_ROWS: usize = 36;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scene_engine::foundation::logging::init();

    let frames: Option<u64> = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?;

    let config = SceneConfig::load_or_default("spacewall.toml");
    let mut engine = SceneEngine::new(config, SCENE_WIDTH, SCENE_HEIGHT);
    register_icons(&mut engine);

    let mut canvas = term::TermCanvas::new(GRID_COLS, GRID_ROWS, SCENE_WIDTH, SCENE_HEIGHT);
    let mut timer = Timer::new();
    let mut out = std::io::stdout().lock();

    // Hide the cursor and clear once; frames repaint in place.
    out.write_all(b"\x1b[?25l\x1b[2J")?;

    let mut frame = 0u64;
    loop {
        timer.update();
        engine.tick(timer.delta_time(), Some(&mut canvas));
        canvas.present(&mut out)?;

        frame += 1;
        if frames.is_some_and(|limit| frame >= limit) {
            break;
        }
        thread::sleep(Duration::from_millis(16));
    }

    out.write_all(b"\x1b[?25h\x1b[0m")?;
    engine.shutdown();
    log::info!(
        "rendered {} frames at {:.1} fps average",
        timer.frame_count(),
        timer.average_fps()
    );
    Ok(())
}

/// Register every cataloged technology as a target style.
///
/// Icon files are looked up under `icons/<slug>.png`. When a file is
/// missing or fails to decode, a brand-color swatch stands in so the scene
/// still reads; the CDN URL for the real icon goes to the log.
fn register_icons(engine: &mut SceneEngine) {
    let icon_dir = Path::new("icons");
    let mut loaded = 0usize;

    for tech in icons::TECH_ICONS {
        let handle = engine.sprites_mut().insert_pending();
        let path = icon_dir.join(format!("{}.png", icons::slug(tech.name)));
        match ImageData::from_file(&path) {
            Ok(image) => {
                loaded += 1;
                engine.sprites_mut().fulfill(handle, Ok(image));
            }
            Err(e) => {
                log::debug!(
                    "no icon for {} ({}); using a swatch, fetchable from {}",
                    tech.name,
                    e,
                    icons::icon_url(tech.name)
                );
                let [r, g, b, a] = tech.color.to_rgba8();
                engine
                    .sprites_mut()
                    .fulfill(handle, Ok(ImageData::solid_color(8, 8, [r, g, b, a])));
            }
        }
        engine.register_style(tech.name, tech.color, Some(handle));
    }

    log::info!(
        "registered {} target styles ({} from icon files)",
        icons::TECH_ICONS.len(),
        loaded
    );
}
