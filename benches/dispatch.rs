//! Benchmarks for the per-frame dispatch loop and camera recomputation
//!
//! Run with: cargo bench dispatch

use freelook::controls::register_default_targets;
use freelook::keymap::{parse_keybinds_str, BindingTable, Keycode};
use freelook::startup::DEFAULT_KEYBINDS;
use freelook::{Dispatcher, InputEvent, Viewer, ViewerConfig};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn stock_table() -> (BindingTable<Viewer>, Viewer) {
    let config = ViewerConfig::default();
    let mut table = BindingTable::new();
    register_default_targets(&mut table, &config);
    parse_keybinds_str(DEFAULT_KEYBINDS, "default-keybinds.txt", &mut table).unwrap();
    (table, Viewer::new(&config))
}

// ============================================================================
// Frame loop
// ============================================================================

/// Frames with movement keys held and the cursor moving every frame
#[divan::bench(args = [100, 1000])]
fn frames_while_flying(frames: usize) {
    let (mut table, mut viewer) = stock_table();
    let mut dispatcher = Dispatcher::default();

    for keycode in [Keycode(87), Keycode(68), Keycode::MOUSE_RIGHT] {
        dispatcher.push(InputEvent::KeyDown {
            keycode,
            repeat: false,
        });
    }

    for i in 0..frames {
        dispatcher.push(InputEvent::CursorMoved {
            x: i as f32,
            y: (i / 2) as f32,
        });
        let dt = dispatcher.frame_update(&mut table, &mut viewer, 0.016);
        divan::black_box(dt);
        divan::black_box(viewer.camera.view_projection());
    }
}

/// Many key transitions resolved in a single frame
#[divan::bench(args = [100, 1000])]
fn press_release_burst(events: usize) {
    let (mut table, mut viewer) = stock_table();
    let mut dispatcher = Dispatcher::default();

    for i in 0..events {
        let keycode = Keycode::ascii(b'a' + (i % 26) as u8);
        dispatcher.push(InputEvent::KeyDown {
            keycode,
            repeat: false,
        });
        dispatcher.push(InputEvent::KeyUp { keycode });
    }
    dispatcher.frame_update(&mut table, &mut viewer, 0.016);
    divan::black_box(&viewer);
}

// ============================================================================
// Camera
// ============================================================================

#[divan::bench]
fn camera_recompute(bencher: divan::Bencher) {
    let mut viewer = Viewer::default();
    bencher.bench_local(|| {
        viewer.camera.inc_theta(0.001);
        divan::black_box(viewer.camera.view_projection())
    });
}

#[divan::bench]
fn camera_cached_read(bencher: divan::Bencher) {
    let viewer = Viewer::default();
    let _ = viewer.camera.view_projection();
    bencher.bench_local(|| divan::black_box(viewer.camera.view_projection()));
}
