use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use freelook::cli::CliArgs;
use freelook::controls::register_default_targets;
use freelook::keymap::{BindingTable, Dispatcher};
use freelook::startup::{bind_keys, install_default_keybinds, warn_dead_bindings};
use freelook::{Viewer, ViewerConfig};

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    freelook::tracing::init();

    let config = ViewerConfig::load();
    let paths = args.keybind_paths().map_err(anyhow::Error::msg)?;

    if paths.default_is_stock {
        if let Err(e) = install_default_keybinds(&paths.default) {
            tracing::warn!(
                "Could not install default keybinds at {}: {}",
                paths.default.display(),
                e
            );
        }
    }

    let mut table: BindingTable<Viewer> = BindingTable::new();
    register_default_targets(&mut table, &config);

    match bind_keys(&mut table, &paths.default, paths.user.as_deref()) {
        Ok(loaded) => {
            tracing::debug!("Keybinds loaded: {:?}", loaded);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
    let dead = warn_dead_bindings(&table);

    if args.check {
        println!(
            "Keybinds OK ({} targets, {} dead bindings)",
            table.target_count(),
            dead
        );
        return Ok(());
    }

    let viewer = Viewer::new(&config);
    let dispatcher = Dispatcher::new(config.max_dt);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(viewer, table, dispatcher, args.window_size());

    event_loop.run_app(&mut app)?;

    Ok(())
}
