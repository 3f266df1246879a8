//! Entry point for the **i3focus** command.
//!
//! Parses the single direction argument, wires the i3 backend and the
//! file-backed history store into a
//! [`FocusSwitcher`](i3focus::resolver::FocusSwitcher), and runs exactly
//! one resolution.
//!
//! Exit status is 0 whether or not a focus change happened — finding no
//! candidate is a normal outcome.  Only a bad argument or an IPC failure
//! exits non-zero.

use i3focus::config::Config;
use i3focus::direction::Direction;
use i3focus::history::FileHistory;
use i3focus::i3::wm::I3Wm;
use i3focus::resolver::{FocusSwitcher, Outcome};
use log::{debug, error, info};

/// Resolve the config directory (`$XDG_CONFIG_HOME/i3focus`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("i3focus")
}

/// Try to load the config from `$XDG_CONFIG_HOME/i3focus/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            debug!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Print usage to stdout.
fn usage() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "i3focus".into());
    println!("usage: {} <left|right|up|down>", program);
}

fn main() {
    env_logger::init();

    let direction: Direction = match std::env::args().nth(1).map(|a| a.parse()) {
        Some(Ok(d)) => d,
        _ => {
            usage();
            std::process::exit(1);
        }
    };

    let config = load_config();
    let history = match &config.history_file {
        Some(path) => FileHistory::at(path),
        None => FileHistory::new(),
    };

    let switcher = FocusSwitcher::new(I3Wm::new(), history);
    match switcher.focus(direction) {
        Ok(Outcome::Focused(id)) => debug!("focused container {}", id),
        Ok(Outcome::NoCandidate) => debug!("nothing to focus {}", direction),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
