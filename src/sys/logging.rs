use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use std::path::PathBuf;

pub fn init_logger(path: PathBuf, enabled: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}]   {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                colors.color(record.level()),
                message
            ))
        })
        // Dispatch always passes Info+; the global max level is the gate so
        // the Settings toggle can flip logging without rebuilding fern.
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(path)?)
        .apply()?;

    // apply() resets the global max level to the dispatch level, so the
    // enabled gate has to come after it.
    log::set_max_level(if enabled {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Off
    });

    Ok(())
}
