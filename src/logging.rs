use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Where the log file lives: `~/.local/share/gl-suggest/gl-suggest.log`.
pub fn log_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        std::path::Path::new(&home)
            .join(".local/share/gl-suggest")
            .join("gl-suggest.log"),
    )
}

/// Install a file logger. `debug` lowers the threshold from `Info` to `Debug`.
/// Best-effort: failures are silently ignored (logging must never block completion).
pub fn init(debug: bool) {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(level, config, file);
}

/// Record one served request as a single line.
pub fn log_request(generators: &[String], produced: usize) {
    let names = generators.join(",");
    let names: String = names.chars().take(200).collect();
    log::info!("request\t{names}\t{produced} suggestion(s)");
}
