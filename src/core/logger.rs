use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{
    LevelFilter,
    Metadata,
    Record
};

static CONSOLE_ENABLED: AtomicBool = AtomicBool::new(true);
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

static MY_LOGGER: MyLogger = MyLogger;
struct MyLogger;
impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if CONSOLE_ENABLED.load(Ordering::Relaxed) {
            eprintln!("{}", line);
        }

        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stderr().flush();
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = file.flush();
            }
        }
    }
}

/// Installs the process logger. Log lines go to stderr (the shell owns
/// stdout for rendering) and, when `file` is given, are appended to it.
pub fn setup(level: LevelFilter, file: Option<&str>) {
    CONSOLE_ENABLED.store(true, Ordering::Relaxed);

    let opened = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Opening log file {} error: {e}", path))
            .ok()
    });

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = opened;
    }

    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
}

/// Stops echoing log lines to the console; file output, if any, continues.
pub fn revert_console_output() {
    CONSOLE_ENABLED.store(false, Ordering::Relaxed);
}

/// Silences the installed logger and closes the log file. The `log`
/// facade cannot uninstall a logger, so a later `setup` reuses it.
pub fn teardown() {
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(mut file) = guard.take() {
            _ = file.flush();
        }
    }
}
