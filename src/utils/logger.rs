use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Once;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        write_line(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(line: &str) {
    eprintln!("{}", line);
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

pub fn init_logger() {
    init_logger_with_level(LevelFilter::Info);
}

/// Installs the console logger once; later calls only adjust the level.
pub fn init_logger_with_level(level: LevelFilter) {
    INIT.call_once(|| {
        // Another logger may already be installed by the host application.
        let _ = log::set_logger(&LOGGER);
    });
    log::set_max_level(level);
}
