use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    pub fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    /// Writes to stderr; stdout belongs to the board.
    pub fn log(&self, file: &str, line: u32, message: &str) {
        if !self.enabled {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format_line(&timestamp, file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

/// Dropped silently until `init_logger` runs.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
