use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line(file, line, message));
    }

    pub fn log_verbose(&self, file: &str, line: u32, message: &str) {
        if self.verbose {
            self.log(file, line, message);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

// Library code logs before a binary sets things up (unit tests, benches), so an
// uninitialized logger drops messages instead of complaining.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

pub fn log_verbose(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log_verbose(file, line, message);
    }
}

pub fn verbose_enabled() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => {
        if $crate::logger::verbose_enabled() {
            $crate::logger::log_verbose(file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_prefix() {
        let logger = Logger::new(Some("Server".to_string()), false);
        let line = logger.format_line("src/games/tictactoe/move_service.rs", 42, "hello");

        assert!(line.ends_with("[Server][move_service.rs:42] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("C:\\work\\main.rs", 7, "started");

        assert!(line.ends_with("][main.rs:7] started"));
        assert!(logger.is_verbose());
    }
}
