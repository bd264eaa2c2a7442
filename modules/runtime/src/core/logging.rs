mod log_event;
mod log_level;
mod logger;
mod logger_writer;

pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use logger_writer::LoggerWriter;
