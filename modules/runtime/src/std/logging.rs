mod tracing_logger_writer;

pub use tracing_logger_writer::TracingLoggerWriter;
