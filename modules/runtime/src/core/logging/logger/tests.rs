use alloc::{string::String, vec::Vec};
use core::cell::RefCell;

use cadence_utils_rs::core::sync::RcShared;

use super::Logger;
use crate::core::logging::{LogEvent, LogLevel, LoggerWriter};

#[derive(Default)]
struct RecordingWriter {
  events: RefCell<Vec<LogEvent>>,
}

impl LoggerWriter for RecordingWriter {
  fn write(&self, event: &LogEvent) {
    self.events.borrow_mut().push(event.clone());
  }
}

#[test]
fn forwards_events_at_or_above_threshold() {
  let writer = RcShared::new(RecordingWriter::default());
  let logger = Logger::new(LogLevel::Info, writer.clone());

  logger.log(LogLevel::Debug, "executor", 1, format_args!("hidden"));
  logger.log(LogLevel::Info, "executor", 2, format_args!("visible {}", 7));
  logger.log(LogLevel::Error, "promise", 3, format_args!("boom"));

  let events = writer.events.borrow();
  assert_eq!(events.len(), 2);
  assert_eq!(events[0].message(), "visible 7");
  assert_eq!(events[0].origin(), "executor");
  assert_eq!(events[0].tick(), 2);
  assert_eq!(events[1].level(), LogLevel::Error);
  assert_eq!(events[1].origin(), "promise");
}

#[test]
fn disabled_logger_drops_everything() {
  let logger = Logger::disabled();
  assert!(!logger.is_enabled(LogLevel::Error));
  logger.log(LogLevel::Error, "executor", 0, format_args!("ignored"));
}

#[test]
fn with_level_shares_writer() {
  let writer = RcShared::new(RecordingWriter::default());
  let quiet = Logger::new(LogLevel::Error, writer.clone());
  let verbose = quiet.with_level(LogLevel::Trace);

  quiet.log(LogLevel::Warn, "a", 0, format_args!("dropped"));
  verbose.log(LogLevel::Trace, String::from("b"), 0, format_args!("kept"));

  let events = writer.events.borrow();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].origin(), "b");
}
