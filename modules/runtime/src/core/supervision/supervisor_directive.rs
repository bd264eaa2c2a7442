/// How a mailbox proceeds after a message handler failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupervisorDirective {
  /// Keep the failed message at the head of the queue and halt the actor.
  ///
  /// The actor stops unless the supervisor already requested a stop or a restart. After a restart
  /// the message is redelivered to the fresh instance.
  Halt,
  /// Drop the failed message and continue with the next one.
  Resume,
  /// Put the failed message back at the head and retry it on the next tick.
  Retry,
}
