/// Reusable engine scratch state handed out by a `ClipperPool`.
pub trait ClipperInstance {
    fn new() -> Self;

    /// Drops every buffered path so the next user starts from scratch.
    fn clean(&mut self);
}
