// Detail overlay capability - dialog primitive supplied by the shell
/// Modal-style detail view. The component decides when it opens and what it
/// says; presentation belongs to the host.
pub trait OverlayHost: Send + Sync {
    /// Present the overlay with the given title and body.
    fn show(&self, title: &str, body: &str);

    /// Dismiss the overlay. Must be idempotent.
    fn hide(&self);
}
