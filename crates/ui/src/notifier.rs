use mockall::automock;

/// Blocking user dialogs.
///
/// Alerts double as the acknowledgement of a successful action, so every
/// view action ends with at most one alert.
#[automock]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);

    /// Asks a yes/no question; `false` aborts the pending action.
    fn confirm(&self, message: &str) -> bool;
}

/// Page-level navigation.
#[automock]
pub trait Navigator: Send + Sync {
    /// Re-renders the current page from fresh backend data.
    fn reload(&self);

    /// Opens `url` in a new browsing context.
    fn open(&self, url: &str);
}
