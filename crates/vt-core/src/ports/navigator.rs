use crate::navigation::Location;

/// Navigation stack of the running client.
///
/// 导航端口。
pub trait NavigatorPort: Send + Sync {
    /// Location currently shown.
    fn current(&self) -> Location;

    /// Open a location on top of the current one.
    fn push(&self, location: Location);

    /// Swap the current location without growing history (used for redirects).
    fn replace(&self, location: Location);
}
