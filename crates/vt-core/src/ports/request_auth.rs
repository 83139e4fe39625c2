use crate::ids::AccessToken;

/// Default `Authorization` header of the outgoing request pipeline.
///
/// Only the session manager mutates it, together with the in-memory session.
pub trait RequestAuthPort: Send + Sync {
    /// Attach `Authorization: Bearer <token>` to every subsequent call.
    fn set_bearer(&self, token: &AccessToken);

    /// Stop sending an `Authorization` header.
    fn clear_bearer(&self);

    fn has_bearer(&self) -> bool;
}
