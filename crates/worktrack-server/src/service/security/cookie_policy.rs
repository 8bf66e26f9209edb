/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookiePolicy {
    /// Adds the `Secure` attribute. Enabled in production.
    pub secure: bool,
}

impl CookiePolicy {
    pub fn new(production: bool) -> Self {
        Self { secure: production }
    }
}
