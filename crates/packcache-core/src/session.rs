//! Application session readiness
//!
//! Restoring persisted state only makes sense once the owning application
//! session is live. The gateway asks a `SessionContext` before touching disk.

/// Reports whether the application session is initialized
pub trait SessionContext {
    fn is_ready(&self) -> bool;
}

impl<F> SessionContext for F
where
    F: Fn() -> bool,
{
    fn is_ready(&self) -> bool {
        self()
    }
}

/// Session that is always ready (headless tools, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadySession;

impl SessionContext for ReadySession {
    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_session() {
        assert!(ReadySession.is_ready());
    }

    #[test]
    fn test_closure_session() {
        let not_yet = || false;
        assert!(!not_yet.is_ready());
    }
}
