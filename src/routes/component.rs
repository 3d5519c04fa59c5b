//! Component handles and asynchronous component acquisition.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

/// A renderable page component.
///
/// Rendering itself happens in the hosting application; this crate only
/// moves handles around. The trait is the seam between the route table and
/// the shell's view layer.
pub trait Component: Send + Sync {
    /// Display name of the component (e.g. `HomeView`).
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name()).finish()
    }
}

/// Shared handle to a resolved component.
pub type ComponentHandle = Arc<dyn Component>;

/// Future returned by a lazy component factory.
pub type LoaderFuture = BoxFuture<'static, Result<ComponentHandle, LoadError>>;

/// Error returned when lazy component acquisition fails.
///
/// Typically a failed fetch of the component's code chunk. The route table
/// defines no retry policy; the error propagates to the hosting router's
/// navigation-failure handling.
#[derive(Debug, Clone)]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component load failed: {}", self.reason)
    }
}

impl std::error::Error for LoadError {}

/// How a route obtains its component.
#[derive(Clone)]
pub enum ComponentSource {
    /// Bound at table construction, available without suspension.
    Eager(ComponentHandle),
    /// Acquired on first activation via an async factory.
    Lazy(Arc<dyn Fn() -> LoaderFuture + Send + Sync>),
}

impl ComponentSource {
    /// Wrap an async factory as a lazy source.
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> LoaderFuture + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(factory))
    }
}

impl fmt::Debug for ComponentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager(component) => f.debug_tuple("Eager").field(&component.name()).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct View(&'static str);

    impl Component for View {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn load_error_display_includes_reason() {
        let err = LoadError::new("chunk fetch timed out");
        assert_eq!(err.to_string(), "component load failed: chunk fetch timed out");
        assert_eq!(err.reason(), "chunk fetch timed out");
    }

    #[test]
    fn source_debug_shows_component_name() {
        let source = ComponentSource::Eager(Arc::new(View("HomeView")));
        assert_eq!(format!("{source:?}"), "Eager(\"HomeView\")");

        let lazy = ComponentSource::lazy(|| {
            Box::pin(async { Ok(Arc::new(View("MapView")) as ComponentHandle) })
        });
        assert_eq!(format!("{lazy:?}"), "Lazy(..)");
    }
}
