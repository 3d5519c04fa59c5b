//! The application route table.

use std::fmt;

use tokio::sync::OnceCell;

use super::component::{ComponentHandle, ComponentSource, LoadError, LoaderFuture};

/// How URLs are mapped to navigation history.
///
/// The app uses [`Browser`](Self::Browser) mode (clean URLs); the deployment
/// must rewrite deep links to the entry point, which is outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Native browser history, no hash fragment.
    Browser,
    /// Hash-fragment history for hosts without rewrite support.
    Hash,
}

/// One declared route: a path, a name, and a component source.
pub struct RouteEntry {
    path: String,
    name: String,
    source: ComponentSource,
    cached: OnceCell<ComponentHandle>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, source: ComponentSource) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            source,
            cached: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.source, ComponentSource::Lazy(_))
    }

    /// Obtain the component for this route.
    ///
    /// Eager routes return their handle without suspension. Lazy routes run
    /// their factory on first activation and cache the resolved handle, so
    /// later navigations reuse it. A failed acquisition is not cached; the
    /// next navigation runs the factory again. The error itself is the
    /// hosting router's problem to surface.
    pub async fn resolve(&self) -> Result<ComponentHandle, LoadError> {
        match &self.source {
            ComponentSource::Eager(component) => Ok(component.clone()),
            ComponentSource::Lazy(factory) => {
                let component = self.cached.get_or_try_init(|| factory()).await?;
                tracing::debug!(route = %self.name, component = component.name(), "component resolved");
                Ok(component.clone())
            }
        }
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("source", &self.source)
            .field("resolved", &self.cached.initialized())
            .finish()
    }
}

/// Ordered list of declared routes.
///
/// Declaration order is match priority: [`find`](Self::find) returns the
/// first entry whose path matches. The table never mutates after
/// construction and holds no shared state between entries, so concurrent
/// navigations to different routes resolve independently.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    history: HistoryMode,
}

impl RouteTable {
    pub fn new(history: HistoryMode, entries: Vec<RouteEntry>) -> Self {
        Self { entries, history }
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history
    }

    /// Look up the entry for an exact path. `None` means the hosting
    /// router's not-found handling takes over.
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declare the application's routes.
///
/// The home view ships with the initial bundle and is bound eagerly; the
/// map and records views are fetched on first navigation through the given
/// factories. Paths, names, order, and laziness are fixed here; the views
/// themselves live in the hosting application.
///
/// # Example
///
/// ```rust,ignore
/// let table = app_routes(
///     Arc::new(HomeView::default()),
///     || Box::pin(chunks::fetch("MapView")),
///     || Box::pin(chunks::fetch("RecordsView")),
/// );
/// ```
pub fn app_routes<M, R>(home: ComponentHandle, map: M, records: R) -> RouteTable
where
    M: Fn() -> LoaderFuture + Send + Sync + 'static,
    R: Fn() -> LoaderFuture + Send + Sync + 'static,
{
    RouteTable::new(
        HistoryMode::Browser,
        vec![
            RouteEntry::new("/", "home", ComponentSource::Eager(home)),
            RouteEntry::new("/map", "map", ComponentSource::lazy(map)),
            RouteEntry::new("/records", "records", ComponentSource::lazy(records)),
        ],
    )
}
