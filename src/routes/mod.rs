//! Declarative route table with lazy component loading.
//!
//! The table only declares which component belongs to which path; path
//! matching and navigation state are owned by the hosting router.

mod component;
mod table;

pub use component::{Component, ComponentHandle, ComponentSource, LoadError, LoaderFuture};
pub use table::{app_routes, HistoryMode, RouteEntry, RouteTable};
