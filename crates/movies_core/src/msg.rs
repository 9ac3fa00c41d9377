#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front end is up; kick off the initial catalog load.
    AppStarted,
    /// User asked for the catalog to be loaded again.
    ReloadRequested,
    /// User asked to abandon the running load.
    CancelRequested,
    /// Engine finished loading the catalog.
    CatalogLoaded(Vec<crate::Movie>),
    /// Engine failed to load the catalog (read, decode or cancellation).
    CatalogLoadFailed { reason: String },
    /// Push an explicit route onto the navigation path.
    RouteSelected(crate::Route),
    /// User followed the n-th link of the current screen.
    LinkSelected(usize),
    /// User tapped the n-th breadcrumb.
    BreadcrumbSelected(usize),
    /// User navigated back one level.
    BackRequested,
    /// User navigated back to the movie list.
    RootRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
