//! Session state
//!
//! One owned record holding the catalog, derived categories, filter
//! criteria, filtered sequence, viewer cursor and load status. Every input
//! goes through [`Session::handle`], which runs to completion and leaves the
//! cursor invariant intact.
//!
//! # Workflow
//!
//! ```text
//! Session::new
//!     ↓
//! apply_load(result) ──Err──▶ LoadState::Failed, empty catalog
//!     │ Ok
//!     ▼
//! set_catalog → derive_categories → recompute
//!     ↓
//! ┌─→ handle(Event)
//! │   ├─ SearchChanged / CategorySelected / TypeToggled → recompute → resync cursor
//! │   ├─ OpenItem / Next / Previous / Close → cursor transition
//! │   └─ ToggleSidebar → presentation only
//! └───┘
//! ```

use super::event::{Event, Outcome};
use crate::catalog::{Catalog, Item, LoadError, ManifestSource, MediaType};
use crate::filter::{Category, CategoryMatch, FilterCriteria, apply_filters, derive_categories};
use crate::viewer::{ResyncPolicy, ViewerCursor};

/// Status of the one-shot manifest load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    /// Load failed; the message is shown inline in place of the grid
    Failed(String),
}

/// Behavioral knobs for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub category_match: CategoryMatch,
    pub resync: ResyncPolicy,
}

/// Media browser session state
#[derive(Debug, Clone)]
pub struct Session {
    source: Option<ManifestSource>,
    catalog: Catalog,
    categories: Vec<Category>,
    criteria: FilterCriteria,
    filtered: Vec<Item>,
    cursor: ViewerCursor,
    load_state: LoadState,
    sidebar_open: bool,
    options: SessionOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    /// Create an empty session waiting for its load
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            source: None,
            catalog: Vec::new(),
            categories: vec![Category::All],
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            cursor: ViewerCursor::Closed,
            load_state: LoadState::Pending,
            sidebar_open: true,
            options,
        }
    }

    /// Create a session over an already-loaded catalog
    #[must_use]
    pub fn with_catalog(catalog: Catalog, options: SessionOptions) -> Self {
        let mut session = Self::new(options);
        session.set_catalog(catalog);
        session
    }

    /// Record where the manifest came from, for asset URL resolution
    #[must_use]
    pub fn with_source(mut self, source: ManifestSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Start from non-default criteria (CLI flags)
    ///
    /// Before the load completes the category is kept as given and checked
    /// by [`set_catalog`](Self::set_catalog); afterwards an unknown category
    /// falls back to `ALL` right away.
    #[must_use]
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        if self.load_state != LoadState::Pending {
            self.reconcile_category();
        }
        self.recompute();
        self
    }

    #[must_use]
    pub const fn with_sidebar(mut self, open: bool) -> Self {
        self.sidebar_open = open;
        self
    }

    /// Apply the result of the one-shot manifest load
    ///
    /// On failure the catalog is left empty and the error message is kept
    /// for display. There is no retry.
    pub fn apply_load(&mut self, result: Result<Catalog, LoadError>) {
        match result {
            Ok(catalog) => self.set_catalog(catalog),
            Err(e) => {
                tracing::warn!("Manifest load failed: {}", e);
                self.set_catalog(Vec::new());
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Replace the catalog wholesale
    ///
    /// Categories are re-derived. An active category that no longer exists
    /// falls back to `ALL`.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.categories = derive_categories(&self.catalog);
        self.reconcile_category();
        self.load_state = LoadState::Loaded;
        self.recompute();
    }

    /// Reset an active category the catalog does not have to `ALL`
    fn reconcile_category(&mut self) {
        if self.categories.contains(&self.criteria.active_category) {
            return;
        }
        if !self.catalog.is_empty() {
            tracing::warn!(
                "Category {} is not in the catalog, showing everything",
                self.criteria.active_category
            );
        }
        self.criteria.active_category = Category::All;
    }

    /// Process one input event
    pub fn handle(&mut self, event: Event) -> Outcome {
        tracing::trace!("Handling {:?}", event);

        match event {
            Event::SearchChanged(query) => {
                if query == self.criteria.search_query {
                    return Outcome::Ignored;
                }
                self.criteria.search_query = query;
                self.recompute();
                Outcome::Refiltered
            }
            Event::CategorySelected(category) => {
                if category == self.criteria.active_category {
                    return Outcome::Ignored;
                }
                if !self.categories.contains(&category) {
                    tracing::debug!("Selected category {} is not in the index", category);
                }
                self.criteria.active_category = category;
                self.recompute();
                Outcome::Refiltered
            }
            Event::TypeToggled(media_type, enabled) => {
                if !self.criteria.set_type(media_type, enabled) {
                    return Outcome::Ignored;
                }
                self.recompute();
                Outcome::Refiltered
            }
            Event::OpenItem(index) => match self.cursor.open(index, self.filtered.len()) {
                Ok(()) => Outcome::Navigated,
                Err(e) => {
                    tracing::warn!("Ignoring open request: {}", e);
                    Outcome::Ignored
                }
            },
            Event::Next => {
                if self.cursor.next(self.filtered.len()) {
                    Outcome::Navigated
                } else {
                    Outcome::Ignored
                }
            }
            Event::Previous => {
                if self.cursor.previous() {
                    Outcome::Navigated
                } else {
                    Outcome::Ignored
                }
            }
            Event::Close => {
                if self.cursor.is_open() {
                    self.cursor.close();
                    Outcome::Navigated
                } else {
                    Outcome::Ignored
                }
            }
            Event::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                Outcome::Presentation
            }
        }
    }

    /// Recompute the filtered sequence and re-synchronize the cursor
    fn recompute(&mut self) {
        let open_path = self.current_item().map(|item| item.path.clone());
        self.filtered = apply_filters(&self.catalog, &self.criteria, self.options.category_match);

        let before = self.cursor;
        self.cursor
            .resync(open_path.as_deref(), &self.filtered, self.options.resync);
        if before != self.cursor {
            tracing::debug!("Viewer cursor re-synchronized: {:?} -> {:?}", before, self.cursor);
        }
    }

    /// Item under the viewer cursor, if open
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.cursor.index().and_then(|i| self.filtered.get(i))
    }

    /// Whether the cursor invariant holds
    #[must_use]
    pub fn cursor_is_valid(&self) -> bool {
        self.cursor.index().is_none_or(|i| i < self.filtered.len())
    }

    #[must_use]
    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn filtered(&self) -> &[Item] {
        &self.filtered
    }

    #[must_use]
    pub const fn cursor(&self) -> ViewerCursor {
        self.cursor
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    #[must_use]
    pub const fn source(&self) -> Option<&ManifestSource> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn type_enabled(&self, media_type: MediaType) -> bool {
        self.criteria.type_enabled(media_type)
    }

    /// Resolve an item's asset path against the manifest location
    #[must_use]
    pub fn asset_url(&self, item: &Item) -> String {
        self.source
            .as_ref()
            .map_or_else(|| item.path.clone(), |source| source.resolve_asset(&item.path))
    }
}
