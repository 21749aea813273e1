//! View-model projection
//!
//! `project` maps a session to a `PageView` snapshot. It reads the session
//! and nothing else, so rendering the same state twice gives equal views.

use super::thumbnail::Thumbnail;
use crate::catalog::{Item, MediaType};
use crate::filter::Category;
use crate::session::{LoadState, Session};

/// Presentation settings that are not part of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Label shown for the `ALL` category
    pub all_label: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            all_label: "All".to_string(),
        }
    }
}

/// One category button in the navigation panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub category: Category,
    pub label: String,
    pub active: bool,
}

/// One type checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeToggle {
    pub media_type: MediaType,
    pub enabled: bool,
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEntry {
    /// Position in the filtered sequence; the open-viewer target
    pub index: usize,
    pub name: String,
    /// Category path shown under the name
    pub dir: String,
    /// Full asset path, shown as the entry's title
    pub path: String,
    pub badge: &'static str,
    pub media_type: MediaType,
    pub thumbnail: Thumbnail,
    /// This entry is the one open in the viewer
    pub is_open: bool,
}

/// What the viewer displays for the open item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerMedia {
    /// Direct image
    Image { src: String },
    /// Embedded document preview
    PdfEmbed { src: String },
}

/// The modal viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerView {
    pub media: ViewerMedia,
    /// `"{name} — {dir}"`
    pub caption: String,
    /// Download link target
    pub download_href: String,
    /// Suggested file name for the download
    pub download_name: String,
    /// 1-based position in the filtered sequence
    pub position: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Complete snapshot consumed by a render sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub breadcrumbs: String,
    pub result_stats: String,
    pub categories: Vec<CategoryButton>,
    pub type_toggles: Vec<TypeToggle>,
    pub search_query: String,
    pub grid: Vec<GridEntry>,
    pub viewer: Option<ViewerView>,
    pub sidebar_open: bool,
    /// Inline error replacing the grid after a failed load
    pub load_error: Option<String>,
    /// Load still in flight
    pub loading: bool,
}

/// Project session state into a view
#[must_use]
pub fn project(session: &Session, options: &ViewOptions) -> PageView {
    let criteria = session.criteria();
    let open_index = session.cursor().index();

    let categories = session
        .categories()
        .iter()
        .map(|category| CategoryButton {
            category: category.clone(),
            label: category.display_label(&options.all_label).to_string(),
            active: *category == criteria.active_category,
        })
        .collect();

    let type_toggles = MediaType::ALL
        .into_iter()
        .map(|media_type| TypeToggle {
            media_type,
            enabled: session.type_enabled(media_type),
        })
        .collect();

    let grid = session
        .filtered()
        .iter()
        .enumerate()
        .map(|(index, item)| grid_entry(session, index, item, open_index == Some(index)))
        .collect();

    let viewer = open_index.and_then(|index| {
        session
            .filtered()
            .get(index)
            .map(|item| viewer_view(session, index, item))
    });

    let load_error = match session.load_state() {
        LoadState::Failed(message) => Some(format!("Failed to load gallery manifest: {message}")),
        _ => None,
    };

    PageView {
        breadcrumbs: criteria
            .active_category
            .display_label(&options.all_label)
            .to_string(),
        result_stats: format!("{} items", group_thousands(session.filtered().len())),
        categories,
        type_toggles,
        search_query: criteria.search_query.clone(),
        grid,
        viewer,
        sidebar_open: session.sidebar_open(),
        load_error,
        loading: *session.load_state() == LoadState::Pending,
    }
}

fn grid_entry(session: &Session, index: usize, item: &Item, is_open: bool) -> GridEntry {
    GridEntry {
        index,
        name: item.name.clone(),
        dir: item.dir.clone(),
        path: item.path.clone(),
        badge: item.media_type.badge(),
        media_type: item.media_type,
        thumbnail: Thumbnail::for_asset(item.media_type, &session.asset_url(item)),
        is_open,
    }
}

fn viewer_view(session: &Session, index: usize, item: &Item) -> ViewerView {
    let src = session.asset_url(item);
    let total = session.filtered().len();
    let media = match item.media_type {
        MediaType::Image => ViewerMedia::Image { src: src.clone() },
        MediaType::Pdf => ViewerMedia::PdfEmbed { src: src.clone() },
    };

    ViewerView {
        media,
        caption: format!("{} — {}", item.name, item.dir),
        download_href: src,
        download_name: item.name.clone(),
        position: index + 1,
        total,
        has_previous: index > 0,
        has_next: index + 1 < total,
    }
}

/// Format a count with `,` thousands separators
#[must_use]
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ManifestSource;
    use crate::session::{Event, SessionOptions};
    use crate::testing::{sample_catalog, trips_and_docs};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::with_catalog(trips_and_docs(), SessionOptions::default())
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_grid_entries() {
        let view = project(&session(), &ViewOptions::default());

        assert_eq!(view.grid.len(), 2);
        let photo = &view.grid[0];
        assert_eq!(photo.name, "fuji.jpg");
        assert_eq!(photo.dir, "Trips/Japan");
        assert_eq!(photo.badge, "IMAGE");
        assert_eq!(photo.thumbnail, Thumbnail::Asset("Trips/Japan/fuji.jpg".into()));

        let doc = &view.grid[1];
        assert_eq!(doc.badge, "PDF");
        assert!(matches!(doc.thumbnail, Thumbnail::Placeholder(_)));
    }

    #[test]
    fn test_header_and_navigation() {
        let mut session = session();
        session.handle(Event::CategorySelected(Category::Named("Docs".into())));
        let view = project(&session, &ViewOptions::default());

        assert_eq!(view.breadcrumbs, "Docs");
        assert_eq!(view.result_stats, "1 items");
        assert_eq!(
            view.categories.iter().map(|c| (c.label.as_str(), c.active)).collect::<Vec<_>>(),
            vec![("All", false), ("Trips", false), ("Docs", true)]
        );
        assert!(view.type_toggles.iter().all(|t| t.enabled));
        assert!(view.viewer.is_none());
    }

    #[test]
    fn test_all_label_is_configurable() {
        let options = ViewOptions {
            all_label: "すべて".to_string(),
        };
        let view = project(&session(), &options);
        assert_eq!(view.breadcrumbs, "すべて");
        assert_eq!(view.categories[0].label, "すべて");
    }

    #[test]
    fn test_viewer_projection() {
        let source = ManifestSource::parse("https://example.com/gallery.json").unwrap();
        let mut session = session().with_source(source);
        session.handle(Event::OpenItem(1));
        let view = project(&session, &ViewOptions::default());

        let viewer = view.viewer.unwrap();
        assert_eq!(
            viewer.media,
            ViewerMedia::PdfEmbed {
                src: "https://example.com/Docs/manual.pdf".into()
            }
        );
        assert_eq!(viewer.caption, "manual.pdf — Docs");
        assert_eq!(viewer.download_href, "https://example.com/Docs/manual.pdf");
        assert_eq!(viewer.download_name, "manual.pdf");
        assert_eq!((viewer.position, viewer.total), (2, 2));
        assert!(viewer.has_previous);
        assert!(!viewer.has_next);
        assert!(view.grid[1].is_open);
        assert!(!view.grid[0].is_open);
    }

    #[test]
    fn test_load_error_projection() {
        let mut session = Session::default();
        assert!(project(&session, &ViewOptions::default()).loading);

        session.apply_load(Err(crate::catalog::parse_manifest("{").unwrap_err()));
        let view = project(&session, &ViewOptions::default());
        assert!(!view.loading);
        assert!(view.grid.is_empty());
        assert!(view.load_error.unwrap().starts_with("Failed to load gallery manifest"));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut session = Session::with_catalog(sample_catalog(), SessionOptions::default());
        session.handle(Event::SearchChanged("trips".into()));
        session.handle(Event::OpenItem(2));

        let options = ViewOptions::default();
        assert_eq!(project(&session, &options), project(&session, &options));
    }
}
