use feedpane_core::{Feed, Post};
use feedpane_tui::ui::{DebugView, FeedView, LayoutManager, Pane, PostView, Styles, UI};
use feedpane_tui::{DiagnosticLog, DisplayOptions, LayoutError, Navigator, ScrollDirection, UiError};
use ratatui::{buffer::Buffer, layout::Rect};

fn pane(height: u16, width: u16) -> Pane {
    Pane::new(height, width, 0, 0, Rect::new(0, 0, width, height)).unwrap()
}

fn styles() -> Styles {
    Styles::new(&DisplayOptions::default())
}

fn interior(pane: &Pane) -> Vec<String> {
    (1..pane.height() - 1)
        .map(|y| {
            let line = pane.line(y);
            let inner: String = line.chars().skip(1).take(pane.width() as usize - 2).collect();
            inner.trim_end().to_string()
        })
        .collect()
}

fn feeds() -> Vec<Feed> {
    vec![
        Feed::new("Alpha", "", "", "First feed"),
        Feed::new("Beta", "", "", "Second feed"),
        Feed::new("", "", "", ""),
    ]
}

#[test]
fn test_feed_list_marks_selected_row() {
    let mut pane = pane(6, 30);
    FeedView::render_feed_list(&mut pane, &feeds(), Some(1), &styles()).unwrap();

    assert_eq!(interior(&pane), vec!["Alpha", "> Beta", "", ""]);
    assert!(pane.line(0).contains("Feeds"));
}

#[test]
fn test_feed_list_truncates_long_titles() {
    let mut pane = pane(4, 12);
    let feeds = vec![Feed::new("A very long feed title indeed", "", "", "")];
    FeedView::render_feed_list(&mut pane, &feeds, Some(0), &styles()).unwrap();

    assert_eq!(interior(&pane)[0], "> A very l");
    assert!(pane.line(1).ends_with('│'));
}

#[test]
fn test_feed_list_scrolls_to_keep_selection_visible() {
    let mut pane = pane(4, 20);
    let feeds: Vec<Feed> = (0..6).map(|i| Feed::new(format!("Feed {}", i), "", "", "")).collect();
    FeedView::render_feed_list(&mut pane, &feeds, Some(4), &styles()).unwrap();

    assert_eq!(interior(&pane), vec!["Feed 3", "> Feed 4"]);
}

#[test]
fn test_description_paragraphs_are_wrapped_and_separated() {
    let mut pane = pane(12, 20);
    let feed = Feed::new(
        "T",
        "",
        "",
        "  Para one.  Para two has many words that should wrap across lines.  ",
    );
    FeedView::render_description(&mut pane, Some(&feed), &DisplayOptions::default(), &styles()).unwrap();

    let rows = interior(&pane);
    assert_eq!(rows[0], "Para one.");
    assert_eq!(rows[1], "");
    assert!(!rows[2].is_empty());
    assert!(rows.iter().all(|r| r.chars().count() <= 18));

    let text: Vec<&str> = rows.iter().map(String::as_str).filter(|r| !r.is_empty()).collect();
    assert_eq!(
        text.join(" "),
        "Para one. Para two has many words that should wrap across lines."
    );
}

#[test]
fn test_description_overflow_is_clipped() {
    let mut pane = pane(4, 12);
    let feed = Feed::new("T", "", "", "one two three four five six seven eight nine ten");
    FeedView::render_description(&mut pane, Some(&feed), &DisplayOptions::default(), &styles()).unwrap();

    assert_eq!(interior(&pane), vec!["one two", "three four"]);
}

#[test]
fn test_description_without_paragraph_split() {
    let mut pane = pane(6, 40);
    let feed = Feed::new("T", "", "", "One.  Two.");
    let options = DisplayOptions {
        split_paragraphs: false,
        ..DisplayOptions::default()
    };
    FeedView::render_description(&mut pane, Some(&feed), &options, &styles()).unwrap();

    assert_eq!(interior(&pane)[0], "One. Two.");
    assert_eq!(interior(&pane)[1], "");
}

#[test]
fn test_post_list_with_header() {
    let mut pane = pane(5, 20);
    let posts = vec![Post::new("Dummy Post 1", "", ""), Post::new("Dummy Post 2", "", "")];
    PostView::render_post_list(&mut pane, &posts, Some(0), &styles()).unwrap();

    assert_eq!(interior(&pane), vec!["Posts:", "> Dummy Post 1", "Dummy Post 2"]);
}

#[test]
fn test_empty_post_list_draws_only_header() {
    let mut pane = pane(5, 20);
    PostView::render_post_list(&mut pane, &[], None, &styles()).unwrap();

    assert_eq!(interior(&pane), vec!["Posts:", "", ""]);
}

#[test]
fn test_post_content_starts_on_first_row() {
    let mut pane = pane(6, 30);
    let post = Post::new("Swarm season", "https://bees.example/1", "Spring swarms")
        .with_content("Bees swarm in spring.  Keep an eye on the hive.");
    PostView::render_post_content(&mut pane, Some(&post), &DisplayOptions::default(), &styles()).unwrap();

    assert_eq!(
        interior(&pane),
        vec!["Bees swarm in spring.", "", "Keep an eye on the hive.", ""]
    );
    assert!(pane.line(0).contains("Swarm season"));
}

#[test]
fn test_post_content_without_wrapping_is_clipped() {
    let mut pane = pane(4, 12);
    let post = Post::new("", "", "a fairly long description line");
    let options = DisplayOptions {
        wrap_post_content: false,
        ..DisplayOptions::default()
    };
    PostView::render_post_content(&mut pane, Some(&post), &options, &styles()).unwrap();

    assert_eq!(interior(&pane), vec!["a fairly l", ""]);
}

#[test]
fn test_debug_view_shows_latest_messages() {
    let mut pane = pane(5, 30);
    let log = DiagnosticLog::new();
    for i in 0..6 {
        log.append(format!("message {}", i));
    }

    DebugView::render(&mut pane, &log, None, &styles()).unwrap();
    assert_eq!(interior(&pane), vec!["message 3", "message 4", "message 5"]);

    DebugView::render(&mut pane, &log, Some(ScrollDirection::Up), &styles()).unwrap();
    assert_eq!(interior(&pane), vec!["message 2", "message 3", "message 4"]);
    assert!(pane.line(0).contains("Debug [3-5/6]"));

    DebugView::render(&mut pane, &log, None, &styles()).unwrap();
    assert_eq!(interior(&pane), vec!["message 3", "message 4", "message 5"]);
}

#[test]
fn test_views_survive_smallest_layout() {
    let mut panes = LayoutManager::compute_layout(6, 4).unwrap();
    let feeds = feeds();

    FeedView::render_feed_list(&mut panes.top, &feeds, Some(0), &styles()).unwrap();
    FeedView::render_description(&mut panes.middle, feeds.first(), &DisplayOptions::default(), &styles())
        .unwrap();
    PostView::render_post_list(&mut panes.top, &[], None, &styles()).unwrap();
    DebugView::render(&mut panes.bottom, &DiagnosticLog::new(), None, &styles()).unwrap();
}

#[test]
fn test_content_pass_reports_stale_pane_and_keeps_the_rest() {
    let mut panes = LayoutManager::compute_layout(30, 50).unwrap();
    let navigator = Navigator::new(feeds());
    let mut target = Buffer::empty(Rect::new(0, 0, 50, 10));

    let faults = UI::draw_content(&mut panes, &navigator, &DisplayOptions::default(), &styles(), &mut target);

    // Middle pane starts at row 7 and runs past the 10-row frame
    assert_eq!(faults.len(), 1);
    assert!(matches!(faults[0], UiError::Layout(LayoutError::OutOfScreen { y: 7, .. })));

    let row: String = (0..50).map(|x| target.content[target.index_of(x, 1)].symbol()).collect();
    assert!(row.starts_with("│> Alpha"));
}
