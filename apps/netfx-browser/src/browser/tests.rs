use super::source::{
    decode_html, load_markup, normalize_location, parse_charset_from_html_prefix, resolve_link,
};
use super::startup::{config_from_args, parse_window_size};
use super::{BrowserConfig, BrowserUiApp, History, RendererProcess, WELCOME_PAGE, WELCOME_URL};
use std::path::Path;
use url::Url;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn defaults_to_welcome_page_without_arguments() {
    let config = config_from_args(args(&[])).expect("empty args");
    assert_eq!(config, BrowserConfig::default());
    assert_eq!(config.start_location, WELCOME_URL);
    assert_eq!(config.site_name, "NetFX");
}

#[test]
fn parses_site_name_size_and_location() {
    let config = config_from_args(args(&[
        "--site-name",
        "Lab",
        "--window-size",
        "800x600",
        "docs/index.html",
    ]))
    .expect("valid args");
    assert_eq!(config.site_name, "Lab");
    assert_eq!(config.window_size, [800.0, 600.0]);
    assert_eq!(config.start_location, "docs/index.html");
}

#[test]
fn rejects_bad_arguments() {
    assert!(config_from_args(args(&["--site-name"])).is_err());
    assert!(config_from_args(args(&["--site-name", "  "])).is_err());
    assert!(config_from_args(args(&["--verbose"])).is_err());
    assert!(config_from_args(args(&["a.html", "b.html"])).is_err());
}

#[test]
fn window_size_requires_sane_dimensions() {
    assert_eq!(parse_window_size("1280X720"), Some([1280.0, 720.0]));
    assert_eq!(parse_window_size("10x10"), None);
    assert_eq!(parse_window_size("wide"), None);
}

#[test]
fn relative_paths_resolve_against_working_directory() {
    let cwd = std::env::temp_dir();
    let url = normalize_location("pages/home.html", &cwd).expect("file url");
    assert_eq!(url.scheme(), "file");
    let path = url.to_file_path().expect("local path");
    assert_eq!(path, cwd.join("pages/home.html"));
}

#[test]
fn urls_and_empty_input_are_kept_as_urls() {
    let cwd = Path::new("/");
    let url = normalize_location("https://example.com/a", cwd).expect("url");
    assert_eq!(url.as_str(), "https://example.com/a");

    let welcome = normalize_location("   ", cwd).expect("welcome");
    assert_eq!(welcome.as_str(), WELCOME_URL);
}

#[test]
fn network_locations_have_no_source() {
    let url = Url::parse("https://example.com/").expect("url");
    let error = load_markup(&url).expect_err("no transport");
    assert_eq!(error.code, "source.unavailable");

    let ftp = Url::parse("ftp://example.com/file.html").expect("url");
    assert!(load_markup(&ftp).is_err());
}

#[test]
fn serves_welcome_page() {
    let url = Url::parse(WELCOME_URL).expect("url");
    assert_eq!(load_markup(&url).expect("welcome page"), WELCOME_PAGE);
}

#[test]
fn reads_local_files() {
    let path = std::env::temp_dir().join(format!("netfx-source-{}.html", std::process::id()));
    std::fs::write(&path, "<p>local</p>").expect("write fixture");

    let url = Url::from_file_path(&path).expect("file url");
    let markup = load_markup(&url);
    let _ = std::fs::remove_file(&path);
    assert_eq!(markup.expect("readable file"), "<p>local</p>");
}

#[test]
fn missing_files_are_reported() {
    let path = std::env::temp_dir().join("netfx-does-not-exist.html");
    let url = Url::from_file_path(&path).expect("file url");
    let error = load_markup(&url).expect_err("missing file");
    assert_eq!(error.code, "source.unavailable");
}

#[test]
fn prefers_meta_charset_for_html() {
    let html = "<html><head><meta charset=\"UTF-8\"></head><body>hello</body></html>";
    let parsed = parse_charset_from_html_prefix(html.as_bytes());
    assert_eq!(parsed.as_deref(), Some("UTF-8"));

    let http_equiv = "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">";
    let parsed = parse_charset_from_html_prefix(http_equiv.as_bytes());
    assert_eq!(parsed.as_deref(), Some("windows-1252"));
}

#[test]
fn decodes_using_meta_charset() {
    let html = b"<meta charset=\"windows-1252\"><p>caf\xE9</p>";
    assert!(decode_html(html).contains("caf\u{e9}"));
}

#[test]
fn byte_order_mark_wins_over_meta_charset() {
    let mut html = vec![0xEF, 0xBB, 0xBF];
    html.extend_from_slice("<meta charset=\"windows-1252\"><p>\u{20AC}</p>".as_bytes());
    let decoded = decode_html(&html);
    assert!(decoded.starts_with("<meta"));
    assert!(decoded.contains('\u{20AC}'));
}

#[test]
fn falls_back_to_lossy_utf8() {
    let decoded = decode_html(b"<p>ok \xFF</p>");
    assert!(decoded.contains("ok"));
    assert!(decoded.contains('\u{FFFD}'));
}

#[test]
fn resolves_links_against_current_page() {
    let base = Url::parse("file:///srv/site/index.html").expect("url");
    let next = resolve_link(&base, "docs/next.html").expect("relative link");
    assert_eq!(next.as_str(), "file:///srv/site/docs/next.html");

    let absolute = resolve_link(&base, " about:netfx ").expect("absolute link");
    assert_eq!(absolute.as_str(), WELCOME_URL);
}

fn step(history: &mut History, target: Option<(usize, String)>) -> Option<String> {
    let (index, url) = target?;
    history.select(index);
    Some(url)
}

#[test]
fn history_truncates_forward_entries_on_new_navigation() {
    let mut history = History::default();
    assert!(!history.can_go_back());

    history.push("a".to_owned());
    history.push("b".to_owned());
    history.push("b".to_owned());
    history.push("c".to_owned());
    assert_eq!(history.entries.len(), 3);

    let target = history.back_target();
    assert_eq!(step(&mut history, target).as_deref(), Some("b"));
    assert!(history.can_go_forward());
    history.push("d".to_owned());
    assert!(!history.can_go_forward());
    assert_eq!(history.entries, ["a", "b", "d"]);

    let target = history.back_target();
    assert_eq!(step(&mut history, target).as_deref(), Some("b"));
    let target = history.back_target();
    assert_eq!(step(&mut history, target).as_deref(), Some("a"));
    assert_eq!(history.back_target(), None);
    let target = history.forward_target();
    assert_eq!(step(&mut history, target).as_deref(), Some("b"));
}

#[test]
fn history_targets_do_not_move_the_index() {
    let mut history = History::default();
    history.push("a".to_owned());
    history.push("b".to_owned());

    assert_eq!(history.back_target(), Some((0, "a".to_owned())));
    assert_eq!(history.index, Some(1));
    assert_eq!(history.forward_target(), None);
}

#[test]
fn failed_back_navigation_keeps_current_entry() {
    let path = std::env::temp_dir().join(format!("netfx-history-{}.html", std::process::id()));
    std::fs::write(&path, "<p>first</p>").expect("write fixture");

    let config = BrowserConfig {
        start_location: path.display().to_string(),
        ..BrowserConfig::default()
    };
    let mut app = BrowserUiApp::new(config);
    assert!(app.navigate(WELCOME_URL, true));
    assert_eq!(app.history.index, Some(1));

    std::fs::remove_file(&path).expect("remove fixture");
    app.navigate_back();

    assert_eq!(app.history.index, Some(1));
    assert!(app.history.can_go_back());
    assert!(app.last_error.is_some());
    let shown = app.page_view.as_ref().map(|page| page.url.as_str());
    assert_eq!(shown, Some(WELCOME_URL));
}

#[test]
fn welcome_page_renders_with_title_and_link() {
    let mut renderer = RendererProcess::default();
    let frame = renderer.render_document(WELCOME_PAGE, 600.0);
    assert!(frame.draw_calls() > 0);
    assert_eq!(renderer.page().title(), Some("NetFX - Welcome"));
}
