use super::*;

pub(crate) fn run() -> Result<(), eframe::Error> {
    init_tracing();

    let config = match config_from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid command line");
            eprintln!("NetFX startup error: {error}");
            return Ok(());
        }
    };
    tracing::info!(
        location = %config.start_location,
        site_name = %config.site_name,
        "starting browser"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.site_name.as_str())
            .with_inner_size(config.window_size)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(BrowserUiApp::new(config)))),
    )
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber installed by an embedding process wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// `netfx-browser [--site-name NAME] [--window-size WxH] [LOCATION]`
pub(super) fn config_from_args<I>(args: I) -> Result<BrowserConfig, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = BrowserConfig::default();
    let mut location: Option<String> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--site-name" => {
                let name = args
                    .next()
                    .ok_or_else(|| "missing value after --site-name".to_owned())?;
                if name.trim().is_empty() {
                    return Err("--site-name must not be empty".to_owned());
                }
                config.site_name = name;
            }
            "--window-size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --window-size".to_owned())?;
                config.window_size = parse_window_size(&value)
                    .ok_or_else(|| format!("invalid window size `{value}` (expected WxH)"))?;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unsupported option `{flag}`"));
            }
            _ => {
                if location.is_some() {
                    return Err(format!("unexpected extra location `{arg}`"));
                }
                location = Some(arg);
            }
        }
    }

    if let Some(location) = location {
        config.start_location = location;
    }
    Ok(config)
}

pub(super) fn parse_window_size(input: &str) -> Option<[f32; 2]> {
    let (width, height) = input.split_once(['x', 'X'])?;
    let width: f32 = width.trim().parse().ok()?;
    let height: f32 = height.trim().parse().ok()?;
    (width >= MIN_WINDOW_SIZE[0] && height >= MIN_WINDOW_SIZE[1]).then_some([width, height])
}
