use sitetree::config::ViewerConfig;
use sitetree_web::CrawlApp;
use tracing::error;

fn start() -> sitetree::Result<()> {
    let window = web_sys::window().ok_or_else(|| sitetree::Error::Js("no window".to_string()))?;
    let config = CrawlApp::page_config(&window).unwrap_or_else(|err| {
        error!(error = %err, "invalid page config, using defaults");
        ViewerConfig::default()
    });
    CrawlApp::mount(&window, &config)?.leak();
    Ok(())
}

pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = start() {
        error!(error = %err, "crawl viewer failed to start");
    }
}
