use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose};
use headless_chrome::Tab;
use headless_chrome::{Browser, LaunchOptions, protocol::cdp::Page};
use parking_lot::Mutex;
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use crate::core::request::FileType;

pub const VIEWPORT_WIDTH: u32 = 2048;
pub const VIEWPORT_HEIGHT: u32 = 1170;

const READY_SELECTOR: &str = ".heading";
const READY_TIMEOUT: Duration = Duration::from_secs(10);

struct TabGuard {
    tab: Arc<Tab>,
}

impl TabGuard {
    fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    fn as_ref(&self) -> &Arc<Tab> {
        &self.tab
    }
}

impl Drop for TabGuard {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(true) {
            tracing::warn!("Failed to close tab during cleanup: {}", e);
        } else {
            tracing::debug!("Tab closed successfully");
        }
    }
}

/// Screenshots card documents with a shared headless Chrome.
///
/// The browser is launched on first use and relaunched when a health probe
/// fails.
#[derive(Clone)]
pub struct RenderingEngine {
    browser: Arc<Mutex<Option<Browser>>>,
    launch_options: LaunchOptions<'static>,
}

impl RenderingEngine {
    pub fn new() -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .window_size(Some((VIEWPORT_WIDTH, VIEWPORT_HEIGHT)))
            .args(vec![
                OsStr::new("--no-sandbox"),
                OsStr::new("--disable-setuid-sandbox"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-extensions"),
                OsStr::new("--disable-sync"),
                OsStr::new("--mute-audio"),
                OsStr::new("--no-first-run"),
                OsStr::new("--disable-default-apps"),
                OsStr::new("--hide-scrollbars"),
            ])
            .build()
            .map_err(|e| anyhow!("Invalid browser launch options: {}", e))?;

        Ok(Self {
            browser: Arc::new(Mutex::new(None)),
            launch_options,
        })
    }

    pub fn is_browser_running(&self) -> bool {
        self.browser.lock().is_some()
    }

    fn get_or_create_browser(&self) -> Result<Browser> {
        let mut browser_lock = self.browser.lock();

        if let Some(ref browser) = *browser_lock {
            match browser.new_tab() {
                Ok(tab) => {
                    let _ = tab.close(true);
                    return Ok(browser.clone());
                }
                Err(_) => {
                    tracing::warn!("Browser health check failed, recreating");
                    *browser_lock = None;
                }
            }
        }

        tracing::info!("Launching headless browser");
        let new_browser = Browser::new(self.launch_options.clone())?;
        *browser_lock = Some(new_browser.clone());

        Ok(new_browser)
    }

    pub async fn render(&self, html: String, file_type: FileType) -> Result<Vec<u8>> {
        let engine = self.clone();

        tokio::task::spawn_blocking(move || engine.render_sync(&html, file_type))
            .await
            .map_err(|e| anyhow!("Task join error: {}", e))?
    }

    fn render_sync(&self, html: &str, file_type: FileType) -> Result<Vec<u8>> {
        let browser = self.get_or_create_browser().or_else(|e| {
            tracing::warn!("First browser creation failed: {}, retrying...", e);
            *self.browser.lock() = None;
            self.get_or_create_browser()
        })?;
        let tab = browser.new_tab()?;
        let tab_guard = TabGuard::new(tab);
        let tab = tab_guard.as_ref();

        tab.set_bounds(headless_chrome::types::Bounds::Normal {
            left: Some(0),
            top: Some(0),
            width: Some(VIEWPORT_WIDTH as f64),
            height: Some(VIEWPORT_HEIGHT as f64),
        })?;

        let data_url = format!(
            "data:text/html;base64,{}",
            general_purpose::STANDARD.encode(html)
        );
        tab.navigate_to(&data_url)?;
        tab.wait_until_navigated()?;
        tab.wait_for_element_with_custom_timeout(READY_SELECTOR, READY_TIMEOUT)?;

        let format = match file_type {
            FileType::Png => Page::CaptureScreenshotFormatOption::Png,
            FileType::Jpeg => Page::CaptureScreenshotFormatOption::Jpeg,
        };
        let bytes = tab.capture_screenshot(format, None, None, true)?;
        tracing::debug!("Captured {} bytes as {}", bytes.len(), file_type.mime_type());

        Ok(bytes)
    }
}
