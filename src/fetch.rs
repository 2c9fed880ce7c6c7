// src/fetch.rs
//
// Page fetching through a headless Chromium instance. baseball-reference
// sits behind a Cloudflare JavaScript challenge, so a plain HTTP GET returns
// the challenge page; a real browser engine has to run it and settle before
// the document is worth capturing.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

pub const TEAM_RECORD_URL: &str = "https://www.baseball-reference.com/teams/{team_code}/";

/// Grace period after navigation for outstanding requests to drain.
const NETWORK_IDLE_GRACE: Duration = Duration::from_millis(1500);

/// Build a team's record-page URL from the fixed template.
pub fn team_record_url(team_code: &str) -> String {
    TEAM_RECORD_URL.replace("{team_code}", team_code)
}

/// Fetch the fully rendered markup of `url`.
///
/// Launches a disposable headless browser, opens one page, waits for the
/// network to go idle, and captures the document. Browser and page are torn
/// down on every exit path; nothing is reused across calls.
pub async fn fetch_page(url: &str) -> Result<String> {
    let url = Url::parse(url).with_context(|| format!("invalid page URL: {url}"))?;

    let config = BrowserConfig::builder()
        .no_sandbox()
        .arg("--headless=new")
        .arg("--disable-gpu")
        .arg("--disable-dev-shm-usage")
        .arg("--mute-audio")
        .window_size(1920, 1080)
        .build()
        .map_err(|e| anyhow!("failed to build browser config: {e}"))?;

    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .context("failed to launch headless browser")?;

    // CDP event pump; must keep running for the browser to respond.
    let pump = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let result = capture(&browser, url.as_str()).await;

    let _ = browser.close().await;
    let _ = browser.wait().await;
    pump.abort();

    result
}

async fn capture(browser: &Browser, url: &str) -> Result<String> {
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| ScrapeError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    let result = capture_content(&page, url).await;
    let _ = page.close().await;
    result
}

async fn capture_content(page: &Page, url: &str) -> Result<String> {
    page.wait_for_navigation()
        .await
        .map_err(|e| ScrapeError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    // Let the challenge script and any late XHRs finish.
    tokio::time::sleep(NETWORK_IDLE_GRACE).await;

    let markup = page
        .content()
        .await
        .with_context(|| format!("failed to capture rendered content of {url}"))?;
    debug!(url, bytes = markup.len(), "captured page");
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_template_substitutes_team_code() {
        assert_eq!(
            team_record_url("ANA"),
            "https://www.baseball-reference.com/teams/ANA/"
        );
    }

    #[test]
    fn built_urls_parse() {
        for code in ["ANA", "NYY", "WSN"] {
            assert!(Url::parse(&team_record_url(code)).is_ok());
        }
    }
}
