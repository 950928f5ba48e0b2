//! External URL launching

use super::ServiceError;

/// Opens URLs in whatever the host considers the default handler
pub trait UrlLauncher {
    /// Hand a URL to the host
    fn open_url(&mut self, url: &str) -> Result<(), ServiceError>;
}

/// Check that a URL has a scheme (`https:`, `mailto:`, ...) and a body
pub fn validate_url(url: &str) -> Result<(), ServiceError> {
    let invalid = || ServiceError::InvalidUrl(url.to_string());

    let (scheme, rest) = url.split_once(':').ok_or_else(invalid)?;
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let scheme_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !starts_alpha || !scheme_ok || rest.trim().is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// Launcher for hosts without a browser; records and logs each URL
#[derive(Debug, Default)]
pub struct LogUrlLauncher {
    opened: Vec<String>,
}

impl LogUrlLauncher {
    /// URLs opened so far
    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl UrlLauncher for LogUrlLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), ServiceError> {
        validate_url(url)?;
        log::info!("Open URL requested: {url}");
        self.opened.push(url.to_string());
        Ok(())
    }
}
