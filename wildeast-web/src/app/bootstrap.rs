use once_cell::sync::Lazy;
use wildeast_tours::{BootError, EmbeddedData, Site};

static SITE: Lazy<Result<Site, BootError>> = Lazy::new(boot_embedded);

/// Recipient baked in at build time, replacing the one in `contact.json`.
#[must_use]
pub fn recipient_override() -> Option<&'static str> {
    option_env!("WILDEAST_WHATSAPP_NUMBER").filter(|value| !value.is_empty())
}

fn boot_embedded() -> Result<Site, BootError> {
    let result = Site::boot(&EmbeddedData, recipient_override());
    if let Err(err) = &result {
        log::error!("landing page cannot start: {err}");
        #[cfg(target_arch = "wasm32")]
        crate::dom::console_error(&format!("Wild East tours failed to start: {err}"));
    }
    result
}

/// Boot result for this page load, computed once.
///
/// # Errors
///
/// Returns the boot error when the embedded catalog or contact configuration
/// is invalid. No carousel is rendered in that case.
pub fn site() -> Result<&'static Site, &'static BootError> {
    SITE.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_boot() {
        let site = site().unwrap();
        assert!(site.catalog().len().get() >= 1);
    }

    #[test]
    fn repeated_calls_share_one_site() {
        let first = site().unwrap();
        let second = site().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
