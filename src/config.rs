use wasm_bindgen::JsValue;

use crate::store::SupabaseStore;

const URL_GLOBAL: &str = "QUARTERLY_SUPABASE_URL";
const ANON_KEY_GLOBAL: &str = "QUARTERLY_SUPABASE_ANON_KEY";

const URL_PLACEHOLDER: &str = "YOUR_SUPABASE_URL";
const ANON_KEY_PLACEHOLDER: &str = "YOUR_SUPABASE_ANON_KEY";

/// Store credentials supplied by the hosting page as window globals.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub url: String,
    pub anon_key: String,
}

impl StoreSettings {
    /// Reads `window.QUARTERLY_SUPABASE_URL` and
    /// `window.QUARTERLY_SUPABASE_ANON_KEY`. Absent globals fall back to the
    /// placeholders, which keeps the page in degraded mode.
    pub fn from_window() -> Self {
        Self {
            url: window_global(URL_GLOBAL).unwrap_or_else(|| URL_PLACEHOLDER.to_string()),
            anon_key: window_global(ANON_KEY_GLOBAL)
                .unwrap_or_else(|| ANON_KEY_PLACEHOLDER.to_string()),
        }
    }

    /// Empty or placeholder credentials mean the waitlist store cannot be
    /// reached; validation still runs but no call is attempted.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
            && !self.anon_key.is_empty()
            && !self.url.contains(URL_PLACEHOLDER)
            && !self.anon_key.contains(ANON_KEY_PLACEHOLDER)
    }

    pub fn client(&self) -> Option<SupabaseStore> {
        if self.is_configured() {
            Some(SupabaseStore::new(self))
        } else {
            log::error!("waitlist store is not configured; add the Supabase window globals");
            None
        }
    }
}

fn window_global(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str, anon_key: &str) -> StoreSettings {
        StoreSettings {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    #[test]
    fn real_credentials_are_configured() {
        let settings = settings("https://abc.supabase.co", "anon-key-123");
        assert!(settings.is_configured());
    }

    #[test]
    fn placeholder_url_is_not_configured() {
        let settings = settings("YOUR_SUPABASE_URL", "anon-key-123");
        assert!(!settings.is_configured());
    }

    #[test]
    fn placeholder_anon_key_is_not_configured() {
        let settings = settings("https://abc.supabase.co", "YOUR_SUPABASE_ANON_KEY");
        assert!(!settings.is_configured());
    }

    #[test]
    fn empty_values_are_not_configured() {
        assert!(!settings("", "anon-key-123").is_configured());
        assert!(!settings("https://abc.supabase.co", "").is_configured());
    }
}
