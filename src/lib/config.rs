//! Build-time configuration for the identity API endpoint and the redirect
//! URLs embedded in recovery/verification emails, with an optional runtime
//! override. The runtime config is read from `window.GLIMMER_CONFIG` (if
//! present) so static deployments can change endpoints without rebuilding.
//! Configuration values are public; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub reset_redirect_url: String,
    pub verification_redirect_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("GLIMMER_API_BASE_URL").unwrap_or("");
        let reset_redirect_url =
            option_env!("GLIMMER_RESET_REDIRECT_URL").unwrap_or("/reset-password");
        let verification_redirect_url =
            option_env!("GLIMMER_VERIFICATION_REDIRECT_URL").unwrap_or("/verification");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            reset_redirect_url: reset_redirect_url.to_string(),
            verification_redirect_url: verification_redirect_url.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    reset_redirect_url: Option<String>,
    verification_redirect_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.reset_redirect_url {
        config.reset_redirect_url = value;
    }
    if let Some(value) = runtime.verification_redirect_url {
        config.verification_redirect_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("GLIMMER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        reset_redirect_url: read_runtime_value(&object, "reset_redirect_url"),
        verification_redirect_url: read_runtime_value(&object, "verification_redirect_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.glimmer.pics "),
            Some("https://api.glimmer.pics".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            reset_redirect_url: "/reset-password".to_string(),
            verification_redirect_url: "/verification".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            reset_redirect_url: normalize_runtime_value("  "),
            verification_redirect_url: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.reset_redirect_url, "/reset-password");
        assert_eq!(config.verification_redirect_url, "/verification");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            reset_redirect_url: "/reset-password".to_string(),
            verification_redirect_url: "/verification".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            reset_redirect_url: normalize_runtime_value("https://app.override/reset"),
            verification_redirect_url: normalize_runtime_value("https://app.override/verify"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.reset_redirect_url, "https://app.override/reset");
        assert_eq!(config.verification_redirect_url, "https://app.override/verify");
    }
}
