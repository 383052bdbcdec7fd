//! Markup for the indicator element itself.

use std::fmt::Write;

use crate::callbacks::join_fragments;
use crate::config::RemoteIndicatorConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::options::{OptionValue, OptionsBag};

pub const HIDE: &str = "hide";
const HIDDEN_STYLE: &str = "display:none";

/// Renders the visual element for an indicator
pub trait MarkupRenderer {
    fn render_indicator(&self, image: &str, attributes: &OptionsBag) -> RemoteResult<String>;
}

/// Renders the indicator as an `<img>` tag
#[derive(Debug, Clone)]
pub struct ImageTagRenderer {
    /// Prefix for relative image references
    pub asset_path: String,
}

impl Default for ImageTagRenderer {
    fn default() -> Self {
        Self {
            asset_path: "/images".to_string(),
        }
    }
}

impl ImageTagRenderer {
    pub fn image_src(&self, image: &str) -> String {
        if image.starts_with('/') || image.contains("://") {
            image.to_string()
        } else {
            format!("{}/{}", self.asset_path.trim_end_matches('/'), image)
        }
    }
}

impl MarkupRenderer for ImageTagRenderer {
    fn render_indicator(&self, image: &str, attributes: &OptionsBag) -> RemoteResult<String> {
        let mut attrs = attributes.clone();
        attrs.merge_default("alt", image_alt(image));
        attrs.insert("src", self.image_src(image));

        let mut out = String::from("<img");
        for (key, value) in attrs.iter() {
            write_attribute(&mut out, key, value)?;
        }
        out.push_str(" />");
        Ok(out)
    }
}

/// Build the indicator markup.
///
/// `id` defaults to the configured indicator id. Unless `hide: false` is
/// passed, `display:none` is appended to `style` so the element starts hidden.
pub fn indicator(
    mut options: OptionsBag,
    config: &RemoteIndicatorConfig,
    renderer: &impl MarkupRenderer,
) -> RemoteResult<String> {
    options.merge_default("id", config.default_id.as_str());
    options.merge_default(HIDE, true);

    if options.take_bool(HIDE, true)? {
        let style = options.get_str("style")?.unwrap_or_default();
        let style = join_fragments([style, HIDDEN_STYLE]);
        options.insert("style", style);
    }

    renderer.render_indicator(&config.default_image, &options)
}

/// Alt text from the image file stem, e.g. `indicator.gif` -> `Indicator`
fn image_alt(image: &str) -> String {
    let file = image.rsplit('/').next().unwrap_or(image);
    let stem = file.split('.').next().unwrap_or(file);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_attribute(out: &mut String, key: &str, value: &OptionValue) -> RemoteResult<()> {
    let result = match value {
        OptionValue::String(s) => write!(out, " {}=\"{}\"", key, escape_html(s)),
        OptionValue::Bool(true) => write!(out, " {0}=\"{0}\"", key),
        OptionValue::Bool(false) => Ok(()),
        OptionValue::Map(entries) => {
            for (sub_key, sub_value) in entries {
                write_attribute(out, &format!("{}-{}", key, sub_key), sub_value)?;
            }
            Ok(())
        }
    };
    result.map_err(|e| RemoteError::RenderError(e.to_string()))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn render(options: OptionsBag) -> String {
        indicator(options, &RemoteIndicatorConfig::default(), &ImageTagRenderer::default()).unwrap()
    }

    #[test]
    fn test_default_indicator() {
        assert_eq!(
            render(OptionsBag::new()),
            "<img alt=\"Indicator\" id=\"indicator\" src=\"/images/indicator.gif\" style=\"display:none\" />"
        );
    }

    #[test]
    fn test_custom_id_and_style() {
        let html = render(
            OptionsBag::new()
                .with("id", "spinner")
                .with("style", "float:right"),
        );
        assert!(html.contains(" id=\"spinner\""));
        assert!(html.contains(" style=\"float:right;display:none\""));
    }

    #[test]
    fn test_hide_false_keeps_visible() {
        let html = render(OptionsBag::new().with("hide", false));
        assert!(!html.contains("display:none"));
        assert!(!html.contains("hide"));
    }

    #[test]
    fn test_configured_image() {
        let config = RemoteIndicatorConfig::new("spinner.gif", "spinner");
        let html = indicator(OptionsBag::new(), &config, &ImageTagRenderer::default()).unwrap();
        assert!(html.contains(" src=\"/images/spinner.gif\""));
        assert!(html.contains(" alt=\"Spinner\""));
        assert!(html.contains(" id=\"spinner\""));
    }

    #[test]
    fn test_absolute_image_untouched() {
        let renderer = ImageTagRenderer::default();
        assert_eq!(renderer.image_src("/assets/busy.gif"), "/assets/busy.gif");
        assert_eq!(
            renderer.image_src("https://cdn.example.com/busy.gif"),
            "https://cdn.example.com/busy.gif"
        );
    }

    #[test]
    fn test_attributes_escaped_and_nested() {
        let mut data = BTreeMap::new();
        data.insert("role".to_string(), OptionValue::from("busy"));
        let html = render(
            OptionsBag::new()
                .with("title", "Loading \"data\"")
                .with("data", data),
        );
        assert!(html.contains(" title=\"Loading &quot;data&quot;\""));
        assert!(html.contains(" data-role=\"busy\""));
    }

    #[test]
    fn test_image_alt() {
        assert_eq!(image_alt("indicator.gif"), "Indicator");
        assert_eq!(image_alt("/img/ajax-loader.png"), "Ajax-loader");
    }
}
