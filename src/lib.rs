//! # Remote Helpers
//!
//! Busy indicators and double-submit protection for remote (AJAX) actions.
//!
//! ## Features
//! - Shows an indicator element while a remote call is in flight
//! - Disables the submitting form, or a named form, until the call completes
//! - Keeps any `before`/`complete` code the caller already supplied
//! - Explicit opt-outs: `indicator: false`, `disable_form: false`
//! - Markup helper for the indicator image
//!
//! ## Example
//! ```ignore
//! use remote_helpers::{Environment, OptionsBag, RemoteHelpers, RemoteIndicatorConfig};
//!
//! let helpers = RemoteHelpers::new(RemoteIndicatorConfig::default(), Environment::Production);
//! let call = helpers.remote_function(
//!     OptionsBag::new()
//!         .with("url", "/do")
//!         .with("submit", "myform")
//!         .with("indicator", "spinner"),
//! )?;
//!
//! assert_eq!(
//!     call.options.get_str("before")?,
//!     Some("Element.show('spinner');Form.disable('myform')")
//! );
//! ```

pub mod actions;
pub mod callbacks;
pub mod config;
pub mod decorators;
pub mod error;
pub mod javascript;
pub mod markup;
pub mod options;

// --- Core types ---
pub use actions::{ActionKind, RemoteCall, RemoteHelpers, RemoteRenderer};
pub use callbacks::{add_callback_code, inject_callback, CallbackCode, CallbackEvent};
pub use config::{configure, Environment, RemoteIndicatorConfig};
pub use decorators::{
    Decorator, FormDisableDecorator, IndicatorDecorator, IndicatorSetting, Pipeline,
    SubmitDisableDecorator,
};
pub use error::{RemoteError, RemoteResult};
pub use markup::{ImageTagRenderer, MarkupRenderer};
pub use options::{OptionValue, OptionsBag};

/// Decorate a generic remote call with the process-wide defaults
pub fn remote_function(options: OptionsBag) -> RemoteResult<RemoteCall> {
    RemoteHelpers::global()?.remote_function(options)
}

/// Decorate a form-producing remote call with the process-wide defaults
pub fn form_remote_tag(options: OptionsBag) -> RemoteResult<RemoteCall> {
    RemoteHelpers::global()?.form_remote_tag(options)
}

/// Decorate a named-submit remote call with the process-wide defaults
pub fn submit_to_remote(name: &str, value: &str, options: OptionsBag) -> RemoteResult<RemoteCall> {
    RemoteHelpers::global()?.submit_to_remote(name, value, options)
}

/// Indicator image markup with the process-wide defaults
pub fn indicator(options: OptionsBag) -> RemoteResult<String> {
    markup::indicator(options, config::config(), &ImageTagRenderer::default())
}
