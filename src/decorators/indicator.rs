use crate::callbacks::{add_callback_code, CallbackCode};
use crate::config::{Environment, RemoteIndicatorConfig};
use crate::decorators::Decorator;
use crate::error::{RemoteError, RemoteResult};
use crate::javascript::{guard_indicator, hide_element, show_element};
use crate::options::{OptionValue, OptionsBag};

pub const INDICATOR: &str = "indicator";

/// The resolved `indicator` option
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorSetting {
    Enabled(String),
    Disabled,
}

impl IndicatorSetting {
    /// Resolve a raw option value. Absent or `true` selects `default_id`.
    pub fn from_option(value: Option<OptionValue>, default_id: &str) -> RemoteResult<Self> {
        match value {
            None | Some(OptionValue::Bool(true)) => Ok(IndicatorSetting::Enabled(default_id.to_string())),
            Some(OptionValue::Bool(false)) => Ok(IndicatorSetting::Disabled),
            Some(OptionValue::String(id)) if id.trim().is_empty() => {
                Err(RemoteError::InvalidOptionValue {
                    key: INDICATOR.to_string(),
                    reason: "indicator id must not be empty; pass false to disable the indicator"
                        .to_string(),
                })
            }
            Some(OptionValue::String(id)) => Ok(IndicatorSetting::Enabled(id)),
            Some(other) => Err(RemoteError::InvalidOptionType {
                key: INDICATOR.to_string(),
                expected: format!("string id or false, got {}", other.type_name()),
            }),
        }
    }
}

/// Shows an indicator element before the call and hides it on completion
#[derive(Debug, Clone)]
pub struct IndicatorDecorator {
    default_id: String,
    environment: Environment,
}

impl IndicatorDecorator {
    pub fn new(default_id: impl Into<String>, environment: Environment) -> Self {
        Self {
            default_id: default_id.into(),
            environment,
        }
    }

    pub fn from_config(config: &RemoteIndicatorConfig, environment: Environment) -> Self {
        Self::new(config.default_id.clone(), environment)
    }

    /// Fragments for an enabled indicator
    pub fn callback_code(&self, id: &str) -> CallbackCode {
        let show = show_element(id);
        let before = if self.environment.is_development() {
            guard_indicator(&show, id)
        } else {
            show
        };
        CallbackCode {
            before,
            complete: hide_element(id),
        }
    }
}

impl Decorator for IndicatorDecorator {
    fn name(&self) -> &'static str {
        "indicator"
    }

    fn apply(&self, mut bag: OptionsBag) -> RemoteResult<OptionsBag> {
        let raw = bag.take_control_option(INDICATOR)?;
        match IndicatorSetting::from_option(raw, &self.default_id)? {
            IndicatorSetting::Disabled => {
                tracing::debug!("indicator disabled by caller");
            }
            IndicatorSetting::Enabled(id) => {
                tracing::debug!(indicator = %id, "injecting indicator callbacks");
                add_callback_code(&mut bag, &self.callback_code(&id))?;
            }
        }
        Ok(bag)
    }
}
