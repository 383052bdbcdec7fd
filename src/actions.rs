use serde::{Deserialize, Serialize};

use crate::config::{self, Environment, RemoteIndicatorConfig};
use crate::decorators::{
    FormDisableDecorator, IndicatorDecorator, Pipeline, SubmitDisableDecorator,
};
use crate::error::{RemoteError, RemoteResult};
use crate::markup::{self, MarkupRenderer};
use crate::options::OptionsBag;

/// The kind of remote action being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A bare remote call, optionally submitting a named form
    RemoteFunction,
    /// A form tag that submits itself remotely
    FormRemoteTag,
    /// A submit button posting a named form remotely
    SubmitToRemote,
}

impl ActionKind {
    pub fn parse(value: &str) -> RemoteResult<Self> {
        match value {
            "remote_function" => Ok(ActionKind::RemoteFunction),
            "form_remote_tag" => Ok(ActionKind::FormRemoteTag),
            "submit_to_remote" => Ok(ActionKind::SubmitToRemote),
            _ => Err(RemoteError::UnknownActionKind {
                value: value.to_string(),
            }),
        }
    }
}

/// A decorated remote action, ready for a [`RemoteRenderer`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteCall {
    pub kind: ActionKind,
    /// Button name, for [`ActionKind::SubmitToRemote`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Button label, for [`ActionKind::SubmitToRemote`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub options: OptionsBag,
}

/// Turns a decorated call into page code (the AJAX layer)
pub trait RemoteRenderer {
    fn render(&self, call: &RemoteCall) -> RemoteResult<String>;
}

/// Entry points for building remote actions with indicator and form-disable
/// callbacks injected.
#[derive(Debug, Clone)]
pub struct RemoteHelpers {
    config: RemoteIndicatorConfig,
    environment: Environment,
}

impl RemoteHelpers {
    pub fn new(config: RemoteIndicatorConfig, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Helpers using the process-wide defaults and `REMOTE_HELPERS_ENV`
    pub fn global() -> RemoteResult<Self> {
        Ok(Self::new(config::config().clone(), Environment::from_env()?))
    }

    pub fn config(&self) -> &RemoteIndicatorConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The decorators applied for `kind`, in order
    pub fn pipeline(&self, kind: ActionKind) -> Pipeline {
        let indicator = IndicatorDecorator::from_config(&self.config, self.environment);
        match kind {
            ActionKind::RemoteFunction | ActionKind::SubmitToRemote => {
                Pipeline::new().then(SubmitDisableDecorator).then(indicator)
            }
            ActionKind::FormRemoteTag => Pipeline::new().then(FormDisableDecorator).then(indicator),
        }
    }

    pub fn remote_function(&self, options: OptionsBag) -> RemoteResult<RemoteCall> {
        self.build(ActionKind::RemoteFunction, None, None, options)
    }

    pub fn form_remote_tag(&self, options: OptionsBag) -> RemoteResult<RemoteCall> {
        self.build(ActionKind::FormRemoteTag, None, None, options)
    }

    pub fn submit_to_remote(
        &self,
        name: &str,
        value: &str,
        options: OptionsBag,
    ) -> RemoteResult<RemoteCall> {
        self.build(
            ActionKind::SubmitToRemote,
            Some(name.to_string()),
            Some(value.to_string()),
            options,
        )
    }

    /// Decorate `options` for any action kind. Submit buttons require `name` and `value`.
    pub fn build(
        &self,
        kind: ActionKind,
        name: Option<String>,
        value: Option<String>,
        options: OptionsBag,
    ) -> RemoteResult<RemoteCall> {
        if kind == ActionKind::SubmitToRemote {
            for (field, present) in [("name", name.is_some()), ("value", value.is_some())] {
                if !present {
                    return Err(RemoteError::MissingField {
                        kind: "submit_to_remote".to_string(),
                        field: field.to_string(),
                    });
                }
            }
        }

        let pipeline = self.pipeline(kind);
        tracing::debug!(?kind, decorators = ?pipeline.names(), "decorating remote call");
        let options = pipeline.run(options)?;
        Ok(RemoteCall {
            kind,
            name,
            value,
            options,
        })
    }

    pub fn render_remote_function(
        &self,
        options: OptionsBag,
        renderer: &impl RemoteRenderer,
    ) -> RemoteResult<String> {
        renderer.render(&self.remote_function(options)?)
    }

    pub fn render_form_remote_tag(
        &self,
        options: OptionsBag,
        renderer: &impl RemoteRenderer,
    ) -> RemoteResult<String> {
        renderer.render(&self.form_remote_tag(options)?)
    }

    pub fn render_submit_to_remote(
        &self,
        name: &str,
        value: &str,
        options: OptionsBag,
        renderer: &impl RemoteRenderer,
    ) -> RemoteResult<String> {
        renderer.render(&self.submit_to_remote(name, value, options)?)
    }

    /// Markup for an indicator element using these helpers' defaults
    pub fn indicator(
        &self,
        options: OptionsBag,
        renderer: &impl MarkupRenderer,
    ) -> RemoteResult<String> {
        markup::indicator(options, &self.config, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn helpers() -> RemoteHelpers {
        RemoteHelpers::new(RemoteIndicatorConfig::default(), Environment::Production)
    }

    #[test]
    fn test_action_kind_parse() {
        assert_eq!(ActionKind::parse("form_remote_tag").unwrap(), ActionKind::FormRemoteTag);
        assert!(ActionKind::parse("link_to_remote").is_err());
    }

    #[test]
    fn test_pipelines_per_kind() {
        let h = helpers();
        assert_eq!(
            h.pipeline(ActionKind::RemoteFunction).names(),
            vec!["submit_disable", "indicator"]
        );
        assert_eq!(
            h.pipeline(ActionKind::FormRemoteTag).names(),
            vec!["form_disable", "indicator"]
        );
        assert_eq!(
            h.pipeline(ActionKind::SubmitToRemote).names(),
            vec!["submit_disable", "indicator"]
        );
    }

    #[test]
    fn test_remote_function_without_submit() {
        let call = helpers()
            .remote_function(OptionsBag::new().with("update", "someid").with("url", "/do"))
            .unwrap();
        assert_eq!(call.kind, ActionKind::RemoteFunction);
        assert_eq!(
            call.options,
            OptionsBag::new()
                .with("update", "someid")
                .with("url", "/do")
                .with("before", "Element.show('indicator')")
                .with("complete", "Element.hide('indicator')")
        );
    }

    #[test]
    fn test_submit_to_remote_requires_name() {
        let result = helpers().build(ActionKind::SubmitToRemote, None, Some("Go".to_string()), OptionsBag::new());
        assert!(matches!(result, Err(RemoteError::MissingField { ref field, .. }) if field == "name"));
    }

    #[test]
    fn test_submit_to_remote_carries_button() {
        let call = helpers()
            .submit_to_remote("commit", "Save", OptionsBag::new().with("submit", "myform"))
            .unwrap();
        assert_eq!(call.name.as_deref(), Some("commit"));
        assert_eq!(call.value.as_deref(), Some("Save"));
        assert_eq!(
            call.options.get_str("before").unwrap(),
            Some("Element.show('indicator');Form.disable('myform')")
        );
    }
}
