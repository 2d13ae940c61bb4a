// crates/generate_prompts/src/params.rs

use thiserror::Error;

/// Help text for the trailing `KEY=VALUE` arguments.
pub const PARAMETERS_HELP: &str = "\
Valid parameters:
    LLM=<llm-name>   Mention the LLM by name (might help increase compliance)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown parameter `{key}`")]
pub struct UnknownParameterError {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error(transparent)]
    Unknown(#[from] UnknownParameterError),
    #[error("Malformed parameter `{0}`, expected KEY=VALUE")]
    Malformed(String),
}

/// Options passed as trailing `KEY=VALUE` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptParameters {
    /// Name used to address the model in every instruction line.
    pub llm: Option<String>,
}

impl PromptParameters {
    pub fn parse<I, S>(args: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = PromptParameters::default();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| ParameterError::Malformed(arg.to_string()))?;
            match key {
                // An empty name means no name.
                "LLM" => params.llm = Some(value.to_string()).filter(|v| !v.is_empty()),
                _ => {
                    return Err(UnknownParameterError {
                        key: key.to_string(),
                    }
                    .into())
                }
            }
        }
        Ok(params)
    }
}
