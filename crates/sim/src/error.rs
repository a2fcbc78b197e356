use sightline_core::parameters::ParameterError;

/// Errors that can occur while loading or driving a simulated measurement.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("Scenario has no steps")]
    EmptyScenario,

    #[error("Parameter error: {0}")]
    Parameter(ParameterError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParameterError> for SimError {
    fn from(err: ParameterError) -> Self {
        SimError::Parameter(err)
    }
}
