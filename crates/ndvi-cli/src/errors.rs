use console::style;
use ndvi_core::NdviError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a backend that could not be reached
pub fn backend_unreachable(api_url: &str, error: &str) -> CliError {
    CliError::new("Cannot reach the NDVI backend")
        .with_context(format!("The request did not get a response.\n\nBackend: {}\nError: {}", api_url, error))
        .with_suggestion("Check that the backend is running")
        .with_suggestion("Point to another backend: ndvi --api-url http://host:7860 ...")
        .with_suggestion("Or set NDVI_API_URL")
        .with_help("Run: ndvi config")
}

/// Create error for a login or signup the backend refused
pub fn authentication_failed(message: &str) -> CliError {
    CliError::new("Authentication failed")
        .with_context(message.to_string())
        .with_suggestion("Check the email and password")
        .with_suggestion("Create an account first: ndvi analyze --signup ...")
        .with_help("Run: ndvi analyze --help")
}

/// Create error for a missing parcel argument
pub fn parcel_required() -> CliError {
    CliError::new("No parcel given")
        .with_context("The analysis needs a parcel geometry.")
        .with_suggestion("Pass a GeoJSON file: --parcel field.geojson")
        .with_suggestion("Or a bounding box: --bbox 30.0,-2.0,30.1,-1.9")
        .with_help("Run: ndvi analyze --help")
}

/// Create error for a parcel file or string that could not be used
pub fn invalid_parcel(input: &str, reason: &str) -> CliError {
    CliError::new("Invalid parcel")
        .with_context(format!("Could not read a parcel from the given input.\n\nInput: {}\nReason: {}", input, reason))
        .with_suggestion("Use a GeoJSON Feature, Geometry or FeatureCollection")
        .with_suggestion("Check the file path and try again")
        .with_help("Run: ndvi analyze --help")
}

/// Create error for a configuration file that failed to load
pub fn invalid_config(reason: &str) -> CliError {
    CliError::new("Invalid configuration")
        .with_context(reason.to_string())
        .with_suggestion("Fix the TOML file or pass a different one with --config")
        .with_help("Run: ndvi config")
}

/// Turn a workflow failure into a CLI error with suggestions
pub fn from_workflow(err: NdviError, api_url: &str) -> CliError {
    match err {
        NdviError::Transport { message } => backend_unreachable(api_url, &message),
        NdviError::MalformedResponse { endpoint, reason } => {
            CliError::new("Unexpected backend response")
                .with_context(format!("Endpoint: {}\nReason: {}", endpoint, reason))
                .with_suggestion("Check that --api-url points to an NDVI backend")
                .with_help("Run: ndvi config")
        }
        other => CliError::new(other.to_string()),
    }
}
