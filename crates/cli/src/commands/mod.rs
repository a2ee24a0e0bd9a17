use clap::{Args, Subcommand};
use credkit_providers::ProviderSettings;
use eyre::WrapErr;
use std::path::PathBuf;

pub mod resolve;
pub mod sources;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve credentials, preferring explicit values over discovery
    Resolve(resolve::ResolveArgs),

    /// Show the discovery chain used when no explicit values are given
    Sources {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub async fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Resolve(args) => resolve::execute(args).await,
            Commands::Sources { settings, json } => sources::execute(&settings, json),
        }
    }
}

/// Options controlling where the discovery chain looks
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// JSON file with provider settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile to read from the shared credentials file
    #[arg(long)]
    pub profile: Option<String>,

    /// Shared credentials file to read instead of ~/.aws/credentials
    #[arg(long, value_name = "FILE")]
    pub credentials_file: Option<PathBuf>,
}

impl SettingsArgs {
    /// Settings file (or defaults), then environment, then command-line flags
    pub fn load(&self) -> eyre::Result<ProviderSettings> {
        let base = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read settings from {}", path.display()))?;
                ProviderSettings::from_json(&json)?
            }
            None => ProviderSettings::default(),
        };

        let mut settings = base.overlay_env()?;
        if let Some(profile) = &self.profile {
            settings.profile = profile.clone();
        }
        if let Some(file) = &self.credentials_file {
            settings.credentials_file = Some(file.clone());
        }

        tracing::debug!(?settings, "Loaded provider settings");
        Ok(settings)
    }
}
