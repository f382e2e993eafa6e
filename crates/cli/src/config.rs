// crates/cli/src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use panel_order_shared_kernel::{PresentationError, PresentationResult};

use crate::args::Args;
use crate::input::InputSource;
use crate::logging::Verbosity;
use crate::options::{OutputFormat, OutputMode};

/// Resolved run settings.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub source: InputSource,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub mode: OutputMode,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        let source = source_from_args(&args);

        if let Some(path) = args.output.as_ref().filter(|p| p.is_dir()) {
            return Err(PresentationError::InvalidValue {
                flag: "--output".to_string(),
                value: path.display().to_string(),
                reason: "is a directory".to_string(),
            });
        }

        ConfigBuilder::default()
            .source(source)
            .format(args.format)
            .mode(args.mode)
            .output_path(args.output)
            .verbosity(Verbosity::from_flags(args.verbose, args.quiet))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

fn source_from_args(args: &Args) -> InputSource {
    if !args.entry.is_empty() {
        return InputSource::Entries(args.entry.clone());
    }
    args.file
        .as_deref()
        .map_or(InputSource::Stdin, InputSource::from_path)
}
