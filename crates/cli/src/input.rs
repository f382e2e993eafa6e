// crates/cli/src/input.rs
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use panel_order_shared_kernel::{InfraResult, InfrastructureError};

/// Where the raw order text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
    /// Lines passed on the command line, joined with newlines.
    Entries(Vec<String>),
}

impl InputSource {
    /// `-` selects stdin, like most text tools.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") { Self::Stdin } else { Self::File(path.to_path_buf()) }
    }

    /// # Errors
    /// Returns [`InfrastructureError::FileRead`] or [`InfrastructureError::StdinRead`]
    /// when the text cannot be read.
    pub fn read_to_string(&self) -> InfraResult<String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut buf)
                    .map_err(|source| InfrastructureError::StdinRead { source })?;
                Ok(buf)
            }
            Self::File(path) => fs::read_to_string(path)
                .map_err(|source| InfrastructureError::FileRead { path: path.clone(), source }),
            Self::Entries(lines) => Ok(lines.join("\n")),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Entries(lines) => format!("{} inline entries", lines.len()),
        }
    }
}
