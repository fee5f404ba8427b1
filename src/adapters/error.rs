use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("failed to invoke {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("{tool} reported: {detail}")]
    ToolFailure { tool: &'static str, detail: String },
}
