#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown interval: {0}")]
    UnknownInterval(String),

    #[error("Unknown color theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(String),

    #[error("Unknown widget: {0}")]
    UnknownWidget(String),

    #[error("Invalid props: {0}")]
    InvalidProps(#[from] serde_json::Error),

    #[error("Dispatch error: {0}")]
    DispatchError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}
