mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    PipelineSettings, ServerSettings, Settings, SettingsError, TranscodingSettings,
    TranscriptionSettings,
};
