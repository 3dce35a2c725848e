mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, DatasetSettings, LoggingSettings, OcrSettings, ServerSettings, Settings,
    SummarizerSettings, UploadSettings,
};
