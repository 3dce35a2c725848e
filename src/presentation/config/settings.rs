use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub dataset: DatasetSettings,
    pub summarizer: SummarizerSettings,
    pub ocr: OcrSettings,
    pub uploads: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub uri: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    pub json_path: String,
    pub csv_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_chunk_length: usize,
    pub min_summarizable_chars: usize,
    pub default_length_percent: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub binary_path: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
