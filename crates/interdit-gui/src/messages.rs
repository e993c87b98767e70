use std::path::PathBuf;

/// Results sent back from helper threads (file dialogs, saving).
pub enum TaskResult {
    ImageSaved { path: PathBuf },
    ConfigExported { path: PathBuf },
    Error { message: String },
}
