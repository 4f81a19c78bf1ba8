//! Default configuration values

/// Maximum number of download retry attempts
pub const MAX_DOWNLOAD_RETRIES: u32 = 3;

/// Base delay for download retry backoff (in milliseconds)
pub const RETRY_BASE_DELAY_MS: u64 = 1000;

/// Environment variable overriding the data root directory
pub const ENV_DATA_DIR: &str = "QAPREP_DATA_DIR";

/// Directory for the BoolQ dataset splits, relative to the data root
pub const DATASET_SUBDIR: &str = "boolq";

/// Directory for the GloVe embeddings, relative to the data root
pub const EMBEDDING_SUBDIR: &str = "glove";

/// spaCy model installed for tokenization during preprocessing
pub const SPACY_MODEL: &str = "en_core_web_sm";

/// Interpreter used for the model install step
pub const PYTHON_INTERPRETER: &str = "python3";
