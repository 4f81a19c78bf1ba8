//! Upstream asset URLs

/// BoolQ training split (JSON-lines)
pub const BOOLQ_TRAIN: &str = "https://storage.googleapis.com/boolq/train.jsonl";

/// BoolQ dev split (JSON-lines)
pub const BOOLQ_DEV: &str = "https://storage.googleapis.com/boolq/dev.jsonl";

/// GloVe 840B-token 300-dimension embeddings (zip archive, ~2 GB)
pub const GLOVE_840B_300D: &str = "https://nlp.stanford.edu/data/glove.840B.300d.zip";
