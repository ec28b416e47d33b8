/// Timestamps keep the offset they were submitted with.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Free-form JSON object, as used for restricted-event `params`.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
