use serde_json::Value;

/// Assert a `{success: true, ...}` body and return its `id`, if any
pub fn assert_mutation_success(body: &Value) -> Option<i64> {
    assert_eq!(
        body.get("success").and_then(|v| v.as_bool()),
        Some(true),
        "Expected success flag in {}",
        body
    );
    body.get("id").and_then(|v| v.as_i64())
}

pub fn assert_folder_listing(folder: &Value, expected_id: i64, expected_name: &str) {
    assert_eq!(folder.get("id").and_then(|v| v.as_i64()), Some(expected_id));
    assert_eq!(
        folder.get("name").and_then(|v| v.as_str()),
        Some(expected_name)
    );
    assert!(
        folder.get("audios").map(|v| v.is_array()).unwrap_or(false),
        "Folder listing must carry an audios array"
    );
}

/// Assert a successful per-language entry and return its audio reference
pub fn assert_translated(result: &Value, expected_language: &str) -> String {
    assert_eq!(
        result.get("language").and_then(|v| v.as_str()),
        Some(expected_language)
    );
    assert!(
        result.get("error").is_none(),
        "Unexpected error for {}: {}",
        expected_language,
        result
    );
    assert!(result
        .get("translation")
        .and_then(|v| v.as_str())
        .map(|t| !t.is_empty())
        .unwrap_or(false));

    let audio_file = result
        .get("audio_file")
        .and_then(|v| v.as_str())
        .expect("Missing audio_file field");
    assert!(
        audio_file.starts_with("/audio/audio_") && audio_file.ends_with(".mp3"),
        "Unexpected audio reference {}",
        audio_file
    );
    audio_file.to_string()
}

pub fn assert_failed(result: &Value, expected_language: &str, expected_error: &str) {
    assert_eq!(
        result.get("language").and_then(|v| v.as_str()),
        Some(expected_language)
    );
    assert!(result.get("audio_file").is_none());

    let error = result
        .get("error")
        .and_then(|v| v.as_str())
        .expect("Missing error field");
    assert!(
        error.contains(expected_error),
        "Expected error to contain '{}', but got '{}'",
        expected_error,
        error
    );
}
