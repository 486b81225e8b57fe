//! Sample payloads as the service returns them.

use serde_json::{json, Value};

pub fn sample_voice() -> Value {
    json!({
        "id": "voice123",
        "userId": "user123",
        "name": "Test Voice",
        "sampleUrl": "https://example.com/sample.mp3",
        "previewUrl": "https://example.com/preview.mp3",
        "createdAt": "2024-05-01T12:00:00.000Z",
        "updatedAt": "2024-05-01T12:00:00.000Z",
        "deletedAt": null
    })
}

pub fn sample_public_voice() -> Value {
    json!({
        "id": "public123",
        "name": "Narrator",
        "sampleUrl": "https://example.com/narrator.mp3",
        "previewUrl": "https://example.com/narrator-preview.mp3",
        "createdAt": "2024-03-10T08:30:00Z",
        "updatedAt": "2024-04-02T09:00:00Z",
        "deletedAt": null
    })
}

pub fn sample_generation() -> Value {
    json!({
        "id": "gen123",
        "userId": "user123",
        "voiceId": "voice123",
        "text": "Test generation",
        "sourceUrl": null,
        "notes": "Test notes",
        "audioUrl": "https://example.com/audio.mp3",
        "quality": "high",
        "cost": 1.0,
        "createdAt": "2024-05-02T10:15:00.000Z",
        "updatedAt": "2024-05-02T10:15:30.000Z",
        "deletedAt": null
    })
}

/// Wrap a payload the way the service does on success.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "status": 200, "success": true })
}
