//! Basic usage example
//!
//! Lists public voices, then starts a text-to-speech generation with the
//! first one and shows how both error kinds surface.
//!
//! The API key is read from `PRIMVOICES_API_KEY`:
//!   PRIMVOICES_API_KEY="your_key" RUST_LOG=primvoices=debug cargo run --example basic_usage

use primvoices::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("PRIMVOICES_API_KEY")
        .map_err(|_| anyhow::anyhow!("PRIMVOICES_API_KEY is not set"))?;
    let client = Client::new(api_key)?;

    let voices = client
        .voices()
        .list_public(Some(&PaginationParams::new().limit(5)))
        .await?;
    println!("{} public voices (HTTP {})", voices.data.len(), voices.status);
    for voice in &voices.data {
        println!("  {}  {}", voice.id, voice.name);
    }

    let Some(voice) = voices.data.first() else {
        return Ok(());
    };

    // Rejected locally: the voice tier needs a source recording.
    let incomplete = GenerationCreateParams {
        voice_id: voice.id.clone(),
        quality: Some(Quality::Voice),
        ..Default::default()
    };
    if let Err(err) = client.generations().create(&incomplete).await {
        println!("validation: {}", serde_json::to_string(&err.to_response())?);
    }

    let params = GenerationCreateParams::text_to_speech(&voice.id, Quality::Low, "Hello from Rust!");
    match client.generations().create(&params).await {
        Ok(generation) => println!(
            "generation {} -> {} (cost {})",
            generation.data.id,
            generation.data.audio_url.as_deref().unwrap_or("<rendering>"),
            generation.data.cost
        ),
        Err(err) => println!("service: {}", serde_json::to_string(&err.to_response())?),
    }

    Ok(())
}
