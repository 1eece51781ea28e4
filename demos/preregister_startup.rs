//! Startup-path walkthrough: preregister the well-known channel set and
//! print what the registry ended up with.

use std::sync::Arc;

use fcm_sound_channels::channels::{
    ChannelManager, ChannelRegistry, ChannelSettings, InMemoryChannelRegistry, StaticSoundCatalog,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fcm_sound_channels::logger::set_log_level("debug")?;

    let registry = Arc::new(InMemoryChannelRegistry::new());
    let manager = ChannelManager::new(
        ChannelSettings::default(),
        Arc::clone(&registry) as Arc<dyn ChannelRegistry>,
        Arc::new(StaticSoundCatalog::well_known("com.example.app")),
    )?;

    let report = manager.ensure_preregistered().await;
    println!(
        "preregistered {} channels ({} sounds missing, {} failures)",
        report.ensured.len(),
        report.missing_sounds.len(),
        report.failures.len()
    );

    for channel in registry.list_channels().await? {
        println!(
            "  {} [{}] sound={}",
            channel.id,
            channel.importance.as_str(),
            channel
                .sound
                .as_ref()
                .map(|uri| uri.as_str())
                .unwrap_or("(channel default)")
        );
    }

    // Second call is a no-op: the report is shared, nothing re-registers.
    let again = manager.ensure_preregistered().await;
    println!("second run ensured {} channels (cached)", again.ensured.len());

    Ok(())
}
