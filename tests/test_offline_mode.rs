use grooming_api::test_utils::unreachable_base_url;
use grooming_api::{FallbackSnapshot, FetchOutcome, OfflineMode};

use std::path::PathBuf;
use std::time::Duration;

#[test]
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = {
        // Offline data
        let mut mocked_data = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        mocked_data.push("data/fallback-snapshot.json");
        let offline_data = FallbackSnapshot::from_file(&mocked_data)?;

        grooming_api::test_utils::create_client_with_offline_mode(
            &[unreachable_base_url(), unreachable_base_url()],
            Duration::from_millis(500),
            OfflineMode::FallbackData(offline_data),
        )?
    };

    // Nobody answers, but the reads are served from the fallback data
    let stylists = client.get_stylists();
    assert!(stylists.is_fallback());
    let mut names: Vec<String> = stylists.data().unwrap().into_iter().map(|s| s.name).collect();
    names.sort();
    assert_eq!(names, vec!["Hassan the Barber", "Karim Cuts"]);

    assert!(matches!(client.get_user(12), FetchOutcome::NotFound));

    Ok(())
}
