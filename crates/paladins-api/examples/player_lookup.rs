/*
[INPUT]:  Developer credentials from the environment and a player name
[OUTPUT]: Player id, status and recent matches printed to stdout
[POS]:    Examples - signed lookups with automatic session handling
[UPDATE]: When player endpoints change
*/

use paladins_api::*;

/// Example: player lookup
///
/// Set PALADINS_DEV_ID and PALADINS_AUTH_KEY, then run with a player name:
/// `cargo run --example player_lookup -- SomePlayer`
#[tokio::main]
async fn main() {
    println!("=== Paladins Player Lookup ===\n");

    let (Ok(dev_id), Ok(auth_key)) = (
        std::env::var("PALADINS_DEV_ID"),
        std::env::var("PALADINS_AUTH_KEY"),
    ) else {
        eprintln!("PALADINS_DEV_ID and PALADINS_AUTH_KEY must be set");
        return;
    };
    let name = std::env::args().nth(1).unwrap_or_else(|| "Androxus".to_string());

    let client = match PaladinsClient::new(dev_id, auth_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!(
        "✓ Client ready, session file at {}",
        client.sessions().store().path().display()
    );

    let ids = match client.get_player_id_by_name(&name).await {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("Lookup failed: {}", e);
            return;
        }
    };
    let Some(player) = ids.first() else {
        println!("No player named {}", name);
        return;
    };
    println!("✓ {} has player id {}", name, player.player_id);

    match client.get_player_status(player.player_id).await {
        Ok(status) => println!(
            "  Status: {}",
            status.status_string.as_deref().unwrap_or("unknown")
        ),
        Err(PaladinsError::PrivateProfile { .. }) => println!("  Profile is private"),
        Err(e) => eprintln!("  Status unavailable: {}", e),
    }

    match client.get_player_match_history(player.player_id).await {
        Ok(matches) => println!("  {} recent matches", matches.len()),
        Err(e) => eprintln!("  Match history unavailable: {}", e),
    }

    println!("\n✓ Lookup complete");
}
