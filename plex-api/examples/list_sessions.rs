//! Signs in with the credentials from `PLEX_USERNAME` / `PLEX_PASSWORD`,
//! then prints every server on the account and what it is playing.
//!
//! ```sh
//! PLEX_USERNAME=me PLEX_PASSWORD=secret cargo run --example list_sessions
//! ```

use plex_api::PlexClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("PLEX_USERNAME")?;
    let password = std::env::var("PLEX_PASSWORD")?;

    let client = PlexClient::new();
    let user = client.sign_in(&username, &password)?;
    println!("signed in as {}", user.username);

    for server in client.servers(&user)? {
        println!("server: {}", server.name());
        let sessions = client.sessions(&server)?;
        if sessions.is_empty() {
            println!("  nothing playing");
        }
        for session in sessions {
            println!(
                "  {}: {} on {} ({})",
                session.title, session.player.state, session.player.title, session.player.product,
            );
        }
    }

    Ok(())
}
