use std::io;

use textverified::{AuthOptions, TextVerifiedClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client_key = std::env::var("TEXTVERIFIED_CLIENT_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTVERIFIED_CLIENT_KEY environment variable is required",
        )
    })?;
    let client_secret = std::env::var("TEXTVERIFIED_CLIENT_SECRET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTVERIFIED_CLIENT_SECRET environment variable is required",
        )
    })?;

    let client = TextVerifiedClient::builder()
        .client_credentials(client_key, client_secret)
        .build()?;

    client
        .authenticate_with_client_credentials(
            None,
            None,
            AuthOptions {
                propagate_failure: true,
                ..Default::default()
            },
        )
        .await?;

    let targets = client.get_targets().await?;
    let available = targets
        .iter()
        .find(|target| target.status.is_available())
        .ok_or_else(|| io::Error::other("no target is currently available"))?;
    println!(
        "creating verification for {} (cost {})",
        available.name, available.cost
    );

    let verification = client
        .create_verification(Some(available.target_id))
        .await?;
    println!(
        "verification {}: number {:?}, status {:?}",
        verification.id.as_str(),
        verification.number,
        verification.status
    );

    Ok(())
}
