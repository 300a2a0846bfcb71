use std::io;

use textverified::{AuthOptions, TextVerifiedClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let simple_token = std::env::var("TEXTVERIFIED_SIMPLE_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTVERIFIED_SIMPLE_TOKEN environment variable is required",
        )
    })?;

    let client = TextVerifiedClient::builder()
        .simple_token(simple_token)
        .build()?;

    let session = client
        .authenticate_with_simple_token(
            None,
            AuthOptions {
                propagate_failure: true,
                ..Default::default()
            },
        )
        .await?;
    println!("authenticated: {}", session.is_authenticated());

    let user = client.get_user().await?;
    println!(
        "user: {:?}, credit balance: {}",
        user.username, user.credit_balance
    );

    Ok(())
}
