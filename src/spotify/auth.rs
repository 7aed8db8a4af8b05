use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{config, types::TokenResponse};

/// Requests an app-only access token via the client-credentials grant.
///
/// Exchanges the configured client id and secret for a short-lived access
/// token. The credentials are sent as a Basic authorization header containing
/// `base64(client_id:client_secret)`, with the grant type in the form body as
/// the OAuth 2.0 standard requires.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Access token plus its lifetime in seconds
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Token Properties
///
/// Client-credentials tokens are app-only: they authorize requests for public
/// catalog data (search, track listings) but carry no user identity and no
/// refresh token. When the token expires the grant simply has to be run
/// again.
///
/// # Configuration
///
/// Reads the token endpoint and the application credentials from the
/// configuration module. The credentials have no default; the accessor
/// panics with a descriptive message when they are missing from the
/// environment.
///
/// # Error Conditions
///
/// Common failure scenarios:
/// - Invalid client id or secret (401 from the token endpoint)
/// - Network connectivity issues
/// - Spotify accounts service errors
///
/// # Example
///
/// ```
/// let response = request_token().await?;
/// println!("Token expires in {} seconds", response.expires_in);
/// ```
pub async fn request_token() -> Result<TokenResponse, reqwest::Error> {
    let credentials = format!(
        "{id}:{secret}",
        id = config::spotify_client_id(),
        secret = config::spotify_client_secret()
    );

    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", STANDARD.encode(credentials)))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<TokenResponse>().await?;

    Ok(json)
}
