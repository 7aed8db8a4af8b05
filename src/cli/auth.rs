use chrono::Utc;

use crate::{error, management::TokenManager, spotify, success, types::Token};

pub async fn auth() {
    let response = match spotify::auth::request_token().await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to request token. Err: {}", e);
        }
    };

    let token = Token {
        access_token: response.access_token,
        expires_in: response.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    };

    let token_manager = TokenManager::new(token.clone());
    if let Err(e) = token_manager.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!(
        "Authentication successful! Token expires in {} seconds.",
        token.expires_in
    );
}
