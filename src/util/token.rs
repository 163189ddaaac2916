use crate::models::token_claims::{TokenClaims, TokenDetails};
use thiserror::Error;
use uuid::Uuid;

type Result<T> = std::result::Result<T, TokenError>;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Error generating the token : {0}")]
    TokenGenerationError(jsonwebtoken::errors::Error),
    #[error("Error validating the token : {0}")]
    TokenValidationError(jsonwebtoken::errors::Error),
    #[error("Error parsing the token claims : {0}")]
    TokenClaimsError(uuid::Error),
}

pub fn generate_jwt_token(username: String, max_age_secs: i64, secret: &str) -> Result<TokenDetails> {
    let now = chrono::Utc::now();
    let mut token_details = TokenDetails {
        username,
        token_uuid: Uuid::new_v4(),
        expires_in: Some((now + chrono::Duration::seconds(max_age_secs)).timestamp()),
        token: None,
    };

    let claims = TokenClaims {
        sub: token_details.username.to_string(),
        token_uuid: token_details.token_uuid.to_string(),
        iat: now.timestamp() as usize,
        exp: token_details.expires_in.unwrap_or_default() as usize,
        nbf: now.timestamp() as usize,
    };

    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::TokenGenerationError)?;
    token_details.token = Some(token);
    Ok(token_details)
}

pub fn verify_jwt_token(secret: &str, token: &str) -> Result<TokenDetails> {
    let validation = jsonwebtoken::Validation::default();
    let decoded = jsonwebtoken::decode::<TokenClaims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(TokenError::TokenValidationError)?;

    // a token whose uuid claim does not parse never verifies
    let token_uuid =
        Uuid::parse_str(&decoded.claims.token_uuid).map_err(TokenError::TokenClaimsError)?;

    Ok(TokenDetails {
        token: None,
        token_uuid,
        username: decoded.claims.sub,
        expires_in: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_verify_with_the_same_secret() {
        let details = generate_jwt_token("admin".to_string(), 3600, "test-secret").unwrap();
        let token = details.token.as_deref().unwrap();
        let verified = verify_jwt_token("test-secret", token).unwrap();
        assert_eq!(verified.username, "admin");
        assert_eq!(verified.token_uuid, details.token_uuid);
    }

    #[test]
    fn tokens_fail_with_the_wrong_secret() {
        let details = generate_jwt_token("admin".to_string(), 3600, "test-secret").unwrap();
        let token = details.token.as_deref().unwrap();
        assert!(verify_jwt_token("other-secret", token).is_err());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let details = generate_jwt_token("admin".to_string(), -120, "test-secret").unwrap();
        let token = details.token.as_deref().unwrap();
        assert!(verify_jwt_token("test-secret", token).is_err());
    }

    #[test]
    fn tokens_with_a_malformed_uuid_claim_are_rejected() {
        let now = chrono::Utc::now();
        let claims = TokenClaims {
            sub: "admin".to_string(),
            token_uuid: "not-a-uuid".to_string(),
            iat: now.timestamp() as usize,
            exp: (now + chrono::Duration::seconds(3600)).timestamp() as usize,
            nbf: now.timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(verify_jwt_token("test-secret", &token).is_err());
    }
}
