use messaging_auth_contracts::{AuthService, Authentication};
use messaging_di::Build;
use messaging_models::auth::AuthError;
use messaging_shared_contracts::jwt::{JwtService, Verified, VerifyJwtError};
use messaging_utils::trace_instrument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Build)]
pub struct AuthServiceImpl<Jwt> {
    jwt: Jwt,
}

/// Claims of an admin access token (besides `exp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
}

impl<Jwt> AuthService for AuthServiceImpl<Jwt>
where
    Jwt: JwtService,
{
    #[trace_instrument(skip(self, token))]
    fn authenticate(&self, token: &str) -> Result<Authentication, AuthError> {
        let Verified {
            data: AccessTokenClaims { sub },
            ttl,
        } = self.jwt.verify(token).map_err(|err| match err {
            VerifyJwtError::Expired(_) => AuthError::Expired,
            VerifyJwtError::Invalid => AuthError::InvalidToken,
        })?;

        Ok(Authentication { subject: sub, ttl })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use messaging_shared_contracts::jwt::MockJwtService;
    use messaging_utils::assert_matches;

    use super::*;

    #[test]
    fn ok() {
        // Arrange
        let jwt = MockJwtService::new().with_verify(
            "the token",
            Ok(Verified {
                data: AccessTokenClaims {
                    sub: "admin".into(),
                },
                ttl: Duration::from_secs(600),
            }),
        );
        let sut = AuthServiceImpl { jwt };

        // Act
        let result = sut.authenticate("the token");

        // Assert
        assert_eq!(
            result.unwrap(),
            Authentication {
                subject: "admin".into(),
                ttl: Duration::from_secs(600),
            }
        );
    }

    #[test]
    fn expired() {
        // Arrange
        let jwt = MockJwtService::new().with_verify(
            "the token",
            Err(VerifyJwtError::Expired(AccessTokenClaims {
                sub: "admin".into(),
            })),
        );
        let sut = AuthServiceImpl { jwt };

        // Act
        let result = sut.authenticate("the token");

        // Assert
        assert_matches!(result, Err(AuthError::Expired));
    }

    #[test]
    fn invalid() {
        // Arrange
        let jwt = MockJwtService::new()
            .with_verify::<AccessTokenClaims>("the token", Err(VerifyJwtError::Invalid));
        let sut = AuthServiceImpl { jwt };

        // Act
        let result = sut.authenticate("the token");

        // Assert
        assert_matches!(result, Err(AuthError::InvalidToken));
    }
}
