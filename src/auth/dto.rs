use serde::{Deserialize, Serialize};

/// Request body for registration. Wire names match the original client.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_portuguese_wire_names() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"nome":"Maria","email":"maria@example.com","senha":"super-secreta"}"#,
        )
        .expect("deserialize");
        assert_eq!(req.name, "Maria");
        assert_eq!(req.email, "maria@example.com");
        assert_eq!(req.password, "super-secreta");
    }

    #[test]
    fn login_request_uses_portuguese_wire_names() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"maria@example.com","senha":"super-secreta"}"#)
                .expect("deserialize");
        assert_eq!(req.email, "maria@example.com");
        assert_eq!(req.password, "super-secreta");
    }

    #[test]
    fn token_response_serializes_token_field() {
        let json = serde_json::to_string(&TokenResponse {
            token: "abc.def.ghi".into(),
        })
        .expect("serialize");
        assert_eq!(json, r#"{"token":"abc.def.ghi"}"#);
    }
}
