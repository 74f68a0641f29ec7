use anyhow::Result;

use crate::state::http::types::Empty;
use crate::state::http::{HttpClient, Payload};

/// Sent as the password to keep the stored one.
pub const KEEP_PASSWORD: &str = "__NO_CHANGE__";

#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub student_id: String,
    pub student_password: String,
}

impl ProfileForm {
    fn into_payload(self) -> Payload {
        Payload::Form(vec![
            ("name".to_string(), self.name),
            ("student_id".to_string(), self.student_id),
            ("student_password".to_string(), self.student_password),
        ])
    }
}

pub async fn update_profile(http: &HttpClient, form: &ProfileForm) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>(
            "POST",
            "/api/auth/update_profile",
            Some(form.clone().into_payload()),
        )
        .await?
        .success("Failed to save your profile")?;

    Ok(response.message)
}

pub async fn delete_account(http: &HttpClient) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>("POST", "/api/account/delete", None)
        .await?
        .success("Failed to delete your account")?;

    Ok(response.message)
}

#[cfg(test)]
mod test {
    use serde_json::Value;

    use super::*;
    use crate::state::http::test_server;
    use crate::store::storage::Storage;

    #[tokio::test]
    async fn test_profile_sent_as_form() {
        let base = test_server::spawn().await;

        let mut storage = Storage::in_memory();
        storage.set_token("valid").await.unwrap();

        let http = HttpClient::new(storage.shared(), Some(format!("{base}/echo"))).unwrap();

        let form = ProfileForm {
            name: "Kim".to_string(),
            student_id: "202412345".to_string(),
            student_password: KEEP_PASSWORD.to_string(),
        };

        let response = http
            .request::<Value>(
                "POST",
                "/api/auth/update_profile",
                Some(form.into_payload()),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            response["body"],
            "name=Kim&student_id=202412345&student_password=__NO_CHANGE__"
        );
    }
}
