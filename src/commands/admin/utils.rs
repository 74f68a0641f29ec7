use anyhow::{anyhow, ensure, Result};

use super::types::{
    AdminLecture, AdminLectureResponse, CreatedKeys, ProKey, ProKeys, RunnerStatus, User, Users,
};
use crate::commands::attendance::types::{AttendanceLog, AttendanceLogs};
use crate::commands::attendance::utils::lecture_ids_payload;
use crate::commands::auto::types::{EnrolledLecture, EnrolledLectures};
use crate::state::http::types::Empty;
use crate::state::http::HttpClient;

pub async fn get_pro_keys(http: &HttpClient) -> Result<Vec<ProKey>> {
    let response = http
        .fetch::<ProKeys>("GET", "/api/admin/prokeys", None)
        .await?
        .success("Failed to get ProKeys")?;

    Ok(response.data.prokeys)
}

pub async fn generate_pro_keys(http: &HttpClient, count: u32) -> Result<Vec<String>> {
    // this endpoint answers without a status field
    let response = http
        .fetch::<CreatedKeys>("POST", &format!("/api/admin/prokeys?count={count}"), None)
        .await?;

    if response.data.created.is_empty() {
        return Err(anyhow!(
            "{}",
            response
                .error_message()
                .unwrap_or_else(|| "No ProKeys were created".to_string())
        ));
    }

    Ok(response.data.created)
}

/// ProKeys look like `PRO-XXXX-XXXX`, letters, digits and dashes only.
pub fn parse_pro_key(key: &str) -> Result<String> {
    ensure!(
        !key.is_empty() && key.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'-'),
        "Not a ProKey: `{key}`"
    );

    Ok(key.to_string())
}

pub async fn delete_pro_key(http: &HttpClient, key: &str) -> Result<Option<String>> {
    let key = parse_pro_key(key)?;

    let response = http
        .fetch::<Empty>("DELETE", &format!("/api/admin/prokeys/{key}"), None)
        .await?
        .success("Failed to delete the ProKey")?;

    Ok(response.message)
}

pub async fn get_users(http: &HttpClient) -> Result<Vec<User>> {
    let response = http
        .fetch::<Users>("GET", "/api/admin/users", None)
        .await?
        .success("Failed to get users")?;

    Ok(response.data.users)
}

/// Flips `set_pro` or `set_admin` for a user.
pub async fn set_user_flag(
    http: &HttpClient,
    user_id: u64,
    flag: &str,
    value: bool,
) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>(
            "POST",
            &format!("/api/admin/users/{user_id}/{flag}?value={value}"),
            None,
        )
        .await?
        .success("Failed to update the user")?;

    Ok(response.message)
}

pub async fn get_runner_status(http: &HttpClient) -> Result<RunnerStatus> {
    let response = http
        .fetch::<RunnerStatus>("GET", "/api/admin/runner_status/all", None)
        .await?
        .success("Failed to get the runner status")?;

    Ok(response.data)
}

pub async fn get_user_lectures(http: &HttpClient, user_id: u64) -> Result<Vec<EnrolledLecture>> {
    let response = http
        .fetch::<EnrolledLectures>(
            "GET",
            &format!("/api/admin/users/{user_id}/enrolled_lectures"),
            None,
        )
        .await?
        .success("Failed to get the user's lectures")?;

    Ok(response.data.lectures)
}

pub async fn get_user_auto_targets(http: &HttpClient, user_id: u64) -> Result<Vec<u64>> {
    let response = http
        .fetch::<EnrolledLectures>(
            "GET",
            &format!("/api/admin/users/{user_id}/auto_attendance_targets"),
            None,
        )
        .await?
        .success("Failed to get the user's auto attendance")?;

    Ok(response
        .data
        .lectures
        .iter()
        .map(|lecture| lecture.lecture_id)
        .collect())
}

pub async fn set_user_auto_targets(
    http: &HttpClient,
    user_id: u64,
    lecture_ids: &[u64],
) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>(
            "POST",
            &format!("/api/admin/users/{user_id}/set_auto_attendance"),
            Some(lecture_ids_payload(lecture_ids)),
        )
        .await?
        .success("Failed to save the user's auto attendance")?;

    Ok(response.message)
}

pub async fn get_user_attendances(http: &HttpClient, user_id: u64) -> Result<Vec<AttendanceLog>> {
    let response = http
        .fetch::<AttendanceLogs>(
            "GET",
            &format!("/api/admin/users/{user_id}/attendances"),
            None,
        )
        .await?
        .success("Failed to get the user's attendance")?;

    Ok(response.data.attendances)
}

pub async fn get_lecture(http: &HttpClient, lecture_id: &str) -> Result<AdminLecture> {
    http.fetch::<AdminLectureResponse>("GET", &format!("/api/admin/lectures/{lecture_id}"), None)
        .await?
        .success("Lecture not found")?
        .data
        .lecture
        .ok_or_else(|| anyhow!("Lecture `{lecture_id}` not found"))
}

pub fn yes_no(value: Option<bool>) -> &'static str {
    if value.unwrap_or_default() {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_pro_key() {
        assert_eq!(parse_pro_key("PRO-1234-ABCD").unwrap(), "PRO-1234-ABCD");

        for key in ["", "PRO-1234/ABCD", "PRO?x=1", "../users", "PRO 1234"] {
            assert!(parse_pro_key(key).is_err(), "{key:?} should be rejected");
        }
    }
}
