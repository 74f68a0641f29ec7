use serde::Deserialize;
use serde_json::Value;

use crate::commands::lectures::types::Schedule;

#[derive(Debug, Clone, Deserialize)]
pub struct ProKey {
    pub key: String,
    #[serde(default)]
    pub is_used: Option<bool>,
    #[serde(default)]
    pub used_by: Option<Value>,
    #[serde(default)]
    pub used_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProKeys {
    #[serde(default)]
    pub prokeys: Vec<ProKey>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatedKeys {
    #[serde(default)]
    pub created: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub is_pro: Option<bool>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub firebase_uid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Users {
    #[serde(default)]
    pub users: Vec<User>,
}

/// One user and lecture pair the attendance runner watches.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerTarget {
    pub user_id: u64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    pub lecture_id: u64,
    #[serde(default)]
    pub lecture_name: Option<String>,
    #[serde(default)]
    pub lecture_code: Option<String>,
    #[serde(default)]
    pub lecture_section: Option<String>,
    #[serde(default)]
    pub plato_course_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RunnerStatus {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub data: Vec<RunnerTarget>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminLecture {
    pub lecture_id: u64,
    #[serde(default)]
    pub plato_course_id: Option<u64>,
    #[serde(default)]
    pub lecture_name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminLectureResponse {
    #[serde(default)]
    pub lecture: Option<AdminLecture>,
}
