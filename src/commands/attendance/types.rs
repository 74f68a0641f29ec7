use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /api/attendance/status`.
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceStatus {
    #[serde(default)]
    pub can_attend: bool,
    #[serde(default)]
    pub lecture_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitCode<'a> {
    pub auth_code: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceLog {
    pub attendance_id: u64,
    pub lecture_id: u64,
    #[serde(default)]
    pub lecture_name: Option<String>,
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub auth_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceLogs {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub attendances: Vec<AttendanceLog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub date: String,
    #[serde(default)]
    pub period: Option<Value>,
    pub status: String,
}

/// Attendance of a single PLATO course, as PLATO itself reports it.
#[derive(Debug, Default, Deserialize)]
pub struct CourseAttendance {
    #[serde(default)]
    pub lecture_name: Option<String>,
    #[serde(default)]
    pub gpt_summary: Option<String>,
    #[serde(default)]
    pub summary: BTreeMap<String, Value>,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseAttendanceResponse {
    #[serde(default)]
    pub data: Option<CourseAttendance>,
}
