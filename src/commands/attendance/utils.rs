use anyhow::{ensure, Result};
use regex::Regex;
use serde_json::{json, Value};

use super::types::{
    AttendanceLog, AttendanceLogs, AttendanceStatus, CourseAttendance, CourseAttendanceResponse,
    SubmitCode,
};
use crate::state::http::types::{Empty, Envelope};
use crate::state::http::{HttpClient, Payload};
use crate::utils::{format_kst, table};

/// Attendance codes are exactly three digits, leading zeros included.
pub fn validate_code(code: &str) -> Result<()> {
    let pattern = Regex::new(r"^[0-9]{3}$")?;

    ensure!(
        pattern.is_match(code),
        "The attendance code must be exactly 3 digits, got `{code}`"
    );

    Ok(())
}

/// PLATO course IDs are plain numbers, anything else would leak into the URL.
pub fn parse_course_id(course: &str) -> Result<String> {
    ensure!(
        !course.is_empty() && course.bytes().all(|byte| byte.is_ascii_digit()),
        "The course ID must be a number, got `{course}`"
    );

    Ok(course.to_string())
}

pub async fn get_status(http: &HttpClient) -> Result<Envelope<AttendanceStatus>> {
    http.fetch::<AttendanceStatus>("GET", "/api/attendance/status", None)
        .await
}

pub async fn submit_code(http: &HttpClient, code: &str) -> Result<Option<String>> {
    validate_code(code)?;

    let response = http
        .fetch::<Empty>(
            "POST",
            "/api/attendance/auto_attend",
            Some(Payload::Json(serde_json::to_value(SubmitCode {
                auth_code: code,
            })?)),
        )
        .await?
        .success("Attendance failed")?;

    Ok(response.message)
}

pub async fn brute_force(http: &HttpClient) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>("POST", "/api/attendance/bruteforce_attend", None)
        .await?
        .success("Attendance failed")?;

    Ok(response.message)
}

pub async fn get_logs(http: &HttpClient) -> Result<Vec<AttendanceLog>> {
    let response = http
        .fetch::<AttendanceLogs>("GET", "/api/attendance/logs", None)
        .await?
        .success("Failed to get attendance logs")?;

    Ok(response.data.attendances)
}

pub async fn get_course_attendance(http: &HttpClient, course: &str) -> Result<CourseAttendance> {
    let course = parse_course_id(course)?;

    let response = http
        .fetch::<CourseAttendanceResponse>("GET", &format!("/api/attendance/view/{course}"), None)
        .await?
        .success("Failed to get attendance from PLATO")?;

    Ok(response.data.data.unwrap_or_default())
}

/// Body of every "these lectures run on autopilot" request.
pub fn lecture_ids_payload(lecture_ids: &[u64]) -> Payload {
    Payload::Json(json!({ "lecture_ids": lecture_ids }))
}

pub fn format_logs(logs: &[AttendanceLog], title: bool) -> Result<Vec<String>> {
    let rows = logs.iter().map(|log| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            format_kst(&log.timestamp),
            log.lecture_name
                .clone()
                .unwrap_or_else(|| format!("lecture {}", log.lecture_id)),
            log.kind.as_deref().unwrap_or("-"),
            log.auth_code.as_deref().unwrap_or("-"),
            log.attendance_id,
        )
    });

    table(title.then_some("TIME (KST)\tLECTURE\tTYPE\tCODE\tID"), rows)
}

pub fn format_summary_value(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        Value::Null => "-".to_string(),
        value => value.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("042").is_ok());
        assert!(validate_code("999").is_ok());

        for code in ["", "42", "0420", "12a", " 123", "１２３"] {
            assert!(validate_code(code).is_err(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_course_id() {
        assert_eq!(parse_course_id("4411").unwrap(), "4411");

        for course in ["", "a/b", "12?x=1", "../me", "12 ", "１２"] {
            assert!(parse_course_id(course).is_err(), "{course:?} should be rejected");
        }
    }

    #[test]
    fn test_format_logs() {
        let logs: AttendanceLogs = serde_json::from_str(
            r#"{
                "status": "success",
                "count": 2,
                "attendances": [
                    {
                        "attendance_id": 31,
                        "lecture_id": 3,
                        "lecture_name": "Operating Systems",
                        "timestamp": "2024-03-04T01:30:00",
                        "type": "auto",
                        "auth_code": "042"
                    },
                    {
                        "attendance_id": 30,
                        "lecture_id": 9,
                        "lecture_name": null,
                        "timestamp": "2024-03-03T23:59:00",
                        "type": "manual",
                        "auth_code": null
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(logs.count, 2);

        let lines = format_logs(&logs.attendances, false).unwrap();

        assert!(lines[0].starts_with("2024-03-04 10:30:00"));
        assert!(lines[0].contains("Operating Systems"));
        assert!(lines[0].contains("042"));
        assert!(lines[1].starts_with("2024-03-04 08:59:00"));
        assert!(lines[1].contains("lecture 9"));
    }

    #[test]
    fn test_course_attendance_shape() {
        let response: Envelope<CourseAttendanceResponse> = serde_json::from_str(
            r#"{
                "status": "success",
                "data": {
                    "records": [{ "date": "03/04", "period": 1, "status": "present" }],
                    "summary": { "total": 30, "attended": 12 },
                    "lecture_name": "Operating Systems",
                    "gpt_summary": "Keep it up"
                }
            }"#,
        )
        .unwrap();

        let course = response.success("failed").unwrap().data.data.unwrap();

        assert_eq!(course.records.len(), 1);
        assert_eq!(format_summary_value(&course.summary["attended"]), "12");
        assert_eq!(course.gpt_summary.as_deref(), Some("Keep it up"));
    }

    #[test]
    fn test_lecture_ids_payload() {
        let Payload::Json(body) = lecture_ids_payload(&[3, 8]) else {
            panic!("expected a JSON payload");
        };

        assert_eq!(body, json!({ "lecture_ids": [3, 8] }));
    }
}
