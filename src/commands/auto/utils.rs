use anyhow::Result;

use super::types::{AutoCourses, EnrolledLecture, EnrolledLectures};
use crate::commands::attendance::utils::lecture_ids_payload;
use crate::commands::lectures::utils::format_schedule;
use crate::state::http::types::{Empty, Envelope};
use crate::state::http::HttpClient;
use crate::utils::table;

pub async fn get_auto_courses(http: &HttpClient) -> Result<Envelope<AutoCourses>> {
    http.fetch::<AutoCourses>("GET", "/api/attendance/current_auto_attend_courses", None)
        .await?
        .success("Failed to get auto attendance courses")
}

pub async fn get_enrolled_lectures(http: &HttpClient) -> Result<Vec<EnrolledLecture>> {
    let response = http
        .fetch::<EnrolledLectures>("GET", "/api/attendance/my_lectures", None)
        .await?
        .success("Failed to get your lectures")?;

    Ok(response.data.lectures)
}

/// Replaces the whole auto attendance selection, an empty list turns it off.
pub async fn set_auto_lectures(http: &HttpClient, lecture_ids: &[u64]) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>(
            "POST",
            "/api/attendance/set_auto_attendance",
            Some(lecture_ids_payload(lecture_ids)),
        )
        .await?
        .success("Failed to save auto attendance")?;

    Ok(response.message)
}

/// Lecture table with a marker on the ones in `enabled`.
pub fn format_enrolled(lectures: &[EnrolledLecture], enabled: &[u64]) -> Result<Vec<String>> {
    let rows = lectures.iter().map(|lecture| {
        let schedules = lecture
            .schedules
            .iter()
            .map(format_schedule)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}\t{}\t{}\t{}-{}\t{}",
            if enabled.contains(&lecture.lecture_id) { "*" } else { "" },
            lecture.lecture_id,
            lecture.lecture_name.as_deref().unwrap_or("-"),
            lecture.code.as_deref().unwrap_or("-"),
            lecture.section.as_deref().unwrap_or("-"),
            if schedules.is_empty() { "no timetable" } else { schedules.as_str() }
        )
    });

    table(Some("AUTO\tID\tNAME\tCODE\tSCHEDULE"), rows)
}
