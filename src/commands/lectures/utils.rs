use anyhow::Result;

use super::types::{Lecture, MyLectures, NextLecture, Schedule};
use crate::state::http::types::Empty;
use crate::state::http::HttpClient;
use crate::utils::table;

pub async fn get_my_lectures(http: &HttpClient) -> Result<Vec<Lecture>> {
    let response = http
        .fetch::<MyLectures>("GET", "/api/lectures/my", None)
        .await?
        .success("Failed to get your lectures")?;

    Ok(response.data.my_lectures)
}

/// Re-reads the lecture list and timetable from PLATO, can take a while.
pub async fn sync_lectures(http: &HttpClient) -> Result<Option<String>> {
    let response = http
        .fetch::<Empty>("POST", "/api/lectures/update", None)
        .await?
        .success("Failed to sync lectures from PLATO")?;

    Ok(response.message)
}

pub async fn update_locations(http: &HttpClient) -> Result<Vec<Lecture>> {
    let response = http
        .fetch::<MyLectures>("POST", "/api/lectures/update_location", None)
        .await?
        .success("Failed to update lecture rooms")?;

    Ok(response.data.my_lectures)
}

/// `None` when the server could not be asked, which views treat as "nothing scheduled".
pub async fn get_next_lecture(http: &HttpClient) -> Result<Option<NextLecture>> {
    http.request::<NextLecture>("GET", "/api/lectures/next", None)
        .await
}

pub fn format_room(schedule: &Schedule) -> String {
    match &schedule.location_details {
        Some(details) => {
            let building = details
                .building_name
                .as_deref()
                .or(details.building_code.as_deref())
                .unwrap_or("?");

            match &details.room_number {
                Some(room) => format!("{building} {room}"),
                None => building.to_string(),
            }
        }

        None => schedule.location.clone().unwrap_or_else(|| "-".to_string()),
    }
}

pub fn format_schedule(schedule: &Schedule) -> String {
    format!("{} {}~{}", schedule.weekday, schedule.start, schedule.end)
}

pub fn format_lectures(lectures: &[Lecture], title: bool) -> Result<Vec<String>> {
    let rows = lectures.iter().map(|lecture| {
        let schedules = if lecture.schedules.is_empty() {
            "-".to_string()
        } else {
            lecture
                .schedules
                .iter()
                .map(|schedule| format!("{} ({})", format_schedule(schedule), format_room(schedule)))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "{}\t{}\t{}-{}\t{}\t{}",
            lecture.id,
            lecture.name,
            lecture.code,
            lecture.section,
            lecture
                .plato_course_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            schedules
        )
    });

    table(title.then_some("ID\tNAME\tCODE\tCOURSE\tSCHEDULE"), rows)
}
