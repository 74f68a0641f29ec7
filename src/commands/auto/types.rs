use serde::Deserialize;

use crate::commands::lectures::types::Schedule;

#[derive(Debug, Clone, Deserialize)]
pub struct AutoCourse {
    pub lecture_id: u64,
    #[serde(default)]
    pub lecture_name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AutoCourses {
    #[serde(default)]
    pub courses: Vec<AutoCourse>,
}

/// A lecture with its timetable, as the auto attendance endpoints list them.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrolledLecture {
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
pub struct EnrolledLectures {
    #[serde(default)]
    pub lectures: Vec<EnrolledLecture>,
}
