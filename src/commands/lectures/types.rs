use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub building_code: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub weekday: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_details: Option<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lecture {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub section: String,
    #[serde(default)]
    pub plato_course_id: Option<u64>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MyLectures {
    #[serde(default)]
    pub my_lectures: Vec<Lecture>,
}

/// Response of `GET /api/lectures/next`.
#[derive(Debug, Default, Deserialize)]
pub struct NextLecture {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}
