use anyhow::Result;

use super::{account, admin, attendance, auto, home, lectures, onboarding, pages, pro, review};
use crate::config::EXEC_NAME;
use crate::routes::Route;
use crate::state::State;

/// Renders the default content of a view, what opening its path shows.
pub async fn render(route: &Route, state: &State) -> Result<()> {
    match route {
        Route::Home => home::handle(&home::Options::default(), state).await,
        Route::Onboarding => onboarding::render(state).await,
        Route::Terms => pages::terms(),
        Route::Privacy => pages::privacy(),
        Route::BugReport => pages::bug_report(),
        Route::Forbidden => pages::forbidden(),
        Route::ManageLectures => lectures::list::handle(&lectures::list::Options::default(), state).await,
        Route::Attendance => attendance::status::handle(state).await,
        Route::AttendanceLogs => {
            attendance::logs::handle(&attendance::logs::Options::default(), state).await
        }
        Route::AttendanceDetail(course) => attendance::view::show(course, state).await,
        Route::AccountEdit => account::show::handle(state).await,
        Route::BruteAttendOptions => auto::list::handle(&auto::list::Options::default(), state).await,
        Route::AssignmentReview => review::render(),
        Route::ProKeyVerify => pro::verify::render(),
        Route::ProAd => pro::info::render(),
        Route::AdminDashboard => admin::dashboard::render(),
        Route::AdminProKeys => {
            admin::keys::list::handle(&admin::keys::list::Options::default(), state).await
        }
        Route::AdminUsers => {
            admin::users::list::handle(&admin::users::list::Options::default(), state).await
        }
        Route::AdminUserRunners => admin::runners::status::handle(state).await,
        Route::AdminLecture(lecture) => admin::lecture::show(lecture.as_deref(), state).await,
    }
}

pub fn not_found(path: &str) {
    log::info!("Nothing lives at `{path}`");
    log::info!("Run `{EXEC_NAME} --help` to see what you can do");
}
