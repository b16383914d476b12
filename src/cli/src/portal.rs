//! The student self-service view. Everything here acts as the signed-in
//! student; the backend resolves the student from the session token.

use anyhow::Context as _;
use client::ApiClient;

use crate::render;

#[derive(clap::Subcommand)]
pub enum Opt {
    /// Courses still open for enrollment
    Available,
    /// Courses you are enrolled in
    Enrolled,
    /// Your registrations
    Registrations,
    /// Your results
    Results,
    /// Your GPA (server-computed)
    Gpa,
    /// Enroll in a course
    Enroll { course_id: i64 },
    /// Drop a course (asks for confirmation)
    Unenroll {
        course_id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    match opt {
        Opt::Available => render::list(&api.portal().available_courses().await?),
        Opt::Enrolled => render::list(&api.portal().enrolled_courses().await?),
        Opt::Registrations => render::list(&api.portal().my_registrations().await?),
        Opt::Results => render::list(&api.portal().my_results().await?),
        Opt::Gpa => {
            let student_id = api
                .state()
                .user()
                .and_then(|user| user.student_id)
                .context("this account has no linked student record")?;
            let gpa = api.results().student_gpa(student_id).await?;
            println!("{gpa:.2}");
            Ok(())
        }
        Opt::Enroll { course_id } => {
            let registration = api.portal().enroll(course_id).await?;
            println!("enrolled in course {course_id}");
            render::one(&registration)
        }
        Opt::Unenroll { course_id, yes } => {
            if !yes && !render::confirm(&format!("drop course {course_id}?")).await? {
                println!("aborted");
                return Ok(());
            }
            api.portal().unenroll(course_id).await?;
            println!("dropped course {course_id}");
            render::list(&api.portal().enrolled_courses().await?)
        }
    }
}
