use client::{ApiClient, ExamResult, ListParams};

use crate::render;

#[derive(clap::Subcommand)]
pub enum Opt {
    /// List results
    List(ListOpt),
    /// Show one result by id
    Show { id: i64 },
    /// The result recorded for one registration
    ByRegistration { registration_id: i64 },
    /// All results of one student
    ByStudent { student_id: i64 },
    /// All results for one course
    ByCourse { course_id: i64 },
    /// Record marks for a registration (grade is computed server-side)
    Create(Fields),
    /// Replace a recorded result
    Update {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Delete a result (asks for confirmation)
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Server-computed GPA of a student
    Gpa { student_id: i64 },
    /// Server-computed average marks of a course
    Average { course_id: i64 },
    /// Results within a marks range
    SearchMarks {
        #[arg(long)]
        min: f64,
        #[arg(long)]
        max: f64,
    },
}

#[derive(clap::Args)]
pub struct ListOpt {
    #[command(flatten)]
    page: render::PageOpt,
    /// Case-insensitive substring filter on the student name (client side)
    #[arg(long)]
    filter: Option<String>,
}

#[derive(clap::Args)]
pub struct Fields {
    #[arg(long)]
    registration_id: i64,
    /// 0 to 100
    #[arg(long)]
    marks: f64,
    #[arg(long)]
    feedback: Option<String>,
}

impl Fields {
    fn into_result(self, id: Option<i64>) -> ExamResult {
        ExamResult {
            id,
            registration_id: self.registration_id,
            student_id: None,
            student_name: None,
            course_id: None,
            course_code: None,
            course_title: None,
            marks: self.marks,
            grade: None,
            gpa_points: None,
            feedback: self.feedback,
            result_date: None,
            created_at: None,
            updated_at: None,
        }
    }
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    match opt {
        Opt::List(opt) => {
            let mut results = api.results().list(&opt.page.to_params()?).await?;
            if let Some(needle) = &opt.filter {
                results = render::filter_by(results, needle, |r| {
                    r.student_name.clone().unwrap_or_default()
                });
            }
            render::list(&results)
        }
        Opt::Show { id } => render::one(&api.results().get(id).await?),
        Opt::ByRegistration { registration_id } => {
            render::one(&api.results().by_registration(registration_id).await?)
        }
        Opt::ByStudent { student_id } => {
            render::list(&api.results().by_student(student_id).await?)
        }
        Opt::ByCourse { course_id } => render::list(&api.results().by_course(course_id).await?),
        Opt::Create(fields) => {
            let created = api.results().save(&fields.into_result(None)).await?;
            render::one(&created)
        }
        Opt::Update { id, fields } => {
            let updated = api.results().save(&fields.into_result(Some(id))).await?;
            render::one(&updated)
        }
        Opt::Delete { id, yes } => {
            if !yes && !render::confirm(&format!("delete result {id}?")).await? {
                println!("aborted");
                return Ok(());
            }
            api.results().delete(id).await?;
            let remaining = api.results().list(&ListParams::default()).await?;
            render::list(&remaining)
        }
        Opt::Gpa { student_id } => {
            let gpa = api.results().student_gpa(student_id).await?;
            println!("{gpa:.2}");
            Ok(())
        }
        Opt::Average { course_id } => {
            let average = api.results().course_average(course_id).await?;
            println!("{average:.2}");
            Ok(())
        }
        Opt::SearchMarks { min, max } => {
            render::list(&api.results().search_by_marks(min, max).await?)
        }
    }
}
