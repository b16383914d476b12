use client::{ApiClient, ListParams, Registration, RegistrationStatus};

use crate::render;

#[derive(clap::Subcommand)]
pub enum Opt {
    /// List registrations
    List(ListOpt),
    /// Show one registration by id
    Show { id: i64 },
    /// Registrations of one student
    ByStudent { student_id: i64 },
    /// Registrations for one course
    ByCourse { course_id: i64 },
    /// Registrations in a given status
    ByStatus { status: RegistrationStatus },
    /// Register a student for a course
    Create(Fields),
    /// Replace a registration (status and remarks)
    Update {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Change only the status of a registration
    SetStatus {
        id: i64,
        status: RegistrationStatus,
    },
    /// Delete a registration (asks for confirmation)
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Current enrolled headcount for a course
    Count { course_id: i64 },
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
    student_id: i64,
    #[arg(long)]
    course_id: i64,
    /// ENROLLED, DROPPED or COMPLETED
    #[arg(long, default_value = "ENROLLED")]
    status: RegistrationStatus,
    #[arg(long)]
    remarks: Option<String>,
}

impl Fields {
    fn into_registration(self, id: Option<i64>) -> Registration {
        Registration {
            id,
            student_id: self.student_id,
            student_name: None,
            course_id: self.course_id,
            course_code: None,
            course_title: None,
            registration_date: None,
            status: self.status,
            remarks: self.remarks,
        }
    }
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    match opt {
        Opt::List(opt) => {
            let mut registrations = api.registrations().list(&opt.page.to_params()?).await?;
            if let Some(needle) = &opt.filter {
                registrations = render::filter_by(registrations, needle, |r| {
                    r.student_name.clone().unwrap_or_default()
                });
            }
            render::list(&registrations)
        }
        Opt::Show { id } => render::one(&api.registrations().get(id).await?),
        Opt::ByStudent { student_id } => {
            render::list(&api.registrations().by_student(student_id).await?)
        }
        Opt::ByCourse { course_id } => {
            render::list(&api.registrations().by_course(course_id).await?)
        }
        Opt::ByStatus { status } => render::list(&api.registrations().by_status(status).await?),
        Opt::Create(fields) => {
            let created = api
                .registrations()
                .save(&fields.into_registration(None))
                .await?;
            render::one(&created)
        }
        Opt::Update { id, fields } => {
            let updated = api
                .registrations()
                .save(&fields.into_registration(Some(id)))
                .await?;
            render::one(&updated)
        }
        Opt::SetStatus { id, status } => {
            render::one(&api.registrations().update_status(id, status).await?)
        }
        Opt::Delete { id, yes } => {
            if !yes && !render::confirm(&format!("delete registration {id}?")).await? {
                println!("aborted");
                return Ok(());
            }
            api.registrations().delete(id).await?;
            let remaining = api.registrations().list(&ListParams::default()).await?;
            render::list(&remaining)
        }
        Opt::Count { course_id } => {
            let count = api.registrations().enrolled_count(course_id).await?;
            println!("{count}");
            Ok(())
        }
    }
}
