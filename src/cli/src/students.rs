use client::{ApiClient, ListParams, Student};

use crate::render;

#[derive(clap::Subcommand)]
pub enum Opt {
    /// List students
    List(ListOpt),
    /// Show one student by numeric id
    Show { id: i64 },
    /// Look a student up by the external student code
    ByCode { code: String },
    /// Create a student record
    Create(Fields),
    /// Replace an existing student record
    Update {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Delete a student (asks for confirmation)
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Server-side search by name, department and/or enrollment year
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        enrollment_year: Option<i32>,
    },
    /// Departments that have students
    Departments,
    /// Enrollment years on record
    EnrollmentYears,
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
    /// External student code, e.g. STU-2024-001
    #[arg(long)]
    student_id: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone_number: Option<String>,
    /// ISO date, e.g. 2001-05-14
    #[arg(long)]
    date_of_birth: Option<String>,
    #[arg(long)]
    department: String,
    #[arg(long)]
    enrollment_year: Option<i32>,
}

impl Fields {
    fn into_student(self, id: Option<i64>) -> Student {
        Student {
            id,
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            department: self.department,
            enrollment_year: self.enrollment_year,
            created_at: None,
            updated_at: None,
        }
    }
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    match opt {
        Opt::List(opt) => {
            let mut students = api.students().list(&opt.page.to_params()?).await?;
            if let Some(needle) = &opt.filter {
                students = render::filter_by(students, needle, |s| s.full_name());
            }
            render::list(&students)
        }
        Opt::Show { id } => render::one(&api.students().get(id).await?),
        Opt::ByCode { code } => render::one(&api.students().by_code(&code).await?),
        Opt::Create(fields) => {
            let created = api.students().save(&fields.into_student(None)).await?;
            render::one(&created)
        }
        Opt::Update { id, fields } => {
            let updated = api.students().save(&fields.into_student(Some(id))).await?;
            render::one(&updated)
        }
        Opt::Delete { id, yes } => {
            if !yes && !render::confirm(&format!("delete student {id}?")).await? {
                println!("aborted");
                return Ok(());
            }
            api.students().delete(id).await?;
            let remaining = api.students().list(&ListParams::default()).await?;
            render::list(&remaining)
        }
        Opt::Search {
            name,
            department,
            enrollment_year,
        } => {
            let students = api
                .students()
                .search(name.as_deref(), department.as_deref(), enrollment_year)
                .await?;
            render::list(&students)
        }
        Opt::Departments => render::list(&api.students().departments().await?),
        Opt::EnrollmentYears => render::list(&api.students().enrollment_years().await?),
    }
}
