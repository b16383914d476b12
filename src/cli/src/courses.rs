use client::{ApiClient, Course, ListParams};

use crate::render;

#[derive(clap::Subcommand)]
pub enum Opt {
    /// List courses
    List(ListOpt),
    /// Show one course by numeric id
    Show { id: i64 },
    /// Look a course up by its code
    ByCode { code: String },
    /// Create a course
    Create(Fields),
    /// Replace an existing course
    Update {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Delete a course (asks for confirmation)
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Server-side search by title, department and/or credit range
    Search {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        min_credits: Option<i32>,
        #[arg(long)]
        max_credits: Option<i32>,
    },
    /// Departments that offer courses
    Departments,
}

#[derive(clap::Args)]
pub struct ListOpt {
    #[command(flatten)]
    page: render::PageOpt,
    /// Case-insensitive substring filter on the course title (client side)
    #[arg(long)]
    filter: Option<String>,
}

#[derive(clap::Args)]
pub struct Fields {
    /// Course code, e.g. CS-101
    #[arg(long)]
    code: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    credits: i32,
    #[arg(long)]
    department: String,
    #[arg(long)]
    max_enrollment: Option<i32>,
}

impl Fields {
    fn into_course(self, id: Option<i64>) -> Course {
        Course {
            id,
            code: self.code,
            title: self.title,
            description: self.description,
            credits: self.credits,
            department: self.department,
            max_enrollment: self.max_enrollment,
            current_enrollment: None,
            created_at: None,
            updated_at: None,
        }
    }
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    match opt {
        Opt::List(opt) => {
            let mut courses = api.courses().list(&opt.page.to_params()?).await?;
            if let Some(needle) = &opt.filter {
                courses = render::filter_by(courses, needle, |c| c.title.clone());
            }
            render::list(&courses)
        }
        Opt::Show { id } => render::one(&api.courses().get(id).await?),
        Opt::ByCode { code } => render::one(&api.courses().by_code(&code).await?),
        Opt::Create(fields) => {
            let created = api.courses().save(&fields.into_course(None)).await?;
            render::one(&created)
        }
        Opt::Update { id, fields } => {
            let updated = api.courses().save(&fields.into_course(Some(id))).await?;
            render::one(&updated)
        }
        Opt::Delete { id, yes } => {
            if !yes && !render::confirm(&format!("delete course {id}?")).await? {
                println!("aborted");
                return Ok(());
            }
            api.courses().delete(id).await?;
            let remaining = api.courses().list(&ListParams::default()).await?;
            render::list(&remaining)
        }
        Opt::Search {
            title,
            department,
            min_credits,
            max_credits,
        } => {
            let courses = api
                .courses()
                .search(title.as_deref(), department.as_deref(), min_credits, max_credits)
                .await?;
            render::list(&courses)
        }
        Opt::Departments => render::list(&api.courses().departments().await?),
    }
}
