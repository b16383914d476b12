use anyhow::Context as _;
use client::{ApiClient, RegisterRequest, Role};

use crate::login;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RoleArg {
    Admin,
    Student,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Role {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Student => Role::Student,
        }
    }
}

#[derive(clap::Args)]
pub struct Opt {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, value_enum)]
    role: RoleArg,
    /// Password. If not provided, will be requested without echo.
    #[arg(long)]
    password: Option<String>,
    /// External student code; required for student accounts.
    #[arg(long)]
    student_id: Option<String>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
    /// ISO date, e.g. 2001-05-14.
    #[arg(long)]
    date_of_birth: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    enrollment_year: Option<i32>,
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    let password = match opt.password {
        Some(password) => password,
        None => login::ask_password().await?,
    };
    let request = RegisterRequest {
        username: opt.username,
        password,
        email: opt.email,
        role: opt.role.into(),
        student_id: opt.student_id,
        first_name: opt.first_name,
        last_name: opt.last_name,
        phone_number: opt.phone_number,
        date_of_birth: opt.date_of_birth,
        department: opt.department,
        enrollment_year: opt.enrollment_year,
    };
    let user = api
        .register(&request)
        .await
        .context("registration failed")?;
    println!("account created, signed in as {} ({})", user.username, user.role);
    Ok(())
}
