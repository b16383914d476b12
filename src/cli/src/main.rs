mod courses;
mod dashboard;
mod guard;
mod login;
mod portal;
mod register;
mod registrations;
mod render;
mod results;
mod students;

use clap::Parser;
use client::Role;
use guard::{Access, RouteDecision};

/// Command-line front end for the university course management system.
///
/// Set UCM_API to point at the backend (default http://localhost:8080/api).
#[derive(Parser)]
#[command(author, version, about)]
struct Opt {
    #[command(subcommand)]
    sub: SubOpt,
}

#[derive(clap::Subcommand)]
enum SubOpt {
    /// Sign in and store the session token
    Login(login::Opt),
    /// Create an account (and sign in)
    Register(register::Opt),
    /// Discard the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Admin overview: entity counts across the system
    Dashboard,
    /// Manage student records
    #[command(subcommand)]
    Students(students::Opt),
    /// Manage courses
    #[command(subcommand)]
    Courses(courses::Opt),
    /// Manage course registrations
    #[command(subcommand)]
    Registrations(registrations::Opt),
    /// Manage exam results
    #[command(subcommand)]
    Results(results::Opt),
    /// Student self-service
    #[command(subcommand)]
    Portal(portal::Opt),
}

fn access(sub: &SubOpt) -> Access {
    match sub {
        SubOpt::Login(_) | SubOpt::Register(_) => Access::Guest,
        SubOpt::Logout => Access::Open,
        SubOpt::Whoami => Access::Authenticated,
        SubOpt::Portal(_) => Access::Role(Role::Student),
        SubOpt::Dashboard
        | SubOpt::Students(_)
        | SubOpt::Courses(_)
        | SubOpt::Registrations(_)
        | SubOpt::Results(_) => Access::Role(Role::Admin),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    let api = client::connect().await?;
    let state = api.bootstrap().await?;
    tracing::debug!(?state, "session bootstrapped");

    match guard::route(&api.state(), access(&opt.sub)) {
        RouteDecision::Render => {}
        RouteDecision::Wait => {
            // bootstrap() has completed by now, so the session can only be
            // Authenticated or Anonymous.
            anyhow::bail!("session is still loading, try again");
        }
        RouteDecision::ToLogin => {
            anyhow::bail!("not signed in; run `ucm-cli login` first");
        }
        RouteDecision::ToDefault(role) => {
            let view = guard::default_view(role);
            if matches!(opt.sub, SubOpt::Login(_) | SubOpt::Register(_)) {
                println!("already signed in; run `ucm-cli logout` to switch accounts");
                return Ok(());
            }
            anyhow::bail!("this view is not available for your role; try `ucm-cli {view}`");
        }
    }

    match opt.sub {
        SubOpt::Login(opt) => login::exec(opt, &api).await,
        SubOpt::Register(opt) => register::exec(opt, &api).await,
        SubOpt::Logout => {
            api.logout().await?;
            println!("signed out");
            Ok(())
        }
        SubOpt::Whoami => {
            let user = api.current_user().await?;
            render::one(&user)
        }
        SubOpt::Dashboard => dashboard::exec(&api).await,
        SubOpt::Students(opt) => students::exec(opt, &api).await,
        SubOpt::Courses(opt) => courses::exec(opt, &api).await,
        SubOpt::Registrations(opt) => registrations::exec(opt, &api).await,
        SubOpt::Results(opt) => results::exec(opt, &api).await,
        SubOpt::Portal(opt) => portal::exec(opt, &api).await,
    }
}
