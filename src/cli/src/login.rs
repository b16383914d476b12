use anyhow::Context as _;
use client::ApiClient;

#[derive(clap::Args)]
pub struct Opt {
    /// Username. If not provided, will be requested on stdin.
    #[arg(long)]
    username: Option<String>,
    /// Password. If not provided, will be requested without echo.
    #[arg(long)]
    password: Option<String>,
}

pub async fn ask(prompt: &str) -> anyhow::Result<String> {
    let prompt = prompt.to_string();
    tokio::task::spawn_blocking(move || -> anyhow::Result<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(Into::into)
    })
    .await
    .context("input prompt task failed")?
}

pub async fn ask_password() -> anyhow::Result<String> {
    tokio::task::spawn_blocking(|| -> anyhow::Result<String> {
        dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(Into::into)
    })
    .await
    .context("password prompt task failed")?
}

pub async fn exec(opt: Opt, api: &ApiClient) -> anyhow::Result<()> {
    let username = match opt.username {
        Some(username) => username,
        None => ask("Username").await?,
    };
    let password = match opt.password {
        Some(password) => password,
        None => ask_password().await?,
    };
    let user = api
        .login(&username, &password)
        .await
        .context("login failed")?;
    println!("signed in as {} ({})", user.username, user.role);
    Ok(())
}
