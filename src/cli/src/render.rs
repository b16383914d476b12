//! Output and shared view helpers.

use anyhow::Context as _;
use client::{ListParams, SortDir};
use serde::Serialize;

pub fn one<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn list<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(items)?);
    eprintln!("{} item(s)", items.len());
    Ok(())
}

/// Case-insensitive substring filter over a display key, applied after the
/// server responds. Mirrors the search box of the original UI.
pub fn filter_by<T>(items: Vec<T>, needle: &str, key: impl Fn(&T) -> String) -> Vec<T> {
    let needle = needle.to_lowercase();
    items
        .into_iter()
        .filter(|item| key(item).to_lowercase().contains(&needle))
        .collect()
}

pub async fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let prompt = prompt.to_string();
    tokio::task::spawn_blocking(move || -> anyhow::Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(Into::into)
    })
    .await
    .context("confirmation prompt task failed")?
}

/// Paging/sorting flags shared by every list command; passed through to the
/// server untouched.
#[derive(clap::Args)]
pub struct PageOpt {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub size: Option<u32>,
    /// Field to sort by, e.g. `lastName`
    #[arg(long)]
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    #[arg(long)]
    pub sort_dir: Option<String>,
}

impl PageOpt {
    pub fn to_params(&self) -> anyhow::Result<ListParams> {
        let sort_dir = match self.sort_dir.as_deref() {
            None => None,
            Some("asc") => Some(SortDir::Asc),
            Some("desc") => Some(SortDir::Desc),
            Some(other) => anyhow::bail!("sort direction must be asc or desc, got {other:?}"),
        };
        Ok(ListParams {
            page: self.page,
            size: self.size,
            sort_by: self.sort_by.clone(),
            sort_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let names = vec![
            "Alice Johnson".to_string(),
            "Bob Smith".to_string(),
            "Carol Jones".to_string(),
        ];
        let hits = filter_by(names, "smith", |n| n.clone());
        assert_eq!(hits, vec!["Bob Smith".to_string()]);
    }

    #[test]
    fn empty_needle_keeps_everything() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(filter_by(names.clone(), "", |n| n.clone()), names);
    }
}
