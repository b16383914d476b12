//! Admin overview: entity counts over the default listings, fetched
//! concurrently the way the original dashboard populated its summary
//! cards.

use client::{ApiClient, ListParams};

pub async fn exec(api: &ApiClient) -> anyhow::Result<()> {
    let params = ListParams::default();
    // the accessors must outlive the futures borrowing them
    let students = api.students();
    let courses = api.courses();
    let registrations = api.registrations();
    let results = api.results();
    let (students, courses, registrations, results) = futures::try_join!(
        students.list(&params),
        courses.list(&params),
        registrations.list(&params),
        results.list(&params),
    )?;

    println!("students       {}", students.len());
    println!("courses        {}", courses.len());
    println!("registrations  {}", registrations.len());
    println!("results        {}", results.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client::{ApiClient, MemoryTokenStore};
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn overview_fans_out_to_all_four_listings() {
        let server = MockServer::start_async().await;
        let mut mocks = Vec::new();
        for path in ["/students", "/courses", "/registrations", "/results"] {
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).json_body(json!([]));
                })
                .await;
            mocks.push(mock);
        }

        let api = ApiClient::new(server.base_url(), Arc::new(MemoryTokenStore::new())).unwrap();
        exec(&api).await.unwrap();
        for mock in mocks {
            mock.assert_async().await;
        }
    }
}
