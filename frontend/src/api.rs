use common::Forest;
use gloo_net::http::Request;

pub async fn fetch_snippets() -> Result<Forest, gloo_net::Error> {
    let resp = Request::get("/api/snippets").send().await?;

    if resp.ok() {
        resp.json().await
    } else {
        Err(gloo_net::Error::GlooError(format!(
            "loading snippets failed: {}",
            resp.status()
        )))
    }
}

pub async fn save_snippets(forest: &Forest) -> Result<(), gloo_net::Error> {
    let resp = Request::post("/api/snippets")
        .json(forest)?
        .send()
        .await?;

    if resp.ok() {
        Ok(())
    } else {
        Err(gloo_net::Error::GlooError(format!(
            "saving snippets failed: {}",
            resp.status()
        )))
    }
}

pub async fn delete_snippets(id: &str, replacement: &Forest) -> Result<(), gloo_net::Error> {
    let resp = Request::delete(&format!("/api/snippets/{id}"))
        .json(replacement)?
        .send()
        .await?;

    if resp.ok() {
        Ok(())
    } else {
        Err(gloo_net::Error::GlooError(format!(
            "deleting snippet failed: {}",
            resp.status()
        )))
    }
}
