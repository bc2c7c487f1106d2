// src/pipeline.rs
//! One independent fetch → parse → render job per container.

use anyhow::Result;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info, instrument};

use crate::fetch::{fetch_text, Base};
use crate::page::Container;
use crate::parse::{build_table, Table};
use crate::render::Renderer;

/// A container whose grid was produced.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub container: Container,
    pub table: Table,
    pub fragment: String,
}

/// Everything the jobs produced, in discovery order.
#[derive(Debug, Default)]
pub struct Outcome {
    pub rendered: Vec<Rendered>,
    pub failed: Vec<(Container, String)>,
}

#[instrument(level = "info", skip(client, base, renderer), fields(resource = %container.resource))]
pub async fn render_container(
    client: &Client,
    base: &Base,
    renderer: &dyn Renderer,
    container: Container,
) -> Result<Rendered> {
    let start = Instant::now();
    let text = fetch_text(client, base, &container.resource).await?;
    let table = build_table(&text);
    let fragment = renderer.render(&container, &table)?;
    info!(rows = table.row_count(), elapsed = ?start.elapsed(), "rendered");
    Ok(Rendered {
        container,
        table,
        fragment,
    })
}

/// Spawn a task per container and wait for all of them.
///
/// A failing job does not affect the others and gets no fallback grid.
pub async fn run(
    client: &Client,
    base: Arc<Base>,
    renderer: Arc<dyn Renderer>,
    containers: Vec<Container>,
) -> Outcome {
    info!("{} containers to render", containers.len());

    let handles = containers.into_iter().map(|container| {
        let client = client.clone();
        let base = Arc::clone(&base);
        let renderer = Arc::clone(&renderer);
        let job = container.clone();
        let task = tokio::spawn(async move {
            render_container(&client, &base, renderer.as_ref(), job).await
        });
        async move { (container, task.await) }
    });

    let mut outcome = Outcome::default();
    for (container, joined) in join_all(handles).await {
        match joined {
            Ok(Ok(rendered)) => outcome.rendered.push(rendered),
            Ok(Err(err)) => {
                error!("{} failed: {:#}", container.resource, err);
                outcome.failed.push((container, format!("{:#}", err)));
            }
            Err(join_err) => {
                error!("{} task aborted: {}", container.resource, join_err);
                outcome.failed.push((container, join_err.to_string()));
            }
        }
    }

    info!(
        rendered = outcome.rendered.len(),
        failed = outcome.failed.len(),
        "all jobs finished"
    );
    outcome
}
