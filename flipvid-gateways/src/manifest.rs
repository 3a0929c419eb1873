use anyhow::{Context as _, Result};
use serde::Deserialize;

use flipvid_core::{entities::*, gateways::CatalogGateway};

/// Loads the course catalog from a remotely hosted JSON manifest.
pub struct ManifestGateway {
    url: String,
    client: reqwest::blocking::Client,
}

impl ManifestGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl CatalogGateway for ManifestGateway {
    fn load_phases(&self) -> Result<Vec<Phase>> {
        log::info!("Loading the course manifest from {}", self.url);
        let manifest: Manifest = self
            .client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("Failed to fetch the course manifest from {}", self.url))?
            .json()
            .context("Failed to decode the course manifest")?;
        Ok(manifest.phases.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    phases: Vec<ManifestPhase>,
}

#[derive(Debug, Deserialize)]
struct ManifestPhase {
    title: String,
    #[serde(default)]
    topics: Vec<ManifestTopic>,
}

#[derive(Debug, Deserialize)]
struct ManifestTopic {
    title: String,
    #[serde(default)]
    videos: Vec<ManifestVideo>,
    #[serde(default)]
    quizzes: Vec<ManifestQuiz>,
}

#[derive(Debug, Deserialize)]
struct ManifestVideo {
    id: i64,
    pos: i64,
    title: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ManifestQuiz {
    id: i64,
    pos: i64,
    title: String,
    url: String,
}

impl From<ManifestPhase> for Phase {
    fn from(from: ManifestPhase) -> Self {
        let ManifestPhase { title, topics } = from;
        Self {
            title,
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ManifestTopic> for Topic {
    fn from(from: ManifestTopic) -> Self {
        let ManifestTopic {
            title,
            videos,
            quizzes,
        } = from;
        Self {
            title,
            videos: videos.into_iter().map(Into::into).collect(),
            quizzes: quizzes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ManifestVideo> for Video {
    fn from(from: ManifestVideo) -> Self {
        let ManifestVideo {
            id,
            pos,
            title,
            url,
        } = from;
        Self {
            id,
            pos,
            title,
            url,
        }
    }
}

impl From<ManifestQuiz> for Quiz {
    fn from(from: ManifestQuiz) -> Self {
        let ManifestQuiz {
            id,
            pos,
            title,
            url,
        } = from;
        Self {
            id,
            pos,
            title,
            url,
        }
    }
}
