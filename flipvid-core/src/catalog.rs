// Lookups in the phase -> topic -> {videos, quizzes} tree that is
// loaded from the remote course manifest.

use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogItem<'a> {
    Video(&'a Video),
    Quiz(&'a Quiz),
}

impl<'a> CatalogItem<'a> {
    pub fn pos(&self) -> i64 {
        match self {
            Self::Video(v) => v.pos,
            Self::Quiz(q) => q.pos,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            Self::Video(v) => &v.title,
            Self::Quiz(q) => &q.title,
        }
    }

    pub fn page_path(&self) -> String {
        match self {
            Self::Video(v) => format!("/videos/{}", v.pos),
            Self::Quiz(q) => format!("/quizzes/{}", q.pos),
        }
    }
}

/// Finds the video or quiz at the given position.
///
/// Both prev/next navigation targets are resolved with `pos - 1` and
/// `pos + 1`, which may legitimately be absent at the boundaries of
/// the course.
pub fn find_by_pos(phases: &[Phase], pos: i64) -> Option<CatalogItem<'_>> {
    for phase in phases {
        for topic in &phase.topics {
            if let Some(video) = topic.videos.iter().find(|v| v.pos == pos) {
                return Some(CatalogItem::Video(video));
            }
            if let Some(quiz) = topic.quizzes.iter().find(|q| q.pos == pos) {
                return Some(CatalogItem::Quiz(quiz));
            }
        }
    }
    None
}

pub fn find_video_by_pos(phases: &[Phase], pos: i64) -> Option<(&Phase, &Video)> {
    phases.iter().find_map(|phase| {
        phase
            .topics
            .iter()
            .flat_map(|topic| &topic.videos)
            .find(|video| video.pos == pos)
            .map(|video| (phase, video))
    })
}

pub fn find_quiz_by_pos(phases: &[Phase], pos: i64) -> Option<(&Phase, &Quiz)> {
    phases.iter().find_map(|phase| {
        phase
            .topics
            .iter()
            .flat_map(|topic| &topic.quizzes)
            .find(|quiz| quiz.pos == pos)
            .map(|quiz| (phase, quiz))
    })
}

pub fn find_phase_by_slug<'a>(phases: &'a [Phase], slug: &str) -> Option<&'a Phase> {
    phases.iter().find(|phase| phase.slug() == slug)
}
