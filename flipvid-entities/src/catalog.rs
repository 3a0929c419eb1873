/// An ordered section of the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub title: String,
    pub topics: Vec<Topic>,
}

impl Phase {
    /// URL slug derived from the title.
    pub fn slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "_")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub videos: Vec<Video>,
    pub quizzes: Vec<Quiz>,
}

/// A lecture video.
///
/// `id` identifies the video across manifest revisions and is the
/// reference comments are attached to. `pos` is the position within
/// the linear ordering of all videos and quizzes of the course.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id    : i64,
    pub pos   : i64,
    pub title : String,
    pub url   : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id    : i64,
    pub pos   : i64,
    pub title : String,
    pub url   : String,
}
