use super::prelude::*;

pub fn mark_video_watched<R: WatchedVideoRepo>(repo: &R, user_id: &Id, video_id: i64) -> Result<()> {
    Ok(repo.mark_video_watched(user_id.as_ref(), video_id)?)
}

pub fn is_video_watched<R: WatchedVideoRepo>(
    repo: &R,
    user_id: &Id,
    video_id: i64,
) -> Result<bool> {
    Ok(repo.is_video_watched(user_id.as_ref(), video_id)?)
}
