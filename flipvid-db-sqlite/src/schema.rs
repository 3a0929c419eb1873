table! {
    users (id) {
        id -> Text,
        name -> Text,
        registered_at -> BigInt,
    }
}

table! {
    comments (id) {
        id -> Text,
        video_id -> BigInt,
        video_time -> Nullable<BigInt>,
        created_at -> BigInt,
        last_edited_at -> Nullable<BigInt>,
        last_edited_by -> Nullable<Text>,
        text -> Text,
        points -> BigInt,
        user_id -> Text,
        parent_id -> Nullable<Text>,
    }
}

table! {
    votes (comment_id, user_id) {
        comment_id -> Text,
        user_id -> Text,
        is_upvote -> Bool,
    }
}

table! {
    watched_videos (user_id, video_id) {
        user_id -> Text,
        video_id -> BigInt,
    }
}

joinable!(comments -> users (user_id));
joinable!(votes -> comments (comment_id));
joinable!(votes -> users (user_id));
joinable!(watched_videos -> users (user_id));

allow_tables_to_appear_in_same_query!(users, comments, votes, watched_videos);
