use std::collections::HashMap;

use serde::Serialize;

use super::post::Post;
use crate::domain::comment::CommentWithAuthor;
use crate::domain::like::Like;
use crate::domain::user::UserProfile;

/// A post with its author, comments (each with its author) and likes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub author: UserProfile,
    pub comments: Vec<CommentWithAuthor>,
    pub likes: Vec<Like>,
}

/// Groups comments and likes under the posts they belong to.
///
/// Post order is preserved, and so is the relative order of comments and
/// likes within each post. Comments or likes whose post is not in `posts`
/// are dropped.
pub fn assemble_post_details(
    posts: Vec<(Post, UserProfile)>,
    comments: Vec<CommentWithAuthor>,
    likes: Vec<Like>,
) -> Vec<PostDetail> {
    let mut comments_by_post: HashMap<i32, Vec<CommentWithAuthor>> = HashMap::new();
    for comment in comments {
        comments_by_post
            .entry(comment.comment.post_id)
            .or_default()
            .push(comment);
    }

    let mut likes_by_post: HashMap<i32, Vec<Like>> = HashMap::new();
    for like in likes {
        likes_by_post.entry(like.post_id).or_default().push(like);
    }

    posts
        .into_iter()
        .map(|(post, author)| PostDetail {
            comments: comments_by_post.remove(&post.id).unwrap_or_default(),
            likes: likes_by_post.remove(&post.id).unwrap_or_default(),
            post,
            author,
        })
        .collect()
}
