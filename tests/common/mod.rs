//! In-memory repositories for driving the HTTP layer without a database
//!
//! One `InMemoryStore` implements every repository trait over shared
//! tables and mirrors the PostgreSQL schema's constraints: unique emails,
//! one like per (user, post), foreign keys without cascade, and text
//! columns that cannot hold NUL bytes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use social_api::api::{build_router, AppState};
use social_api::auth::password::MIN_COST;
use social_api::domain::comment::{
    Comment, CommentChanges, CommentDetail, CommentWithAuthor, NewComment,
};
use social_api::domain::errors::RepositoryError;
use social_api::domain::like::{Like, LikeKey};
use social_api::domain::post::{assemble_post_details, NewPost, Post, PostChanges, PostDetail};
use social_api::domain::repositories::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
};
use social_api::domain::user::{Email, NewUser, User, UserChanges, UserProfile};
use tower::util::ServiceExt; // for oneshot

#[derive(Default)]
struct Tables {
    next_user_id: i32,
    next_post_id: i32,
    next_comment_id: i32,
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    likes: Vec<Like>,
}

impl Tables {
    fn profile(&self, user_id: i32) -> Option<UserProfile> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .map(User::into_profile)
    }

    fn require_user(&self, user_id: i32) -> Result<(), RepositoryError> {
        if self.users.iter().any(|u| u.id == user_id) {
            Ok(())
        } else {
            Err(RepositoryError::MissingReference("User does not exist".to_string()))
        }
    }

    fn require_post(&self, post_id: i32) -> Result<(), RepositoryError> {
        if self.posts.iter().any(|p| p.id == post_id) {
            Ok(())
        } else {
            Err(RepositoryError::MissingReference("Post does not exist".to_string()))
        }
    }

    fn details(&self, posts: Vec<Post>) -> Vec<PostDetail> {
        let posts = posts
            .into_iter()
            .filter_map(|post| self.profile(post.author_id).map(|author| (post, author)))
            .collect();
        let comments = self
            .comments
            .iter()
            .filter_map(|comment| {
                self.profile(comment.author_id).map(|author| CommentWithAuthor {
                    comment: comment.clone(),
                    author,
                })
            })
            .collect();

        assemble_post_details(posts, comments, self.likes.clone())
    }
}

/// Rejects text PostgreSQL cannot store in a UTF8 text column
fn check_text(values: &[&str]) -> Result<(), RepositoryError> {
    if values.iter().any(|v| v.contains('\0')) {
        return Err(RepositoryError::InvalidInput(
            "Invalid input: invalid byte sequence for encoding \"UTF8\": 0x00".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    user_reads_fail: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("store lock poisoned")
    }

    /// Makes every user read fail as if the database connection dropped
    pub fn fail_user_reads(&self) {
        self.user_reads_fail.store(true, Ordering::SeqCst);
    }

    fn check_user_reads(&self) -> Result<(), RepositoryError> {
        if self.user_reads_fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(
                "connection reset by peer".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites a stored password hash
    pub fn set_password_hash(&self, id: i32, hash: &str) {
        if let Some(user) = self.tables().users.iter_mut().find(|u| u.id == id) {
            user.password = hash.to_string();
        }
    }

    pub fn stored_user(&self, id: i32) -> Option<User> {
        self.tables().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn like_count(&self) -> usize {
        self.tables().likes.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        check_text(&[user.email.as_str(), &user.username, &user.password_hash])?;
        let mut t = self.tables();
        if t.users.iter().any(|u| u.email == user.email.as_str()) {
            return Err(RepositoryError::UniqueViolation(
                "Email already registered".to_string(),
            ));
        }

        t.next_user_id += 1;
        let created = User {
            id: t.next_user_id,
            email: user.email.to_string(),
            username: user.username,
            password: user.password_hash,
            created_at: Utc::now(),
        };
        t.users.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.check_user_reads()?;
        Ok(self.tables().users.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        self.check_user_reads()?;
        Ok(self.stored_user(id))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        self.check_user_reads()?;
        Ok(self
            .tables()
            .users
            .iter()
            .find(|u| u.email == email.as_str())
            .cloned())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepositoryError> {
        check_text(&[changes.username.as_deref().unwrap_or_default()])?;
        let mut t = self.tables();
        if let Some(email) = &changes.email {
            if t.users.iter().any(|u| u.id != id && u.email == email.as_str()) {
                return Err(RepositoryError::UniqueViolation(
                    "Email already registered".to_string(),
                ));
            }
        }

        let user = t
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| RepositoryError::NotFound("User".to_string()))?;
        if let Some(email) = changes.email {
            user.email = email.to_string();
        }
        if let Some(username) = changes.username {
            user.username = username;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut t = self.tables();
        if !t.users.iter().any(|u| u.id == id) {
            return Err(RepositoryError::NotFound("User".to_string()));
        }
        let referenced = t.posts.iter().any(|p| p.author_id == id)
            || t.comments.iter().any(|c| c.author_id == id)
            || t.likes.iter().any(|l| l.user_id == id);
        if referenced {
            return Err(RepositoryError::StillReferenced(
                "User is still referenced by other records".to_string(),
            ));
        }

        t.users.retain(|u| u.id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, post: NewPost) -> Result<Post, RepositoryError> {
        check_text(&[&post.title, &post.content])?;
        let mut t = self.tables();
        t.require_user(post.author_id)?;

        t.next_post_id += 1;
        let created = Post {
            id: t.next_post_id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: Utc::now(),
        };
        t.posts.push(created.clone());
        Ok(created)
    }

    async fn list_detailed(&self) -> Result<Vec<PostDetail>, RepositoryError> {
        let t = self.tables();
        Ok(t.details(t.posts.clone()))
    }

    async fn find_detailed(&self, id: i32) -> Result<Option<PostDetail>, RepositoryError> {
        let t = self.tables();
        let posts = t.posts.iter().filter(|p| p.id == id).cloned().collect();
        Ok(t.details(posts).pop())
    }

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepositoryError> {
        check_text(&[
            changes.title.as_deref().unwrap_or_default(),
            changes.content.as_deref().unwrap_or_default(),
        ])?;
        let mut t = self.tables();
        let post = t
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepositoryError::NotFound("Post".to_string()))?;
        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        Ok(post.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut t = self.tables();
        if !t.posts.iter().any(|p| p.id == id) {
            return Err(RepositoryError::NotFound("Post".to_string()));
        }
        if t.comments.iter().any(|c| c.post_id == id) || t.likes.iter().any(|l| l.post_id == id) {
            return Err(RepositoryError::StillReferenced(
                "Post is still referenced by other records".to_string(),
            ));
        }

        t.posts.retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepositoryError> {
        check_text(&[&comment.content])?;
        let mut t = self.tables();
        t.require_user(comment.author_id)?;
        t.require_post(comment.post_id)?;

        t.next_comment_id += 1;
        let created = Comment {
            id: t.next_comment_id,
            content: comment.content,
            author_id: comment.author_id,
            post_id: comment.post_id,
            created_at: Utc::now(),
        };
        t.comments.push(created.clone());
        Ok(created)
    }

    async fn list_detailed(&self) -> Result<Vec<CommentDetail>, RepositoryError> {
        let t = self.tables();
        Ok(t.comments
            .iter()
            .filter_map(|comment| {
                let author = t.profile(comment.author_id)?;
                let post = t.posts.iter().find(|p| p.id == comment.post_id)?.clone();
                Some(CommentDetail {
                    comment: comment.clone(),
                    author,
                    post,
                })
            })
            .collect())
    }

    async fn update(&self, id: i32, changes: CommentChanges) -> Result<Comment, RepositoryError> {
        check_text(&[changes.content.as_deref().unwrap_or_default()])?;
        let mut t = self.tables();
        let comment = t
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound("Comment".to_string()))?;
        if let Some(content) = changes.content {
            comment.content = content;
        }
        Ok(comment.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut t = self.tables();
        let before = t.comments.len();
        t.comments.retain(|c| c.id != id);
        if t.comments.len() == before {
            return Err(RepositoryError::NotFound("Comment".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn create(&self, key: LikeKey) -> Result<Like, RepositoryError> {
        let mut t = self.tables();
        if t.likes.iter().any(|l| LikeKey::from(l) == key) {
            return Err(RepositoryError::UniqueViolation(
                "Post already liked by this user".to_string(),
            ));
        }
        t.require_user(key.user_id)?;
        t.require_post(key.post_id)?;

        let like = Like {
            user_id: key.user_id,
            post_id: key.post_id,
            created_at: Utc::now(),
        };
        t.likes.push(like.clone());
        Ok(like)
    }

    async fn delete(&self, key: LikeKey) -> Result<(), RepositoryError> {
        let mut t = self.tables();
        let before = t.likes.len();
        t.likes.retain(|l| LikeKey::from(l) != key);
        if t.likes.len() == before {
            return Err(RepositoryError::NotFound("Like".to_string()));
        }
        Ok(())
    }
}

/// Application state backed by a fresh in-memory store
pub fn test_state(store: &InMemoryStore) -> AppState {
    AppState {
        users: Arc::new(store.clone()),
        posts: Arc::new(store.clone()),
        comments: Arc::new(store.clone()),
        likes: Arc::new(store.clone()),
        bcrypt_cost: MIN_COST,
    }
}

/// Router over a fresh in-memory store
pub fn setup_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    (build_router(test_state(&store)), store)
}

/// Sends one request and returns the status and JSON body
///
/// The body is `Value::Null` when the response is empty or not JSON.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
