// src/domain/user/entity.rs
use crate::domain::article::{Article, ArticleId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::UserId;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    articles: HashSet<Article>,
}

impl User {
    pub fn new(id: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            articles: HashSet::new(),
        }
    }

    pub fn with_articles(mut self, articles: impl IntoIterator<Item = Article>) -> Self {
        self.articles.extend(articles);
        self
    }

    /// Snapshot of the articles loaded with this user. Storage owns the
    /// relationship; this set is only a view of it.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn has_article(&self, id: &ArticleId) -> bool {
        self.articles.contains(id)
    }

    /// Attach an article owned by this user. Returns `false` when an article
    /// with the same id is already attached.
    pub fn add_article(&mut self, article: Article) -> DomainResult<bool> {
        if !article.is_owned_by(self.id) {
            return Err(DomainError::Validation(format!(
                "article {} belongs to user {}, not {}",
                article.id, article.user_id, self.id
            )));
        }
        Ok(self.articles.insert(article))
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::NewArticle;
    use chrono::Utc;

    fn draft_for(user_id: UserId) -> Article {
        Article::draft(
            NewArticle {
                title: "Learning Rust".into(),
                description: "Tips and tricks".into(),
                content: "content".into(),
                user_id,
            },
            Utc::now(),
        )
    }

    #[test]
    fn new_user_has_no_articles() {
        let user = User::new(UserId(1), "Jon", "Snow");
        assert_eq!(user.article_count(), 0);
    }

    #[test]
    fn add_article_attaches_it() {
        let mut user = User::new(UserId(1), "Jon", "Snow");
        let article = draft_for(user.id);
        let id = article.id.clone();
        assert!(user.add_article(article).unwrap());
        assert!(user.has_article(&id));
    }

    #[test]
    fn adding_the_same_article_twice_keeps_one_copy() {
        let mut user = User::new(UserId(1), "Jon", "Snow");
        let article = draft_for(user.id);
        assert!(user.add_article(article.clone()).unwrap());
        assert!(!user.add_article(article).unwrap());
        assert_eq!(user.article_count(), 1);
    }

    #[test]
    fn article_of_another_user_is_rejected() {
        let mut user = User::new(UserId(1), "Jon", "Snow");
        let err = user.add_article(draft_for(UserId(2))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(user.article_count(), 0);
    }
}
