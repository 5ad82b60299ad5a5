use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub current_user: Option<User>,
}

impl AuthContext {
    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            current_user: Some(User { name: name.into() }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.user {
            Some(name) => Self::signed_in(name.clone()),
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
