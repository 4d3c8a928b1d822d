use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbEngagementRepository, DbFacultyRepository, DbMembershipRepository, DbProfileRepository,
    DbQuestionRepository, DbUserGraphRepository, DbUserRepository,
};
use crate::infra::storage::LocalDiskStorage;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: LocalDiskStorage,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn question_repo(&self) -> DbQuestionRepository {
        DbQuestionRepository {
            db: self.db.clone(),
        }
    }

    pub fn faculty_repo(&self) -> DbFacultyRepository {
        DbFacultyRepository {
            db: self.db.clone(),
        }
    }

    pub fn membership_repo(&self) -> DbMembershipRepository {
        DbMembershipRepository {
            db: self.db.clone(),
        }
    }

    pub fn engagement_repo(&self) -> DbEngagementRepository {
        DbEngagementRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_graph_repo(&self) -> DbUserGraphRepository {
        DbUserGraphRepository {
            db: self.db.clone(),
        }
    }

    pub fn storage(&self) -> LocalDiskStorage {
        self.storage.clone()
    }
}
