//! Steps run when a user account is deleted.
//!
//! The orchestrator applies [`CASCADE_STEPS`] in order inside one unit of work,
//! then removes the user row. Files released along the way are collected in
//! [`StepOutcome::released_files`] and removed from storage after commit.

/// One stage of the user cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeStep {
    DetachDepartmentFaculties,
    DetachCourseDepartmentFaculties,
    /// Owned comments together with every rate left on them.
    DeleteComments,
    /// Owned posts, each with its comments, their rates and the post image.
    DeletePosts,
    DetachInterests,
    /// Owned events, each with every user's interest in it and the cover file.
    DeleteEvents,
    /// Owned questions with their tag links and comments.
    DeleteQuestions,
    /// Owned tools and their stored files.
    DeleteTools,
    DetachRates,
    DeleteCoursePosts,
    /// Messages sent or received.
    DeleteMessages,
}

pub const CASCADE_STEPS: [CascadeStep; 11] = [
    CascadeStep::DetachDepartmentFaculties,
    CascadeStep::DetachCourseDepartmentFaculties,
    CascadeStep::DeleteComments,
    CascadeStep::DeletePosts,
    CascadeStep::DetachInterests,
    CascadeStep::DeleteEvents,
    CascadeStep::DeleteQuestions,
    CascadeStep::DeleteTools,
    CascadeStep::DetachRates,
    CascadeStep::DeleteCoursePosts,
    CascadeStep::DeleteMessages,
];

impl CascadeStep {
    pub fn name(self) -> &'static str {
        match self {
            Self::DetachDepartmentFaculties => "detach_department_faculties",
            Self::DetachCourseDepartmentFaculties => "detach_course_department_faculties",
            Self::DeleteComments => "delete_comments",
            Self::DeletePosts => "delete_posts",
            Self::DetachInterests => "detach_interests",
            Self::DeleteEvents => "delete_events",
            Self::DeleteQuestions => "delete_questions",
            Self::DeleteTools => "delete_tools",
            Self::DetachRates => "detach_rates",
            Self::DeleteCoursePosts => "delete_course_posts",
            Self::DeleteMessages => "delete_messages",
        }
    }
}

/// What a single step changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Rows deleted or detached, dependents included.
    pub affected: u64,
    /// Stored file paths no longer referenced by any row.
    pub released_files: Vec<String>,
}

impl StepOutcome {
    pub fn rows(affected: u64) -> Self {
        Self {
            affected,
            released_files: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_list_every_step_once() {
        let unique: HashSet<_> = CASCADE_STEPS.iter().collect();
        assert_eq!(unique.len(), CASCADE_STEPS.len());
    }

    #[test]
    fn should_detach_memberships_before_deleting_content() {
        assert_eq!(CASCADE_STEPS[0], CascadeStep::DetachDepartmentFaculties);
        assert_eq!(CASCADE_STEPS[1], CascadeStep::DetachCourseDepartmentFaculties);
        let comments = CASCADE_STEPS
            .iter()
            .position(|s| *s == CascadeStep::DeleteComments)
            .unwrap();
        let posts = CASCADE_STEPS
            .iter()
            .position(|s| *s == CascadeStep::DeletePosts)
            .unwrap();
        assert!(comments < posts);
    }
}
