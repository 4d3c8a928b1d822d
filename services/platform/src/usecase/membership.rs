use uuid::Uuid;

use campus_domain::policy::Actor;

use crate::domain::repository::MembershipRepository;
use crate::error::PlatformError;

// ── JoinDepartmentFaculty ────────────────────────────────────────────────────

pub struct JoinDepartmentFacultyUseCase<R: MembershipRepository> {
    pub repo: R,
}

impl<R: MembershipRepository> JoinDepartmentFacultyUseCase<R> {
    /// Joining twice is a no-op.
    pub async fn execute(
        &self,
        actor: &Actor,
        department_faculty_id: Uuid,
    ) -> Result<(), PlatformError> {
        if !self
            .repo
            .department_faculty_exists(department_faculty_id)
            .await?
        {
            return Err(PlatformError::DepartmentFacultyNotFound);
        }
        self.repo
            .join_department_faculty(actor.id.0, department_faculty_id)
            .await
    }
}

// ── LeaveDepartmentFaculty ───────────────────────────────────────────────────

pub struct LeaveDepartmentFacultyUseCase<R: MembershipRepository> {
    pub repo: R,
}

impl<R: MembershipRepository> LeaveDepartmentFacultyUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        department_faculty_id: Uuid,
    ) -> Result<(), PlatformError> {
        if !self
            .repo
            .leave_department_faculty(actor.id.0, department_faculty_id)
            .await?
        {
            return Err(PlatformError::MembershipNotFound);
        }
        Ok(())
    }
}

// ── JoinCourseDepartmentFaculty ──────────────────────────────────────────────

pub struct JoinCourseDepartmentFacultyUseCase<R: MembershipRepository> {
    pub repo: R,
}

impl<R: MembershipRepository> JoinCourseDepartmentFacultyUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        course_department_faculty_id: Uuid,
    ) -> Result<(), PlatformError> {
        if !self
            .repo
            .course_department_faculty_exists(course_department_faculty_id)
            .await?
        {
            return Err(PlatformError::CourseDepartmentFacultyNotFound);
        }
        self.repo
            .join_course_department_faculty(actor.id.0, course_department_faculty_id)
            .await
    }
}

// ── LeaveCourseDepartmentFaculty ─────────────────────────────────────────────

pub struct LeaveCourseDepartmentFacultyUseCase<R: MembershipRepository> {
    pub repo: R,
}

impl<R: MembershipRepository> LeaveCourseDepartmentFacultyUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        course_department_faculty_id: Uuid,
    ) -> Result<(), PlatformError> {
        if !self
            .repo
            .leave_course_department_faculty(actor.id.0, course_department_faculty_id)
            .await?
        {
            return Err(PlatformError::MembershipNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use campus_domain::id::UserId;

    #[derive(Default)]
    struct MockMembershipRepo {
        department_faculties: Vec<Uuid>,
        course_department_faculties: Vec<Uuid>,
        department_members: Mutex<HashSet<(Uuid, Uuid)>>,
        course_members: Mutex<HashSet<(Uuid, Uuid)>>,
    }

    impl MembershipRepository for MockMembershipRepo {
        async fn department_faculty_exists(&self, id: Uuid) -> Result<bool, PlatformError> {
            Ok(self.department_faculties.contains(&id))
        }
        async fn course_department_faculty_exists(&self, id: Uuid) -> Result<bool, PlatformError> {
            Ok(self.course_department_faculties.contains(&id))
        }
        async fn join_department_faculty(
            &self,
            user_id: Uuid,
            department_faculty_id: Uuid,
        ) -> Result<(), PlatformError> {
            self.department_members
                .lock()
                .unwrap()
                .insert((user_id, department_faculty_id));
            Ok(())
        }
        async fn leave_department_faculty(
            &self,
            user_id: Uuid,
            department_faculty_id: Uuid,
        ) -> Result<bool, PlatformError> {
            Ok(self
                .department_members
                .lock()
                .unwrap()
                .remove(&(user_id, department_faculty_id)))
        }
        async fn join_course_department_faculty(
            &self,
            user_id: Uuid,
            course_department_faculty_id: Uuid,
        ) -> Result<(), PlatformError> {
            self.course_members
                .lock()
                .unwrap()
                .insert((user_id, course_department_faculty_id));
            Ok(())
        }
        async fn leave_course_department_faculty(
            &self,
            user_id: Uuid,
            course_department_faculty_id: Uuid,
        ) -> Result<bool, PlatformError> {
            Ok(self
                .course_members
                .lock()
                .unwrap()
                .remove(&(user_id, course_department_faculty_id)))
        }
    }

    fn student() -> Actor {
        Actor::new(UserId(Uuid::now_v7()), Some("Student".into()))
    }

    #[tokio::test]
    async fn should_join_department_faculty_idempotently() {
        let df = Uuid::now_v7();
        let actor = student();
        let usecase = JoinDepartmentFacultyUseCase {
            repo: MockMembershipRepo {
                department_faculties: vec![df],
                ..Default::default()
            },
        };

        usecase.execute(&actor, df).await.unwrap();
        usecase.execute(&actor, df).await.unwrap();

        let members = usecase.repo.department_members.lock().unwrap();
        assert_eq!(members.len(), 1);
        assert!(members.contains(&(actor.id.0, df)));
    }

    #[tokio::test]
    async fn should_reject_unknown_department_faculty() {
        let usecase = JoinDepartmentFacultyUseCase {
            repo: MockMembershipRepo::default(),
        };
        let result = usecase.execute(&student(), Uuid::now_v7()).await;
        assert!(matches!(
            result,
            Err(PlatformError::DepartmentFacultyNotFound)
        ));
    }

    #[tokio::test]
    async fn should_report_missing_membership_on_leave() {
        let usecase = LeaveDepartmentFacultyUseCase {
            repo: MockMembershipRepo::default(),
        };
        let result = usecase.execute(&student(), Uuid::now_v7()).await;
        assert!(matches!(result, Err(PlatformError::MembershipNotFound)));
    }

    #[tokio::test]
    async fn should_join_and_leave_course_offering() {
        let cdf = Uuid::now_v7();
        let actor = student();
        let join = JoinCourseDepartmentFacultyUseCase {
            repo: MockMembershipRepo {
                course_department_faculties: vec![cdf],
                ..Default::default()
            },
        };
        join.execute(&actor, cdf).await.unwrap();

        let leave = LeaveCourseDepartmentFacultyUseCase { repo: join.repo };
        leave.execute(&actor, cdf).await.unwrap();
        assert!(leave.repo.course_members.lock().unwrap().is_empty());

        let again = leave.execute(&actor, cdf).await;
        assert!(matches!(again, Err(PlatformError::MembershipNotFound)));
    }

    #[tokio::test]
    async fn should_reject_unknown_course_offering() {
        let usecase = JoinCourseDepartmentFacultyUseCase {
            repo: MockMembershipRepo::default(),
        };
        let result = usecase.execute(&student(), Uuid::now_v7()).await;
        assert!(matches!(
            result,
            Err(PlatformError::CourseDepartmentFacultyNotFound)
        ));
    }
}
