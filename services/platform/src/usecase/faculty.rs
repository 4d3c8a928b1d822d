use uuid::Uuid;

use campus_domain::policy::Actor;

use crate::domain::repository::FacultyRepository;
use crate::domain::types::{CourseDepartmentFaculty, Department, Faculty, ModeratorProfile};
use crate::error::PlatformError;

async fn load_faculty<R: FacultyRepository>(
    repo: &R,
    faculty_id: Uuid,
) -> Result<Faculty, PlatformError> {
    repo.find_by_id(faculty_id)
        .await?
        .ok_or(PlatformError::FacultyNotFound)
}

// ── GetFaculty ───────────────────────────────────────────────────────────────

pub struct FacultyDetails {
    pub faculty: Faculty,
    pub departments: Vec<Department>,
}

pub struct GetFacultyUseCase<R: FacultyRepository> {
    pub repo: R,
}

impl<R: FacultyRepository> GetFacultyUseCase<R> {
    pub async fn execute(&self, faculty_id: Uuid) -> Result<FacultyDetails, PlatformError> {
        let faculty = load_faculty(&self.repo, faculty_id).await?;
        let departments = self.repo.list_departments(faculty_id).await?;
        Ok(FacultyDetails {
            faculty,
            departments,
        })
    }
}

// ── ListFacultyModerators ────────────────────────────────────────────────────

pub struct ListFacultyModeratorsUseCase<R: FacultyRepository> {
    pub repo: R,
}

impl<R: FacultyRepository> ListFacultyModeratorsUseCase<R> {
    pub async fn execute(&self, faculty_id: Uuid) -> Result<Vec<ModeratorProfile>, PlatformError> {
        load_faculty(&self.repo, faculty_id).await?;
        self.repo.list_moderators(faculty_id).await
    }
}

// ── ListFacultyCourseDepartmentFaculties ─────────────────────────────────────

pub struct ListFacultyCourseDepartmentFacultiesUseCase<R: FacultyRepository> {
    pub repo: R,
}

impl<R: FacultyRepository> ListFacultyCourseDepartmentFacultiesUseCase<R> {
    pub async fn execute(
        &self,
        faculty_id: Uuid,
    ) -> Result<Vec<CourseDepartmentFaculty>, PlatformError> {
        load_faculty(&self.repo, faculty_id).await?;
        self.repo.list_course_department_faculties(faculty_id).await
    }
}

// ── AttachDepartment ─────────────────────────────────────────────────────────

pub struct AttachDepartmentUseCase<R: FacultyRepository> {
    pub repo: R,
}

impl<R: FacultyRepository> AttachDepartmentUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        faculty_id: Uuid,
        department_id: Uuid,
    ) -> Result<(), PlatformError> {
        if !actor.is_admin() {
            return Err(PlatformError::Forbidden);
        }
        load_faculty(&self.repo, faculty_id).await?;
        if self.repo.find_department(department_id).await?.is_none() {
            return Err(PlatformError::DepartmentNotFound);
        }
        if !self.repo.attach_department(faculty_id, department_id).await? {
            return Err(PlatformError::DepartmentAlreadyAttached);
        }
        tracing::info!(faculty_id = %faculty_id, department_id = %department_id, "department attached");
        Ok(())
    }
}
