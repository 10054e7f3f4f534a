use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboard::DashboardPage;
use crate::domain::branch::ui::{BranchDetails, BranchList};
use crate::domain::course::ui::{CourseDetails, CourseList};
use crate::domain::department::ui::{DepartmentDetails, DepartmentList};
use crate::domain::employee::ui::{EmployeeDetails, EmployeeList};
use crate::domain::program::ui::{ProgramDetails, ProgramList};
use crate::domain::student::ui::{StudentDetails, StudentList};
use crate::domain::study_material::ui::{StudyMaterialDetails, StudyMaterialList};
use crate::domain::subject::ui::{SubjectDetails, SubjectList};
use crate::domain::syllabus::ui::{SyllabusDetails, SyllabusList};
use crate::domain::video_class::ui::{VideoClassDetails, VideoClassList};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::profile::ProfilePage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell center=|| {
            view! {
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=DashboardPage />

                    <Route path=path!("/branches") view=BranchList />
                    <Route path=path!("/branches/add") view=BranchDetails />
                    <Route path=path!("/branches/edit/:id") view=BranchDetails />

                    <Route path=path!("/programs") view=ProgramList />
                    <Route path=path!("/programs/add") view=ProgramDetails />
                    <Route path=path!("/programs/edit/:id") view=ProgramDetails />

                    <Route path=path!("/courses") view=CourseList />
                    <Route path=path!("/courses/add") view=CourseDetails />
                    <Route path=path!("/courses/edit/:id") view=CourseDetails />

                    <Route path=path!("/subjects") view=SubjectList />
                    <Route path=path!("/subjects/add") view=SubjectDetails />
                    <Route path=path!("/subjects/edit/:id") view=SubjectDetails />

                    <Route path=path!("/syllabus") view=SyllabusList />
                    <Route path=path!("/syllabus/add") view=SyllabusDetails />
                    <Route path=path!("/syllabus/edit/:id") view=SyllabusDetails />

                    <Route path=path!("/study-materials") view=StudyMaterialList />
                    <Route path=path!("/study-materials/add") view=StudyMaterialDetails />
                    <Route path=path!("/study-materials/edit/:id") view=StudyMaterialDetails />

                    <Route path=path!("/video-classes") view=VideoClassList />
                    <Route path=path!("/video-classes/add") view=VideoClassDetails />
                    <Route path=path!("/video-classes/edit/:id") view=VideoClassDetails />

                    <Route path=path!("/departments") view=DepartmentList />
                    <Route path=path!("/departments/add") view=DepartmentDetails />
                    <Route path=path!("/departments/edit/:id") view=DepartmentDetails />

                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/employees/add") view=EmployeeDetails />
                    <Route path=path!("/employees/edit/:id") view=EmployeeDetails />

                    <Route path=path!("/students") view=StudentList />
                    <Route path=path!("/students/add") view=StudentDetails />
                    <Route path=path!("/students/edit/:id") view=StudentDetails />

                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            }
            .into_any()
        } />
    }
}

/// Route tree behind the session gate. An expired or missing session swaps
/// the whole tree for the sign-in screen without touching the URL.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Router>
            <Show
                when=move || auth_state.with(|s| s.session.is_some())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Router>
    }
}
