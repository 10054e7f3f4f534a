use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboard::api;
use crate::domain::{
    branch, course, employee, program, student, study_material, subject, syllabus, video_class,
};
use crate::shared::components::StatCard;

struct StatTile {
    label: &'static str,
    icon: &'static str,
    table: &'static str,
    /// Video classes carry no active flag and are counted unfiltered.
    active_only: bool,
}

const STATS: [StatTile; 9] = [
    StatTile {
        label: "Branches",
        icon: "branches",
        table: branch::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Programs",
        icon: "programs",
        table: program::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Courses",
        icon: "courses",
        table: course::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Subjects",
        icon: "subjects",
        table: subject::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Syllabus Files",
        icon: "syllabus",
        table: syllabus::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Study Materials",
        icon: "study-materials",
        table: study_material::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Video Classes",
        icon: "video-classes",
        table: video_class::api::TABLE,
        active_only: false,
    },
    StatTile {
        label: "Employees",
        icon: "employees",
        table: employee::api::TABLE,
        active_only: true,
    },
    StatTile {
        label: "Students",
        icon: "students",
        table: student::api::TABLE,
        active_only: true,
    },
];

/// Per-entity counters of active rows. Each tile resolves on its own; a
/// failed count shows 0 instead of blocking the page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let cards: Vec<_> = STATS
        .iter()
        .map(|tile| {
            let value = RwSignal::new(Option::<u64>::None);
            let table = tile.table;
            let active_only = tile.active_only;
            spawn_local(async move {
                let result = if active_only {
                    api::count_active(table).await
                } else {
                    api::count_all(table).await
                };
                match result {
                    Ok(n) => {
                        let _ = value.try_set(Some(n));
                    }
                    Err(e) => {
                        log::error!("Count for {} failed: {}", table, e);
                        let _ = value.try_set(Some(0));
                    }
                }
            });
            (tile, value)
        })
        .collect();

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-header__title">"Dashboard"</h1>
            </div>
            <div class="stat-grid">
                {cards
                    .into_iter()
                    .map(|(tile, value)| {
                        view! {
                            <StatCard
                                label=tile.label.to_string()
                                icon_name=tile.icon.to_string()
                                value=value
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
