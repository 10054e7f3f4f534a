//! Sidebar with collapsible menu groups and router links.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (href, label, icon); empty = the group itself is a link
    items: Vec<(&'static str, &'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            label: "Dashboard",
            icon: "dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "branches",
            label: "Branches",
            icon: "branches",
            items: vec![],
        },
        MenuGroup {
            id: "academics",
            label: "Academics",
            icon: "programs",
            items: vec![
                ("/programs", "Programs", "programs"),
                ("/courses", "Courses", "courses"),
                ("/subjects", "Subjects", "subjects"),
            ],
        },
        MenuGroup {
            id: "content",
            label: "Learning Content",
            icon: "study-materials",
            items: vec![
                ("/syllabus", "Syllabus", "syllabus"),
                ("/study-materials", "Study Materials", "study-materials"),
                ("/video-classes", "Video Classes", "video-classes"),
            ],
        },
        MenuGroup {
            id: "people",
            label: "People",
            icon: "employees",
            items: vec![
                ("/departments", "Departments", "departments"),
                ("/employees", "Employees", "employees"),
                ("/students", "Students", "students"),
            ],
        },
    ]
}

fn group_href(id: &str) -> String {
    match id {
        "dashboard" => "/".to_string(),
        other => format!("/{other}"),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let expanded_groups = RwSignal::new(vec![
        "academics".to_string(),
        "content".to_string(),
        "people".to_string(),
    ]);

    let groups = menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                let parent = if has_children {
                    view! {
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.get().contains(&group_id_for_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <A href=group_href(group.id) attr:class="app-sidebar__item">
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                        </A>
                    }
                    .into_any()
                };

                let children = has_children.then(|| {
                    let gid_show = group_id.clone();
                    let items_stored = StoredValue::new(group.items.clone());
                    view! {
                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(href, label, icon_name)| {
                                    view! {
                                        <A href=href attr:class="app-sidebar__item">
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    }
                });

                view! {
                    <div>
                        {parent}
                        {children}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
