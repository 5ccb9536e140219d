//! Student study dashboard (protected).

use leptos::prelude::*;

use crate::components::sidebar::StudentShell;

const PANELS: [(&str, &str); 3] = [
    ("Recent Courses", "Your enrolled courses will appear here"),
    ("Progress", "Track your learning progress"),
    ("Upcoming Tests", "Scheduled tests and deadlines"),
];

#[component]
pub fn StudyPage() -> impl IntoView {
    view! {
        <StudentShell>
            <h1>"Study Dashboard"</h1>
            <div class="card-grid">
                {PANELS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="card">
                                <h2>{*title}</h2>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </StudentShell>
    }
}
