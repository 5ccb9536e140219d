//! Batches, library, store and test-series listings.
//!
//! Listings are static until the backend exposes catalog endpoints.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::sidebar::StudentShell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchStatus {
    Active,
    Enrolling,
    ComingSoon,
}

impl BatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Enrolling => "Enrolling",
            Self::ComingSoon => "Coming Soon",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--solid",
            Self::Enrolling => "badge badge--muted",
            Self::ComingSoon => "badge badge--outline",
        }
    }

    /// Enrollment button text and whether it is enabled.
    pub fn action(self) -> (&'static str, bool) {
        match self {
            Self::ComingSoon => ("Notify Me", false),
            Self::Active | Self::Enrolling => ("Enroll Now", true),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Batch {
    pub name: &'static str,
    pub subjects: &'static str,
    pub instructor: &'static str,
    pub start_date: &'static str,
    pub duration: &'static str,
    pub students: u32,
    pub status: BatchStatus,
    pub price: &'static str,
}

pub const BATCHES: [Batch; 3] = [
    Batch {
        name: "NEET 2025 - Foundation Batch",
        subjects: "Physics, Chemistry, Biology",
        instructor: "Dr. Rajesh Kumar",
        start_date: "2024-09-01",
        duration: "12 months",
        students: 150,
        status: BatchStatus::Active,
        price: "₹25,000",
    },
    Batch {
        name: "JEE Main 2025 - Crash Course",
        subjects: "Physics, Chemistry, Mathematics",
        instructor: "Prof. Anita Sharma",
        start_date: "2024-10-15",
        duration: "6 months",
        students: 89,
        status: BatchStatus::Enrolling,
        price: "₹18,000",
    },
    Batch {
        name: "Class 12 Board Exam Prep",
        subjects: "All Subjects",
        instructor: "Multiple Instructors",
        start_date: "2024-11-01",
        duration: "8 months",
        students: 200,
        status: BatchStatus::ComingSoon,
        price: "₹15,000",
    },
];

/// Totals shown under the batch list: (batches, students, active batches).
pub fn batch_summary(batches: &[Batch]) -> (usize, u32, usize) {
    let students = batches.iter().map(|b| b.students).sum();
    let active = batches.iter().filter(|b| b.status == BatchStatus::Active).count();
    (batches.len(), students, active)
}

#[derive(Clone, Copy, Debug)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub subject: &'static str,
    pub size: &'static str,
    pub pages: u32,
    pub downloads: u32,
    pub premium: bool,
}

pub const BOOKS: [Book; 3] = [
    Book {
        title: "Physics Class 12 - NCERT Solutions",
        author: "NCERT Board",
        subject: "Physics",
        size: "15.2 MB",
        pages: 245,
        downloads: 1250,
        premium: false,
    },
    Book {
        title: "Organic Chemistry Handbook",
        author: "Dr. Morrison & Boyd",
        subject: "Chemistry",
        size: "28.5 MB",
        pages: 412,
        downloads: 890,
        premium: true,
    },
    Book {
        title: "Mathematics Formula Book",
        author: "R.D. Sharma",
        subject: "Mathematics",
        size: "8.7 MB",
        pages: 156,
        downloads: 2100,
        premium: false,
    },
];

#[component]
pub fn BatchesPage() -> impl IntoView {
    let (total, students, active) = batch_summary(&BATCHES);

    view! {
        <StudentShell>
            <h1>"Available Batches"</h1>
            <p class="page-subtitle">"Choose from our comprehensive coaching programs"</p>
            <div class="card-grid">
                {BATCHES
                    .iter()
                    .map(|batch| {
                        let (action, enabled) = batch.status.action();
                        view! {
                            <div class="card">
                                <span class={batch.status.badge_class()}>{batch.status.label()}</span>
                                <h2>{batch.name}</h2>
                                <p>{batch.subjects}</p>
                                <p>"Instructor: " {batch.instructor}</p>
                                <p>"Starts: " {batch.start_date}</p>
                                <p>"Duration: " {batch.duration}</p>
                                <p>{batch.students} " students enrolled"</p>
                                <p class="card__price">{batch.price}</p>
                                <button class="btn btn--primary" type="button" disabled={!enabled}>
                                    {action}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="stat-row">
                <div class="stat"><h4>"Total Batches"</h4><p>{total}</p></div>
                <div class="stat"><h4>"Total Students"</h4><p>{students}</p></div>
                <div class="stat"><h4>"Active Batches"</h4><p>{active}</p></div>
            </div>
        </StudentShell>
    }
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    view! {
        <StudentShell>
            <h1>"Digital Library"</h1>
            <p class="page-subtitle">"Access study materials, books and reference guides"</p>
            <div class="card-grid">
                {BOOKS
                    .iter()
                    .map(|book| {
                        view! {
                            <div class="card">
                                <span class={if book.premium { "badge badge--muted" } else { "badge badge--solid" }}>
                                    {if book.premium { "Premium" } else { "Available" }}
                                </span>
                                <h2>{book.title}</h2>
                                <p>{book.author}</p>
                                <p>{book.subject} " · PDF · " {book.size}</p>
                                <p>{book.pages} " pages · " {book.downloads} " downloads"</p>
                                <div class="card__actions">
                                    <button class="btn" type="button">"Preview"</button>
                                    <button class="btn btn--primary" type="button" disabled={book.premium}>
                                        "Download"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </StudentShell>
    }
}

#[component]
pub fn StorePage() -> impl IntoView {
    view! {
        <StudentShell>
            <h1>"Store"</h1>
            <p class="page-subtitle">"Books, notes and test packs will be available here soon."</p>
        </StudentShell>
    }
}

/// `/test-series-page`, the in-app test series listing.
#[component]
pub fn TestSeriesCatalogPage() -> impl IntoView {
    view! {
        <StudentShell>
            <h1>"Test Series"</h1>
            <p class="page-subtitle">"Full-length and chapter-wise tests will be listed here."</p>
        </StudentShell>
    }
}
