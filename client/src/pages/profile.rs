//! Student profile view and editor (protected).
//!
//! Edits are collected in a [`ProfileForm`]; saving sends only the fields
//! that differ from the cached user and, on success, replaces the session
//! user with the record the backend returns.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api::BrowserApiClient;
use crate::net::types::{ProfileUpdate, User, UserProfile};
use crate::state::auth::use_auth;

pub const PROFILE_SAVED: &str = "Profile updated successfully!";
pub const PROFILE_FALLBACK: &str = "Failed to update profile. Please try again.";
pub const NO_CHANGES: &str = "No changes to save.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    DateOfBirth,
    Gender,
    AlternatePhone,
    Village,
    State,
    District,
    Pincode,
    CurrentClass,
    StudentId,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::AlternatePhone => "Alternate Phone",
            Self::Village => "Village / Town",
            Self::State => "State",
            Self::District => "District",
            Self::Pincode => "Pincode",
            Self::CurrentClass => "Current Class",
            Self::StudentId => "Student ID",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::DateOfBirth => "date",
            Self::AlternatePhone => "tel",
            _ => "text",
        }
    }

    fn options(self) -> &'static [&'static str] {
        match self {
            Self::Gender => &["Male", "Female", "Other"],
            Self::CurrentClass => &["Class 9", "Class 10", "Class 11", "Class 12", "Dropper"],
            _ => &[],
        }
    }
}

const SECTIONS: [(&str, &[ProfileField]); 3] = [
    (
        "Personal Information",
        &[ProfileField::FullName, ProfileField::DateOfBirth, ProfileField::Gender, ProfileField::Email, ProfileField::AlternatePhone],
    ),
    ("Address", &[ProfileField::Village, ProfileField::State, ProfileField::District, ProfileField::Pincode]),
    ("Education", &[ProfileField::CurrentClass, ProfileField::StudentId]),
];

/// Editable copy of the user's profile; absent values are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub gender: String,
    pub alternate_phone: String,
    pub village: String,
    pub state: String,
    pub district: String,
    pub pincode: String,
    pub current_class: String,
    pub student_id: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        let profile = user.profile.clone().unwrap_or_default();
        let UserProfile {
            date_of_birth,
            gender,
            alternate_phone,
            village,
            state,
            district,
            pincode,
            current_class,
            student_id,
            ..
        } = profile;
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            date_of_birth: date_of_birth.unwrap_or_default(),
            gender: gender.unwrap_or_default(),
            alternate_phone: alternate_phone.unwrap_or_default(),
            village: village.unwrap_or_default(),
            state: state.unwrap_or_default(),
            district: district.unwrap_or_default(),
            pincode: pincode.unwrap_or_default(),
            current_class: current_class.unwrap_or_default(),
            student_id: student_id.unwrap_or_default(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::Gender => &self.gender,
            ProfileField::AlternatePhone => &self.alternate_phone,
            ProfileField::Village => &self.village,
            ProfileField::State => &self.state,
            ProfileField::District => &self.district,
            ProfileField::Pincode => &self.pincode,
            ProfileField::CurrentClass => &self.current_class,
            ProfileField::StudentId => &self.student_id,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Email => &mut self.email,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::Gender => &mut self.gender,
            ProfileField::AlternatePhone => &mut self.alternate_phone,
            ProfileField::Village => &mut self.village,
            ProfileField::State => &mut self.state,
            ProfileField::District => &mut self.district,
            ProfileField::Pincode => &mut self.pincode,
            ProfileField::CurrentClass => &mut self.current_class,
            ProfileField::StudentId => &mut self.student_id,
        };
        *slot = value;
    }
}

/// Build the PATCH body: trimmed values of the fields that changed.
/// Both sides are compared trimmed, so stray whitespace already stored
/// on the server never counts as an edit.
pub fn profile_changes(user: &User, form: &ProfileForm) -> ProfileUpdate {
    let current = ProfileForm::from_user(user);
    let changed = |field: ProfileField| {
        let edited = form.get(field).trim();
        (edited != current.get(field).trim()).then(|| edited.to_owned())
    };
    ProfileUpdate {
        full_name: changed(ProfileField::FullName),
        email: changed(ProfileField::Email),
        date_of_birth: changed(ProfileField::DateOfBirth),
        gender: changed(ProfileField::Gender),
        alternate_phone: changed(ProfileField::AlternatePhone),
        village: changed(ProfileField::Village),
        state: changed(ProfileField::State),
        district: changed(ProfileField::District),
        pincode: changed(ProfileField::Pincode),
        current_class: changed(ProfileField::CurrentClass),
        student_id: changed(ProfileField::StudentId),
    }
}

/// Initials shown in place of a profile image.
pub fn initials(full_name: &str) -> String {
    full_name.split_whitespace().filter_map(|word| word.chars().next()).take(2).flat_map(char::to_uppercase).collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let api = StoredValue::new(expect_context::<BrowserApiClient>());
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let form = RwSignal::new(ProfileForm::default());

    // Reset the draft whenever the session user changes.
    Effect::new(move || {
        if let Some(user) = auth.user() {
            form.set(ProfileForm::from_user(&user));
        }
    });

    let on_edit = move |_| editing.set(true);
    let on_cancel = move |_| {
        if let Some(user) = auth.user() {
            form.set(ProfileForm::from_user(&user));
        }
        editing.set(false);
    };

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(user) = auth.user() else {
            return;
        };
        let update = form.with_untracked(|f| profile_changes(&user, f));
        if update.is_empty() {
            crate::util::notify::alert(NO_CHANGES);
            editing.set(false);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let saved = api
                    .update_user_profile(&update)
                    .await
                    .into_result(PROFILE_FALLBACK)
                    .and_then(|updated| auth.set_user(updated).map_err(|e| format!("Could not save your profile: {e}")));
                match saved {
                    Ok(()) => {
                        editing.set(false);
                        crate::util::notify::alert(PROFILE_SAVED);
                    }
                    Err(message) => crate::util::notify::alert(&message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, api);
            busy.set(false);
        }
    };

    let field_view = move |field: ProfileField| {
        let value = move || form.with(|f| f.get(field).to_owned());
        let set_value = move |value: String| form.update(|f| f.set(field, value));
        let options = field.options();
        let input = if options.is_empty() {
            view! {
                <input
                    class="profile-field__input"
                    type={field.input_type()}
                    disabled=move || !editing.get()
                    prop:value=value
                    on:input=move |ev| set_value(event_target_value(&ev))
                />
            }
            .into_any()
        } else {
            view! {
                <select class="profile-field__input" disabled=move || !editing.get() prop:value=value on:change=move |ev| set_value(event_target_value(&ev))>
                    <option value="">{format!("Select {}", field.label())}</option>
                    {options.iter().map(|option| view! { <option value={*option}>{*option}</option> }).collect_view()}
                </select>
            }
            .into_any()
        };
        view! {
            <label class="profile-field">
                <span class="profile-field__label">{field.label()}</span>
                {input}
            </label>
        }
    };

    let header = move || {
        auth.user().map(|user| {
            view! {
                <header class="profile-page__header">
                    <div class="profile-page__avatar">{initials(&user.full_name)}</div>
                    <div>
                        <h1>{user.full_name.clone()}</h1>
                        <p class="profile-page__meta">{user.mobile_number.clone()}</p>
                        {(!user.date_joined.is_empty())
                            .then(|| view! { <p class="profile-page__meta">"Joined " {user.date_joined.clone()}</p> })}
                    </div>
                </header>
            }
        })
    };

    view! {
        <div class="profile-page">
            {header}
            {SECTIONS
                .iter()
                .map(|(title, fields)| {
                    view! {
                        <section class="profile-section">
                            <h2>{*title}</h2>
                            <div class="profile-section__grid">
                                {fields.iter().map(|field| field_view(*field)).collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
            <div class="profile-page__actions">
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <button class="btn" type="button" on:click=on_edit>"Edit Profile"</button> }
                >
                    <button class="btn btn--primary" type="button" disabled=move || busy.get() on:click=on_save>
                        {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                    <button class="btn" type="button" disabled=move || busy.get() on:click=on_cancel>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </div>
    }
}
