use pretty_assertions::assert_eq;
use silentpad_core::auth::CredentialHasher;
use silentpad_core::kv::MemoryKvStore;
use silentpad_core::{AppServices, AuthError, Note, NoteId, Session};

use crate::cli::AuthCommands;
use crate::commands::add::add_note;
use crate::commands::auth_cmd::run_auth;
use crate::commands::common::{
    clean_note_text, format_note_lines, note_to_list_item, open_services, parse_note_id,
    relative_age, search_query,
};
use crate::commands::delete::run_delete;
use crate::commands::edit::edit_note;
use crate::commands::profile::update_profile;
use crate::commands::reset::run_reset;
use crate::commands::search::search_notes;
use crate::commands::settings::{format_settings, update_settings, SettingsUpdate};
use crate::commands::show::find_note;
use crate::error::CliError;

fn test_services() -> AppServices<MemoryKvStore> {
    AppServices::open_in_memory().with_hasher(CredentialHasher::with_params(8, 1, 1).unwrap())
}

#[test]
fn clean_note_text_trims_and_rejects_empty() {
    assert_eq!(clean_note_text("  hello  "), Some("hello".to_string()));
    assert_eq!(clean_note_text(" \n\t "), None);
}

#[test]
fn clean_note_text_keeps_lines_and_folds_crlf() {
    assert_eq!(
        clean_note_text("line 1\r\nline 2\r\n"),
        Some("line 1\nline 2".to_string())
    );
}

#[test]
fn search_query_rejects_blank() {
    assert_eq!(search_query("  milk ").unwrap(), "milk");
    assert!(matches!(search_query("   "), Err(CliError::EmptySearchQuery)));
}

#[test]
fn parse_note_id_accepts_padded_numbers() {
    assert_eq!(parse_note_id(" 42 ").unwrap(), NoteId::from_raw(42));
    assert!(matches!(parse_note_id(""), Err(CliError::EmptyNoteId)));
    assert!(matches!(
        parse_note_id("abc"),
        Err(CliError::InvalidNoteId(id)) if id == "abc"
    ));
}

#[test]
fn relative_age_units() {
    let now = 10_000_000_000;
    assert_eq!(relative_age(now - 30_000, now), "just now");
    assert_eq!(relative_age(now - 120_000, now), "2m ago");
    assert_eq!(relative_age(now - 2 * 60 * 60_000, now), "2h ago");
    assert_eq!(relative_age(now - 3 * 24 * 60 * 60_000, now), "3d ago");
    assert_eq!(relative_age(now - 14 * 24 * 60 * 60_000, now), "2w ago");
    assert_eq!(relative_age(now + 5_000, now), "just now");
}

#[test]
fn format_note_lines_use_untitled_fallback() {
    let notes = vec![Note::new(NoteId::from_raw(7), "", "Buy milk")];
    let lines = format_note_lines(&notes);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("7 "));
    assert!(lines[0].contains("Untitled"));
    assert!(lines[0].contains("Buy milk"));
}

#[test]
fn note_list_item_carries_raw_fields() {
    let note = Note::new(NoteId::from_raw(9), "Title", "first line\nsecond line");
    let item = note_to_list_item(&note);
    assert_eq!(item.id, 9);
    assert_eq!(item.title, "Title");
    assert_eq!(item.preview, "first line");
    assert_eq!(item.content, "first line\nsecond line");
    assert_eq!(item.timestamp, note.timestamp);
}

#[test]
fn add_note_rejects_empty_note() {
    let app = test_services();
    assert!(matches!(add_note(&app, "  ", ""), Err(CliError::EmptyNote)));
    assert!(app.notes.get_all().unwrap().is_empty());
}

#[test]
fn add_note_allows_title_only_or_content_only() {
    let app = test_services();
    let titled = add_note(&app, " Ideas ", "").unwrap();
    let untitled = add_note(&app, "", "just a body").unwrap();

    assert_eq!(titled.title, "Ideas");
    assert_eq!(untitled.display_title(), "Untitled");

    let notes = app.notes.get_all().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, untitled.id);
    assert_eq!(notes[1].id, titled.id);
}

#[test]
fn edit_note_updates_in_place() {
    let app = test_services();
    let first = add_note(&app, "First", "one").unwrap();
    let second = add_note(&app, "Second", "two").unwrap();

    let edited = edit_note(&app, &first.id.to_string(), None, Some("uno")).unwrap();
    assert_eq!(edited.id, first.id);
    assert_eq!(edited.title, "First");
    assert_eq!(edited.content, "uno");

    let ids = app
        .notes
        .get_all()
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn edit_note_requires_a_change_and_an_existing_note() {
    let app = test_services();
    let note = add_note(&app, "Keep", "body").unwrap();

    assert!(matches!(
        edit_note(&app, &note.id.to_string(), None, None),
        Err(CliError::NothingToEdit)
    ));
    assert!(matches!(
        edit_note(&app, "123", Some("x"), None),
        Err(CliError::NoteNotFound(_))
    ));
    assert!(matches!(
        edit_note(&app, &note.id.to_string(), Some(""), Some("")),
        Err(CliError::EmptyNote)
    ));
    assert_eq!(find_note(&app, &note.id.to_string()).unwrap().content, "body");
}

#[test]
fn edit_after_delete_reports_missing_note() {
    let app = test_services();
    let note = add_note(&app, "Short lived", "body").unwrap();
    app.notes.delete(note.id).unwrap();

    assert!(matches!(
        edit_note(&app, &note.id.to_string(), Some("Back"), None),
        Err(CliError::NoteNotFound(_))
    ));
    assert!(app.notes.get_all().unwrap().is_empty());
}

#[test]
fn search_notes_matches_title_and_content() {
    let app = test_services();
    add_note(&app, "Groceries", "milk, eggs").unwrap();
    add_note(&app, "Work", "Quarterly MILK report").unwrap();
    add_note(&app, "Travel", "pack bags").unwrap();

    let found = search_notes(&app, " milk ").unwrap();
    let titles = found.iter().map(|note| note.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Work", "Groceries"]);
    assert!(matches!(
        search_notes(&app, " "),
        Err(CliError::EmptySearchQuery)
    ));
}

#[test]
fn delete_is_quiet_for_unknown_ids() {
    let app = test_services();
    let note = add_note(&app, "Gone soon", "").unwrap();

    run_delete(&app, &note.id.to_string()).unwrap();
    run_delete(&app, &note.id.to_string()).unwrap();
    assert!(app.notes.get_all().unwrap().is_empty());
}

#[test]
fn reset_requires_confirmation() {
    let app = test_services();
    add_note(&app, "Keep me", "").unwrap();

    assert!(matches!(
        run_reset(&app, false),
        Err(CliError::ConfirmationRequired)
    ));
    assert_eq!(app.notes.get_all().unwrap().len(), 1);

    run_reset(&app, true).unwrap();
    assert!(app.notes.get_all().unwrap().is_empty());
}

#[test]
fn auth_commands_drive_the_session() {
    let app = test_services();

    run_auth(
        &app,
        AuthCommands::Register {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        },
    )
    .unwrap();
    assert_eq!(
        app.sessions.current_session().unwrap(),
        Session::LoggedIn("a@x.com".to_string())
    );

    run_auth(&app, AuthCommands::Logout).unwrap();
    assert_eq!(app.sessions.current_session().unwrap(), Session::LoggedOut);

    let error = run_auth(
        &app,
        AuthCommands::Login {
            email: "a@x.com".to_string(),
            password: "wrong-pass".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(error, CliError::Auth(AuthError::WrongPassword)));
    assert_eq!(error.to_string(), "Incorrect password");

    run_auth(
        &app,
        AuthCommands::Login {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        },
    )
    .unwrap();
    run_auth(
        &app,
        AuthCommands::Passwd {
            current: "secret1".to_string(),
            new: "secret2".to_string(),
            confirm: "secret2".to_string(),
        },
    )
    .unwrap();
    run_auth(&app, AuthCommands::Logout).unwrap();

    app.sessions.login("a@x.com", "secret2").unwrap();
}

#[test]
fn register_duplicate_reports_existing_account() {
    let app = test_services();
    let register = || AuthCommands::Register {
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
    };

    run_auth(&app, register()).unwrap();
    let error = run_auth(&app, register()).unwrap_err();
    assert_eq!(error.to_string(), "Account with this email already exists");
    assert!(error.hint().is_none());
}

#[test]
fn update_settings_merges_and_clamps() {
    let app = test_services();

    let settings = update_settings(
        &app,
        SettingsUpdate {
            dark_mode: Some(false),
            font_size: Some(40),
            ..SettingsUpdate::default()
        },
    )
    .unwrap();

    assert!(!settings.dark_mode);
    assert!(settings.notifications);
    assert!(settings.auto_save);
    assert_eq!(settings.font_size, 24);
    assert_eq!(app.settings.load().unwrap(), settings);
}

#[test]
fn format_settings_lists_every_field() {
    let app = test_services();
    let lines = format_settings(&app.settings.load().unwrap());
    assert_eq!(
        lines,
        vec![
            "dark_mode      on".to_string(),
            "notifications  on".to_string(),
            "auto_save      on".to_string(),
            "font_size      16sp".to_string(),
        ]
    );
}

#[test]
fn update_profile_keeps_unset_fields() {
    let app = test_services();
    update_profile(&app, Some(" Ada ".to_string()), Some("555-0100".to_string())).unwrap();
    let profile = update_profile(&app, None, Some(String::new())).unwrap();

    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.phone, "");
    assert_eq!(app.profile.load().unwrap(), profile);
}

#[test]
fn open_services_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let app = open_services(dir.path()).unwrap();
        add_note(&app, "Persisted", "across runs").unwrap()
    };

    let app = open_services(dir.path()).unwrap();
    assert_eq!(
        find_note(&app, &created.id.to_string()).unwrap().title,
        "Persisted"
    );
}

#[test]
fn corrupt_note_data_gets_a_reset_hint() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("notes_prefs.json"),
        r#"{"notes_list":"not json"}"#,
    )
    .unwrap();

    let app = open_services(dir.path()).unwrap();
    let error = CliError::from(app.notes.get_all().unwrap_err());
    assert!(error.hint().unwrap().contains("reset --yes"));

    run_reset(&app, true).unwrap();
    assert!(app.notes.get_all().unwrap().is_empty());
}

#[test]
fn corrupt_account_data_is_not_blamed_on_notes() {
    let dir = tempfile::tempdir().unwrap();
    let app = open_services(dir.path()).unwrap();
    add_note(&app, "Keep me", "").unwrap();
    std::fs::write(dir.path().join("silentpad_auth.json"), "{not json").unwrap();

    let error = CliError::from(app.sessions.current_session().unwrap_err());
    let hint = error.hint().unwrap();
    assert!(hint.contains("silentpad_auth.json"));
    assert!(!hint.contains("reset --yes"));
    assert_eq!(app.notes.get_all().unwrap().len(), 1);
}

#[test]
fn corrupt_settings_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app_settings.json"), "[1, 2").unwrap();
    let app = open_services(dir.path()).unwrap();

    let error = CliError::from(app.settings.load().unwrap_err());
    let hint = error.hint().unwrap();
    assert!(hint.contains("app_settings.json"));
    assert!(!hint.contains("reset --yes"));
}

#[test]
fn password_hash_failures_have_no_storage_hint() {
    let error = CliError::from(AuthError::PasswordHash("no randomness".to_string()));
    assert_eq!(error.hint(), None);
}
