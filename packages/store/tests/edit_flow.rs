use store::forms::{ConnectDraft, ConnectField, FieldError, FormState, WorkDraft};
use store::notify::{NotificationLog, NotifyKind};
use store::seed::example_user;
use store::{
    ConnectEditor, EditSession, IconKey, ProjectsEditor, ProjectsMode, SectionData, SectionId,
    WorkEditor, WorkType,
};

fn connects(session: &EditSession) -> Vec<store::Connect> {
    match &session.get_temp_section(SectionId::Connect).unwrap().data {
        SectionData::Connect(items) => items.clone(),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn add_connect_through_form_then_commit() {
    let mut session = EditSession::new(example_user());
    let log = NotificationLog::new();
    session.begin_edit();

    let mut form: FormState<ConnectDraft> = FormState::for_add();
    form.edit(ConnectField::MediaName, |d| d.select_icon(Some(IconKey::Gmail)));
    form.edit(ConnectField::Link, |d| d.link = "not-an-email".to_string());
    assert!(form.submit().is_none());
    assert_eq!(form.error(ConnectField::Link), Some(FieldError::InvalidEmail));

    form.edit(ConnectField::Link, |d| d.link = "me@site.dev".to_string());
    assert!(form.error(ConnectField::Link).is_none());
    let item = form.submit().unwrap();

    let id = ConnectEditor::new(&mut session, &log).unwrap().add(item);
    form.reset();
    assert!(!form.is_edit());
    assert_eq!(form.draft, ConnectDraft::default());
    assert!(form.errors().is_empty());

    let added = connects(&session).into_iter().find(|c| c.id == id).unwrap();
    assert_eq!(added.media_name, "Gmail");
    assert_eq!(added.link, "mailto:me@site.dev");
    assert_eq!(added.display_link(), "me@site.dev");

    assert!(session.has_changes());
    session.commit_edit();
    assert!(!session.has_changes());
    assert!(!session.is_editing());
    assert!(matches!(
        &session.get_section(SectionId::Connect).unwrap().data,
        SectionData::Connect(items) if items.iter().any(|c| c.id == id)
    ));
}

#[test]
fn edit_work_keeps_its_id() {
    let mut session = EditSession::new(example_user());
    session.begin_edit();
    let log = NotificationLog::new();

    let first = WorkEditor::new(&mut session, &log).unwrap().items()[0].clone();
    let mut form: FormState<WorkDraft> = FormState::for_edit(&first);
    assert!(form.is_edit());
    form.draft.title = "Tech Lead".to_string();
    form.draft.work_type = Some(WorkType::Office);
    let edited = form.submit().unwrap();
    assert_eq!(edited.id, first.id);

    let mut editor = WorkEditor::new(&mut session, &log).unwrap();
    editor.save(edited);
    assert_eq!(editor.items()[0].title, "Tech Lead");
    assert_eq!(editor.items().len(), 1);
}

#[test]
fn cancel_discards_every_section_change() {
    let mut session = EditSession::new(example_user());
    let original = session.user().clone();
    let log = NotificationLog::new();
    session.begin_edit();

    {
        let mut projects = ProjectsEditor::new(&mut session, &log).unwrap();
        projects.set_type(ProjectsMode::Artwork);
        projects.toggle_visibility();
    }
    let ids: Vec<String> = connects(&session).into_iter().map(|c| c.id).collect();
    ConnectEditor::new(&mut session, &log).unwrap().move_item(&ids[0], &ids[1]);
    session.update_profile("Someone else", "", "");

    assert_eq!(log.last().map(|(_, k)| k), Some(NotifyKind::Info));
    assert!(session.has_changes());

    session.cancel_edit();
    assert_eq!(session.user(), &original);
    assert_eq!(session.temp_user(), &original);
    assert!(!session.has_changes());
}

#[test]
fn project_detail_follows_renamed_slug_after_save() {
    let mut session = EditSession::new(example_user());
    session.begin_edit();
    {
        let mut projects = ProjectsEditor::new(&mut session, &store::notify::Silent).unwrap();
        let mut links = projects.links().unwrap();
        let mut link = links.items()[0].clone();
        link.title = "Poké Catch 2".to_string();
        links.save(link);
    }
    assert!(session.find_link_by_slug("poke-catch").is_some());
    session.commit_edit();
    assert!(session.find_link_by_slug("poke-catch").is_none());
    assert_eq!(session.find_link_by_slug("poke-catch-2").unwrap().title, "Poké Catch 2");
}
