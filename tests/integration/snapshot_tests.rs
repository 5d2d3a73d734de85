use page_edit_mvu::{PageEditEvent, ViewState};

use super::{build_page_edit_test, default_state};

fn replace(state: ViewState) -> PageEditEvent {
    PageEditEvent::StateReplaced(Box::new(state))
}

#[test]
fn given_loading_state_when_store_pushes_page_should_render_editor() {
    let mut test = build_page_edit_test()
        .given_state(|state| {
            state.document = None;
            state.is_fetching = true;
        })
        .build();

    test.driver.handle().emit(replace(default_state()));
    test.driver.process_events();

    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert!(renders[0].is_loading());
        assert_eq!(renders[1].heading, "Page");
        assert!(renders[1].editor().is_some());
    });
    assert_eq!(test.driver.model(), &default_state());
}

#[test]
fn given_store_marks_field_changed_when_save_clicked_on_new_render_should_save() {
    let mut test = build_page_edit_test()
        .expecting(|actions| {
            actions
                .expect_save_document()
                .withf(|document| document.title == "Edited")
                .times(1)
                .return_const(());
        })
        .build();

    let mut edited = default_state();
    edited.field_changed = true;
    if let Some(document) = edited.document.as_mut() {
        document.title = "Edited".to_string();
    }
    test.driver.handle().emit(replace(edited));
    test.driver.process_events();

    test.renders.with_latest(|props| {
        assert_eq!(props.heading, "Edited");
        props.editor().unwrap().save.click();
    });
    test.driver.process_events();
}

#[test]
fn given_save_went_through_when_store_pushes_state_should_show_saved_label() {
    let mut test = build_page_edit_test().given_field_changed().build();

    let mut saved = default_state();
    saved.updated = true;
    test.driver.handle().emit(replace(saved));
    test.driver.process_events();

    test.renders.with_latest(|props| {
        let save = &props.editor().unwrap().save;
        assert_eq!(save.label, "Saved");
        assert!(!save.active);
    });
}

#[test]
fn given_store_reports_errors_after_save_should_render_then_clear_them() {
    let mut test = build_page_edit_test().build();

    let mut invalid = default_state();
    invalid.validation_errors = vec!["The title field is required!".to_string()];
    test.driver.handle().emit(replace(invalid));
    test.driver.handle().emit(replace(default_state()));
    test.driver.process_events();

    test.renders.with_renders(|renders| {
        assert!(renders[0].errors.is_none());
        assert_eq!(
            renders[1].errors,
            Some(vec!["The title field is required!".to_string()])
        );
        assert!(renders[2].errors.is_none());
    });
}

#[test]
fn given_detached_view_should_ignore_later_events() {
    let mut test = build_page_edit_test().build();

    let handle = test.driver.handle();
    handle.detach();
    handle.emit(replace(ViewState::default()));
    test.driver.process_events();

    assert!(test.driver.is_detached());
    assert_eq!(test.renders.count(), 1);
    assert_eq!(test.driver.model(), &default_state());
}
