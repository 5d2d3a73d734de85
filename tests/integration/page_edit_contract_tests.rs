use page_edit_mvu::{Content, Document};

use super::build_page_edit_test;

#[test]
fn given_default_state_when_attached_should_clear_errors_once_and_render_once() {
    // Attach expectations are checked when the mock is dropped
    let test = build_page_edit_test().build();

    assert_eq!(test.renders.count(), 1);
}

#[test]
fn given_fetching_state_should_render_loading_heading() {
    let test = build_page_edit_test()
        .given_state(|state| state.is_fetching = true)
        .build();

    test.renders.with_latest(|props| {
        assert_eq!(props.heading, "Loading...");
        assert!(props.is_loading());
        assert!(props.editor().is_none());
    });
}

#[test]
fn given_empty_document_should_still_render_a_heading() {
    let test = build_page_edit_test()
        .given_state(|state| state.document = Some(Document::default()))
        .build();

    test.renders.with_latest(|props| {
        assert_eq!(props.heading, "Could not find the page.");
        assert!(matches!(props.content, Content::NotFound));
    });
}

#[test]
fn given_no_document_should_render_not_found_heading() {
    let test = build_page_edit_test()
        .given_state(|state| state.document = None)
        .build();

    test.renders.with_latest(|props| {
        assert_eq!(props.heading, "Could not find the page.");
    });
}

#[test]
fn given_no_validation_errors_should_not_render_error_list() {
    let test = build_page_edit_test().build();

    test.renders.with_latest(|props| {
        assert!(props.errors.is_none());
        assert_eq!(props.heading, "Page");
    });
}

#[test]
fn given_validation_errors_should_render_them_verbatim() {
    let test = build_page_edit_test()
        .given_validation_errors(&["The title field is required!", "The path is taken"])
        .build();

    test.renders.with_latest(|props| {
        assert_eq!(
            props.errors.as_deref(),
            Some(
                &[
                    "The title field is required!".to_string(),
                    "The path is taken".to_string()
                ][..]
            )
        );
    });
}

#[test]
fn given_unchanged_fields_when_save_clicked_should_not_save() {
    let mut test = build_page_edit_test()
        .expecting(|actions| {
            actions.expect_save_document().never();
        })
        .build();

    test.renders.with_latest(|props| {
        let save = &props.editor().unwrap().save;
        assert_eq!(save.label, "Save");
        assert!(!save.active);
        save.click();
    });
    test.driver.process_events();
}

#[test]
fn given_changed_field_when_save_clicked_should_save_once() {
    let mut test = build_page_edit_test()
        .given_field_changed()
        .expecting(|actions| {
            actions
                .expect_save_document()
                .withf(|document| document.id == "page.md" && document.title == "Page")
                .times(1)
                .return_const(());
        })
        .build();

    test.renders.with_latest(|props| {
        let save = &props.editor().unwrap().save;
        assert!(save.active);
        save.click();
    });
    test.driver.process_events();
}

#[test]
fn given_no_confirmation_when_delete_clicked_should_not_delete() {
    let mut test = build_page_edit_test()
        .expecting(|actions| {
            actions.expect_delete_document().never();
        })
        .build();

    test.renders
        .with_latest(|props| props.editor().unwrap().delete.click());
    test.driver.process_events();

    // The click still produced a render, but nothing reached the store
    assert_eq!(test.renders.count(), 2);
}
