use mockall::predicate::eq;
use page_edit_mvu::KeyChord;

use super::build_page_edit_test;

#[test]
fn given_confirmation_when_delete_clicked_should_delete_routed_page_once() {
    let mut test = build_page_edit_test()
        .given_delete_is_confirmed()
        .expecting(|actions| {
            actions
                .expect_delete_document()
                .with(eq("page.md"))
                .times(1)
                .return_const(());
        })
        .build();

    test.renders
        .with_latest(|props| props.editor().unwrap().delete.click());
    test.driver.process_events();
}

#[test]
fn given_edits_in_every_field_should_forward_each_value() {
    let mut test = build_page_edit_test()
        .expecting(|actions| {
            actions
                .expect_update_title()
                .with(eq("New title"))
                .times(1)
                .return_const(());
            actions
                .expect_update_body()
                .with(eq("New body"))
                .times(1)
                .return_const(());
            actions
                .expect_update_path()
                .with(eq("new-path.md"))
                .times(1)
                .return_const(());
            actions
                .expect_update_draft()
                .with(eq(true))
                .times(1)
                .return_const(());
        })
        .build();

    test.renders.with_latest(|props| {
        let editor = props.editor().unwrap();
        editor.title.change("New title");
        editor.body.change("New body");
        editor.path.change("new-path.md");
        editor.draft.toggle();
    });
    test.driver.process_events();

    // One render per processed edit on top of the initial one
    assert_eq!(test.renders.count(), 5);
}

#[test]
fn given_edits_should_not_change_rendered_values_until_store_pushes_state() {
    let mut test = build_page_edit_test()
        .expecting(|actions| {
            actions.expect_update_title().return_const(());
        })
        .build();

    test.renders
        .with_latest(|props| props.editor().unwrap().title.change("Typed"));
    test.driver.process_events();

    test.renders.with_latest(|props| {
        assert_eq!(props.editor().unwrap().title.value, "Page");
    });
}

#[test]
fn given_unchanged_fields_when_save_shortcut_pressed_should_not_save() {
    let mut test = build_page_edit_test()
        .expecting(|actions| {
            actions.expect_save_document().never();
        })
        .build();

    test.renders
        .with_latest(|props| props.editor().unwrap().press(KeyChord::primary('s')));
    test.driver.process_events();
}

#[test]
fn given_changed_field_when_save_shortcut_pressed_should_save_once() {
    let mut test = build_page_edit_test()
        .given_field_changed()
        .expecting(|actions| {
            actions.expect_save_document().times(1).return_const(());
        })
        .build();

    test.renders.with_latest(|props| {
        let editor = props.editor().unwrap();
        editor.press(KeyChord::plain('s'));
        editor.press(KeyChord::primary('s'));
    });
    test.driver.process_events();
}
