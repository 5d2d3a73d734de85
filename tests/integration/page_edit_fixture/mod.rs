use std::sync::Arc;

use mockall::mock;
use mockall::predicate::eq;
use page_edit_mvu::{
    Document, DocumentEditActions, NoPrompt, PageEdit, PageEditEvent, PageEditProps,
    TestMvuDriver, TestMvuRuntime, TestRenderer, ViewState,
};

mock! {
    pub Actions {}

    impl DocumentEditActions for Actions {
        fn fetch_document(&self, id: &str);
        fn save_document(&self, document: &Document);
        fn delete_document(&self, id: &str);
        fn update_title(&self, value: &str);
        fn update_body(&self, value: &str);
        fn update_path(&self, value: &str);
        fn update_draft(&self, value: bool);
        fn clear_validation_errors(&self);
    }
}

pub(crate) type PageEditDriver = TestMvuDriver<
    PageEditEvent,
    ViewState,
    PageEditProps,
    PageEdit,
    TestRenderer<PageEditProps>,
>;

pub(crate) fn page() -> Document {
    Document {
        id: "page.md".to_string(),
        title: "Page".to_string(),
        body: "# Test Page\n\nBody text.".to_string(),
        path: "page.md".to_string(),
        draft: false,
    }
}

pub(crate) fn default_state() -> ViewState {
    ViewState {
        document: Some(page()),
        ..ViewState::for_route("page.md")
    }
}

pub(crate) struct PageEditTest {
    pub(crate) driver: PageEditDriver,
    pub(crate) renders: TestRenderer<PageEditProps>,
}

pub(crate) fn build_page_edit_test() -> PageEditTestBuilder {
    PageEditTestBuilder {
        state: default_state(),
        actions: MockActions::new(),
        confirm_delete: false,
    }
}

pub(crate) struct PageEditTestBuilder {
    state: ViewState,
    actions: MockActions,
    confirm_delete: bool,
}

impl PageEditTestBuilder {
    pub(crate) fn given_state(mut self, configure: impl FnOnce(&mut ViewState)) -> Self {
        configure(&mut self.state);
        self
    }

    pub(crate) fn given_field_changed(self) -> Self {
        self.given_state(|state| state.field_changed = true)
    }

    pub(crate) fn given_validation_errors(self, errors: &[&str]) -> Self {
        let errors = errors.iter().map(|e| e.to_string()).collect();
        self.given_state(|state| state.validation_errors = errors)
    }

    pub(crate) fn given_delete_is_confirmed(mut self) -> Self {
        self.confirm_delete = true;
        self
    }

    pub(crate) fn expecting(mut self, configure: impl FnOnce(&mut MockActions)) -> Self {
        configure(&mut self.actions);
        self
    }

    /// Attaches the view. Attach expectations are added here, so every
    /// test also checks the view clears errors and loads the routed page
    /// exactly once.
    pub(crate) fn build(mut self) -> PageEditTest {
        self.actions
            .expect_clear_validation_errors()
            .times(1)
            .return_const(());
        self.actions
            .expect_fetch_document()
            .with(eq(self.state.route_params.id.clone()))
            .times(1)
            .return_const(());

        let actions = Arc::new(self.actions);
        let view = if self.confirm_delete {
            PageEdit::new(actions, |_: &str| true)
        } else {
            PageEdit::new(actions, NoPrompt)
        };

        let renders = TestRenderer::<PageEditProps>::new();
        let driver = TestMvuRuntime::new(self.state, view, renders.clone()).run();

        PageEditTest { driver, renders }
    }
}
