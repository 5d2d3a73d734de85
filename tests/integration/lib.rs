mod page_edit_fixture;

pub(crate) use page_edit_fixture::*;

mod interaction_tests;
mod page_edit_contract_tests;
mod snapshot_tests;
