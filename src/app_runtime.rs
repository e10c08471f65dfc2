use std::cell::RefCell;

use valentine_core::PageConfig;

use crate::app_router;

thread_local! {
    static PAGE_CONFIG: RefCell<Option<PageConfig>> = RefCell::new(None);
}

pub(crate) fn page_config() -> PageConfig {
    PAGE_CONFIG.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(app_router::load_page_config)
            .clone()
    })
}
