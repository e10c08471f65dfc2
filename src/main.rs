mod app_router;
mod app_runtime;
mod audio;
mod content;
mod input;
mod message_view;
mod page_core;
mod proposal_view;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    yew_app::run();
}
