mod auth;
mod clipboard;
mod config;
mod connect;
mod dashboard;
mod date;
mod decision;
mod design_system;
mod error_pages;
mod forms;
mod landing;
mod latest;
mod mock_data;
mod routes;
mod settings;
mod status;
mod timers;
mod toast;
mod ui;
mod unlock;

fn main() {
    dioxus::launch(routes::App);
}
