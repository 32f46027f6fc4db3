mod app;
mod bids;
mod context;
mod errors;
mod login;

use app::App;
use leptos::view;

fn main() {
    leptos::mount_to_body(|| view! { <App/> })
}
