// Home page - hero + services showcase
use crate::sections::{Hero, Services};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Services />
    }
}
