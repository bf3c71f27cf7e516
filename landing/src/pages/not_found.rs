use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">"We could not find that page."</p>
                <A href="/" attr:class="btn btn-navy">"Back to home"</A>
            </div>
        </section>
    }
}
