//! Title card at `/`.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="landing__grain"></div>
            <div class="landing__vignette"></div>
            <div class="landing__content">
                <h1 class="landing__title">
                    "THE FILM"
                    <br />
                    "RECOMMENDER"
                </h1>
                <a class="landing__enter" href="/signin">
                    "SIGN IN"
                </a>
            </div>
        </div>
    }
}
