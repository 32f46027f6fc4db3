use crate::bids::BidsPanel;
use crate::context::BidsProvider;
use crate::errors::GlobalErrorView;
use crate::login::LoginView;
use bids_core::boundary::BoundaryError;
use leptos::*;

/// Escalation slot for errors no section-level boundary claims. Nested code
/// sets it; the shell swaps the whole tree for the global error screen.
#[derive(Clone, Copy)]
pub struct FatalSignal(pub RwSignal<Option<BoundaryError>>);

#[component]
pub fn App() -> impl IntoView {
    let fatal = create_rw_signal(None::<BoundaryError>);
    provide_context(FatalSignal(fatal));

    view! {
      <Show
        when=move || fatal.get().is_none()
        fallback=move || view! {
          <GlobalErrorView
            error=fatal.get_untracked().unwrap_or_else(|| BoundaryError::new("unknown error"))
            on_reset=move |_| fatal.set(None)
          />
        }
      >
        <BidsProvider>
          <header class="topbar">
            <h1>"Bids"</h1>
          </header>
          <main class="layout">
            <LoginView/>
            <BidsPanel/>
          </main>
        </BidsProvider>
      </Show>
    }
}
