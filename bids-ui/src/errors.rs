use bids_core::boundary::{BoundaryError, DashboardBoundary, ErrorBoundary, GlobalBoundary};
use leptos::*;

/// Dashboard-scoped error display: generic message, manual retry. Pressing
/// the button fires `on_reset` once with no arguments.
#[component]
pub fn DashboardErrorView(
    error: BoundaryError,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let affordance = DashboardBoundary.handle(&error);

    view! {
      <section class="panel error">
        <h2>{affordance.heading}</h2>
        <p>{affordance.detail}</p>
        <button on:click=move |_| on_reset.call(())>{affordance.retry_label}</button>
      </section>
    }
}

/// Global error display. The component body runs once per mount, so the
/// boundary's logging side effect fires once per displayed error instance.
#[component]
pub fn GlobalErrorView(
    error: BoundaryError,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let mut boundary = GlobalBoundary::new(|err: &BoundaryError| {
        logging::error!(
            "unhandled application error: {} (digest {:?})",
            err.message,
            err.digest
        );
    });
    let affordance = boundary.handle(&error);

    view! {
      <main class="error-screen">
        <section class="panel error">
          <h2>{affordance.heading}</h2>
          <p>{affordance.detail}</p>
          <button on:click=move |_| on_reset.call(())>{affordance.retry_label}</button>
        </section>
      </main>
    }
}
