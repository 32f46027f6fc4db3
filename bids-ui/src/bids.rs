use crate::app::FatalSignal;
use crate::context::{use_bids, BidsContext};
use crate::errors::DashboardErrorView;
use bids_core::boundary::BoundaryError;
use bids_core::selection::ScopeError;
use bids_core::vendor::Vendor;
use leptos::*;

fn sample_vendors() -> Vec<Vendor> {
    vec![
        Vendor::new("v-1", "Acme Plumbing").with_email("bids@acme.example"),
        Vendor::new("v-2", "Beta Roofing").with_phone("555-0102"),
        Vendor::new("v-3", "Delta Electric")
            .with_email("office@delta-electric.example")
            .with_phone("555-0103"),
    ]
}

/// Bids section. An out-of-scope consumer renders the dashboard boundary
/// with a manual retry instead of the picker.
#[component]
pub fn BidsPanel() -> impl IntoView {
    let attempt = create_rw_signal(0u32);

    move || {
        attempt.get();
        match use_bids() {
            Ok(ctx) => view! { <VendorPicker ctx=ctx/> }.into_view(),
            Err(err) => view! {
              <DashboardErrorView
                error=BoundaryError::new(err.to_string())
                on_reset=move |_| attempt.update(|n| *n += 1)
              />
            }
            .into_view(),
        }
    }
}

#[component]
fn VendorPicker(ctx: BidsContext) -> impl IntoView {
    let vendors = sample_vendors();
    let fatal = use_context::<FatalSignal>();

    let escalate = move |err: ScopeError| {
        if let Some(FatalSignal(slot)) = fatal {
            slot.set(Some(BoundaryError::new(err.to_string())));
        }
    };

    let ctx_view = ctx.clone();
    let ctx_clear = ctx.clone();
    let escalate_clear = escalate;

    view! {
      <section class="panel">
        <h2>"Vendors"</h2>
        <p class="meta">
          {move || match ctx_view.selected() {
              Ok(Some(vendor)) => {
                  let contact = vendor
                      .email
                      .or(vendor.phone)
                      .unwrap_or_else(|| "no contact".into());
                  format!("Selected: {} ({})", vendor.name, contact)
              }
              Ok(None) => "No vendor selected".to_string(),
              Err(err) => err.to_string(),
          }}
        </p>
        <ul>
          <For
            each=move || vendors.clone()
            key=|vendor| vendor.id.clone()
            children=move |vendor| {
              let ctx = ctx.clone();
              let name = vendor.name.clone();
              view! {
                <li class="row">
                  <span>{name}</span>
                  <button on:click=move |_| {
                    if let Err(err) = ctx.set_selected(Some(vendor.clone())) {
                      escalate(err);
                    }
                  }>"Select"</button>
                </li>
              }
            }
          />
        </ul>
        <button on:click=move |_| {
          if let Err(err) = ctx_clear.set_selected(None) {
            escalate_clear(err);
          }
        }>"Clear selection"</button>
      </section>
    }
}
