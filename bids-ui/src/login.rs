use leptos::*;

/// Login page: layout around the form, nothing else lives here.
#[component]
pub fn LoginView() -> impl IntoView {
    view! {
      <section class="panel login">
        <h2>"Sign in"</h2>
        <LoginForm/>
      </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    view! {
      <div class="stack">
        <input
          prop:value=move || email.get()
          on:input=move |ev| email.set(event_target_value(&ev))
          placeholder="Email"
        />
        <input
          type="password"
          prop:value=move || password.get()
          on:input=move |ev| password.set(event_target_value(&ev))
          placeholder="Password"
        />
        <button on:click=move |_| {
          logging::log!("login submitted for {}", email.get_untracked());
        }>"Sign in"</button>
      </div>
    }
}
