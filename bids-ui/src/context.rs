use bids_core::selection::{ScopeError, SelectionHandle, SelectionScope};
use bids_core::vendor::Vendor;
use leptos::*;

/// What nested consumers get from the provider: the store handle plus a
/// version signal bumped on every replacement so observing views refresh.
#[derive(Clone)]
pub struct BidsContext {
    handle: SelectionHandle,
    version: RwSignal<u32>,
}

impl BidsContext {
    pub fn selected(&self) -> Result<Option<Vendor>, ScopeError> {
        self.version.get();
        self.handle.read()
    }

    pub fn set_selected(&self, selection: Option<Vendor>) -> Result<(), ScopeError> {
        self.handle.replace(selection)?;
        self.version.update(|n| *n += 1);
        Ok(())
    }
}

/// Establishes the selection scope for its subtree. The scope lives as long
/// as the provider; once the provider is disposed every surviving handle
/// reports `ScopeError::OutOfScope`.
#[component]
pub fn BidsProvider(children: Children) -> impl IntoView {
    let scope = store_value(SelectionScope::initialize());
    let handle = scope.with_value(|scope| scope.handle());
    provide_context(BidsContext {
        handle,
        version: create_rw_signal(0),
    });
    children()
}

/// The precondition check: consumers not nested under a `BidsProvider` get a
/// typed error instead of an ambient panic.
pub fn use_bids() -> Result<BidsContext, ScopeError> {
    use_context::<BidsContext>().ok_or(ScopeError::OutOfScope)
}
