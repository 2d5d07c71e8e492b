//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use prodcheck_products::{ProductId, ProductList};

use crate::clock::SystemClock;
use crate::config::UiConfig;
use crate::nav::{HOME_PATH, NAV_LINKS, SETTINGS_PATH};
use crate::session::HomeSession;
use crate::view_model;

/// Session shared by every mount of the home route.
type SharedSession = StoredValue<HomeSession>;

/// Main application component.
///
/// Owns the one [`HomeSession`] for the page load, so leaving and re-entering
/// the home route keeps earlier deletions.
#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let title = config.title.clone();
    provide_context(config);
    provide_context::<SharedSession>(store_value(HomeSession::start(SystemClock)));

    view! {
        <Router>
            <Navbar/>
            <header class="header">
                <h1>{title}</h1>
            </header>
            <main class="content">
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=SETTINGS_PATH view=SettingsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="links">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <A href=link.href>{link.label}</A><br/> })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Home page: product listing plus the manually refreshed clock.
#[component]
fn HomePage() -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();

    let session = use_context::<SharedSession>().unwrap_or_else(|| {
        tracing::warn!("home page mounted outside App, starting a detached session");
        store_value(HomeSession::start(SystemClock))
    });
    let (products, set_products) = create_signal(session.with_value(|s| s.products()));
    let (clock_text, set_clock_text) =
        create_signal(session.with_value(|s| s.clock_text().to_string()));

    // Re-render from the snapshot carried by each store change.
    let listener = session.with_value(|s| {
        s.observe(move |event| set_products.set(event.products().clone()))
    });
    // The session outlives this view; only the listener goes away.
    on_cleanup(move || {
        session.try_with_value(|s| s.unobserve(listener));
    });

    let on_delete = Callback::new(move |id: ProductId| {
        session.update_value(|s| s.handle_delete(id));
    });

    let on_refresh = move |_| {
        let text = session
            .try_update_value(|s| s.handle_refresh().to_string())
            .unwrap_or_default();
        set_clock_text.set(text);
    };

    view! {
        <div class="home">
            <ProductListing
                products=products
                on_delete=on_delete
                delete_label=config.delete_label.clone()
                empty_message=config.empty_message.clone()
            />
            <h2>{config.home_heading.clone()}</h2>
            <p class="clock">{move || clock_text.get()}</p>
            <button on:click=on_refresh>{config.refresh_label.clone()}</button>
        </div>
    }
}

#[component]
fn ProductListing(
    products: ReadSignal<ProductList>,
    on_delete: Callback<ProductId>,
    delete_label: String,
    empty_message: String,
) -> impl IntoView {
    view! {
        <div class="product-list">
            {move || {
                let rows = view_model::rows(&products.get());
                if rows.is_empty() {
                    return view! { <p class="empty">{empty_message.clone()}</p> }.into_view();
                }
                rows.into_iter()
                    .map(|row| {
                        let id = row.id;
                        view! {
                            <div class="product-preview">
                                <h2>
                                    <span>{row.model}" "</span>
                                    <span>" "{row.retailer}</span>
                                    <span>" "{row.available}</span>
                                    <button on:click=move |_| on_delete.call(id)>
                                        {delete_label.clone()}
                                    </button>
                                </h2>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Placeholder behind the second navigation link.
#[component]
fn SettingsPage() -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();

    view! {
        <div class="settings">
            <h2>"Settings"</h2>
            <p>{config.settings_message}</p>
            <A href=HOME_PATH>"Back to products"</A>
        </div>
    }
}
