use dioxus::prelude::*;

use crate::route::{NavVariant, Route};
use crate::{BRAND_GRADIENT, BRAND_TITLE, LOGO_ALT, LOGO_SRC};

/// Layout for every nav-wrapped route: the route's nav bar, then the page.
#[component]
pub fn NavShell() -> Element {
    let route = use_route::<Route>();
    let variant = route.nav_variant();
    tracing::debug!(?route, ?variant, "rendering route");

    rsx! {
        if let Some(variant) = variant {
            NavBar { variant }
        }
        Outlet::<Route> {}
    }
}

#[component]
pub fn NavBar(variant: NavVariant) -> Element {
    rsx! {
        nav { class: "border-b border-gray-200 bg-white",
            div { class: "px-8 py-3",
                {match variant {
                    NavVariant::BackLink => rsx! { BackLink {} },
                    NavVariant::BrandTitle => rsx! { BrandTitle {} },
                }}
            }
        }
    }
}

/// Always points at the dashboard, whatever page it sits on.
pub fn back_link_target() -> Route {
    Route::Dashboard {}
}

#[component]
fn BackLink() -> Element {
    rsx! {
        Link {
            to: back_link_target(),
            class: "text-sm font-medium text-brand-600 hover:text-brand-700 hover:underline",
            "← Back to Dashboard"
        }
    }
}

#[component]
fn BrandTitle() -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            img { src: LOGO_SRC, alt: LOGO_ALT, class: "h-6 w-6" }
            h1 {
                class: "bg-clip-text text-lg font-bold text-transparent",
                style: "background-image: {BRAND_GRADIENT};",
                "{BRAND_TITLE}"
            }
        }
    }
}
