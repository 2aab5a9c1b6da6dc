//! Technology tag badge.

use leptos::prelude::*;

use crate::tools::TechBadge as Badge;

#[component]
pub fn TechBadge(badge: Badge) -> impl IntoView {
    let style = badge.style();
    let icon = badge.icon.clone().map(|icon| {
        let icon_style = badge.icon_color.clone().map(|color| format!("color: {color}"));
        view! { <i class=icon style=icon_style aria-hidden="true"></i> }
    });

    view! {
        <span class="tech-badge" style=style>
            {icon}
            <span class="tech-badge__label">{badge.label}</span>
        </span>
    }
}
