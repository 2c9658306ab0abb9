use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config;

/// The two looks the fixed header switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPreset {
    Resting,
    Scrolled,
}

impl HeaderPreset {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > config::HEADER_SCROLL_THRESHOLD {
            HeaderPreset::Scrolled
        } else {
            HeaderPreset::Resting
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderPreset::Resting => "rgba(255, 255, 255, 0.95)",
            HeaderPreset::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderPreset::Resting => "0 2px 20px rgba(0, 0, 0, 0.1)",
            HeaderPreset::Scrolled => "0 2px 30px rgba(0, 0, 0, 0.15)",
        }
    }

    pub fn style(self) -> String {
        format!("background: {}; box-shadow: {};", self.background(), self.box_shadow())
    }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "الرئيسية"),
    ("#rules", "القوانين"),
    ("#apply", "قدّم الآن"),
    ("#faq", "الأسئلة الشائعة"),
    ("#contact", "تواصل معنا"),
];

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    // Re-renders on every window scroll event.
    let (_, scroll_y) = use_window_scroll();
    let preset = HeaderPreset::for_offset(scroll_y);

    html! {
        <header class="header" style={preset.style()}>
            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    backdrop-filter: blur(10px);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .nav {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #6c5ce7;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: #2d3436;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #6c5ce7;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
            <nav class="nav">
                <AnchorLink href="#home" class="nav-logo">{"Hydra Land"}</AnchorLink>
                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <AnchorLink href={*href} class="nav-link">{*label}</AnchorLink>
                        </li>
                    }) }
                </ul>
            </nav>
        </header>
    }
}
