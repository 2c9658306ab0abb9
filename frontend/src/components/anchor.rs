use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Element id an in-page `href` points at. `None` for external links and bare `#`.
pub fn fragment_target(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    // Arabic section ids arrive percent-encoded.
    urlencoding::decode(fragment).ok().map(|id| id.into_owned())
}

/// Smooth-scrolls the element `href` names to the top of the viewport. Does nothing
/// when there is no such element.
pub fn scroll_to_fragment(href: &str) {
    if let Some(id) = fragment_target(href) {
        if let Some(target) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(&id))
        {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            log::debug!("No element with id {:?} to scroll to", id);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_fragment(&href);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment() {
        assert_eq!(fragment_target("#apply"), Some("apply".to_string()));
    }

    #[test]
    fn percent_encoded_fragment_is_decoded() {
        assert_eq!(
            fragment_target("#%D8%A7%D9%84%D9%82%D9%88%D8%A7%D9%86%D9%8A%D9%86"),
            Some("القوانين".to_string())
        );
    }

    #[test]
    fn non_fragments_are_ignored() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://discord.gg/hydraland"), None);
        assert_eq!(fragment_target(""), None);
    }
}
