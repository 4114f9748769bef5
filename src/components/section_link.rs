use yew::prelude::*;

use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a successful in-page scroll.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that smooth scrolls to its section instead of jumping.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match dom::scroll_to_section(&href) {
                Ok(()) => {
                    if let Some(on_navigate) = &on_navigate {
                        on_navigate.emit(());
                    }
                }
                Err(e) => log::debug!("no scroll target for {}: {}", href, e),
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
