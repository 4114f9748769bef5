use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::utils::dom;

/// Which FAQ panel is open. Holding a single optional id makes it impossible
/// for two panels to be expanded at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccordionState {
    expanded: Option<AttrValue>,
}

pub enum AccordionAction {
    Toggle(AttrValue),
    CollapseAll,
}

impl AccordionState {
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded() == Some(id)
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(id) => {
                let expanded = if self.is_expanded(&id) { None } else { Some(id) };
                Rc::new(Self { expanded })
            }
            AccordionAction::CollapseAll if self.expanded.is_none() => self,
            AccordionAction::CollapseAll => Rc::new(Self::default()),
        }
    }
}

/// `max-height` for a panel whose content measures `content_height` pixels.
pub fn panel_max_height(content_height: i32, expanded: bool) -> String {
    if expanded {
        format!("{}px", content_height + config::ACCORDION_PADDING_PX)
    } else {
        "0".to_string()
    }
}

/// How long a freshly opened panel glows, if it glows at all.
pub fn opening_glow_ms(expanded: bool) -> Option<u32> {
    expanded.then_some(config::FAQ_GLOW_MS)
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub id: AttrValue,
    pub question: AttrValue,
    pub answer: AttrValue,
}

impl FaqEntry {
    pub fn new(id: &'static str, question: &'static str, answer: &'static str) -> Self {
        Self {
            id: AttrValue::from(id),
            question: AttrValue::from(question),
            answer: AttrValue::from(answer),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_reducer(AccordionState::default);

    {
        let dispatcher = accordion.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = dom::on_escape(move || dispatcher.dispatch(AccordionAction::CollapseAll));
                if let Err(e) = &listener {
                    log::debug!("faq escape handling inactive: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| {
                let on_toggle = {
                    let dispatcher = accordion.dispatcher();
                    let id = entry.id.clone();
                    Callback::from(move |_: ()| dispatcher.dispatch(AccordionAction::Toggle(id.clone())))
                };
                html! {
                    <FaqItem
                        key={entry.id.to_string()}
                        entry={entry.clone()}
                        expanded={accordion.is_expanded(&entry.id)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    expanded: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();
    let glowing = use_state_eq(|| false);
    let glow_reset = use_mut_ref(|| None::<Timeout>);

    {
        let answer_ref = answer_ref.clone();
        let glowing = glowing.clone();
        use_effect_with_deps(
            move |expanded| {
                if let Some(answer) = answer_ref.cast::<HtmlElement>() {
                    let height = panel_max_height(answer.scroll_height(), *expanded);
                    if let Err(e) = answer.style().set_property("max-height", &height) {
                        log::debug!("could not size faq panel: {:?}", e);
                    }
                }

                match opening_glow_ms(*expanded) {
                    Some(ms) => {
                        glowing.set(true);
                        let glowing = glowing.clone();
                        *glow_reset.borrow_mut() = Some(Timeout::new(ms, move || glowing.set(false)));
                    }
                    None => {
                        glow_reset.borrow_mut().take();
                        glowing.set(false);
                    }
                }
                || ()
            },
            props.expanded,
        );
    }

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div id={props.entry.id.clone()} class={classes!("faq-item", props.expanded.then_some("active"), (*glowing).then_some("faq-item--glow"))}>
            <button class="faq-question" aria-expanded={props.expanded.to_string()} {onclick}>
                <span>{ props.entry.question.clone() }</span>
                <span class="faq-icon">{"+"}</span>
            </button>
            <div class="faq-answer" ref={answer_ref}>
                <p>{ props.entry.answer.clone() }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PANELS: [&str; 4] = ["start", "training", "channels", "trial"];

    fn toggle(state: Rc<AccordionState>, id: &'static str) -> Rc<AccordionState> {
        state.reduce(AccordionAction::Toggle(AttrValue::from(id)))
    }

    fn expanded_count(state: &AccordionState) -> usize {
        PANELS.iter().filter(|id| state.is_expanded(id)).count()
    }

    #[test]
    fn all_panels_start_collapsed() {
        let state = AccordionState::default();
        assert_eq!(expanded_count(&state), 0);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn toggling_the_expanded_panel_collapses_everything() {
        let state = toggle(Rc::default(), "start");
        let state = toggle(state, "start");
        assert_eq!(expanded_count(&state), 0);
    }

    #[test]
    fn opening_another_panel_closes_the_previous_one() {
        let state = toggle(Rc::default(), "start");
        let state = toggle(state, "trial");
        assert!(state.is_expanded("trial"));
        assert!(!state.is_expanded("start"));
        assert_eq!(expanded_count(&state), 1);
    }

    #[test]
    fn escape_collapses_the_open_panel() {
        let state = toggle(Rc::default(), "channels");
        let state = state.reduce(AccordionAction::CollapseAll);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn escape_without_an_open_panel_is_a_no_op() {
        let state: Rc<AccordionState> = Rc::default();
        let after = state.clone().reduce(AccordionAction::CollapseAll);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn expanded_height_adds_padding_to_content() {
        assert_eq!(panel_max_height(180, true), "200px");
        assert_eq!(panel_max_height(0, true), "20px");
        assert_eq!(panel_max_height(180, false), "0");
    }

    #[test]
    fn only_opening_a_panel_makes_it_glow() {
        assert_eq!(opening_glow_ms(true), Some(1_000));
        assert_eq!(opening_glow_ms(false), None);
    }

    proptest! {
        #[test]
        fn never_more_than_one_panel_expanded(picks in proptest::collection::vec(0usize..PANELS.len(), 0..40)) {
            let mut state: Rc<AccordionState> = Rc::default();
            for pick in picks {
                let id = PANELS[pick];
                let was_open = state.is_expanded(id);
                state = toggle(state, id);

                prop_assert!(expanded_count(&state) <= 1);
                prop_assert_eq!(state.is_expanded(id), !was_open);
            }
        }
    }
}
