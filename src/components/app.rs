use super::{event_display::EventDisplay, game_panel::GamePanel, game_selector::GameSelector};
use crate::catalog::Catalog;
use crate::dispatch::ClickTarget;
use crate::model::{UiAction, UiState};
use crate::util::{clog, cwarn};
use std::rc::Rc;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

fn load_catalog() -> Catalog {
    let mut catalog = match Catalog::embedded() {
        Ok(c) => c,
        Err(err) => {
            cwarn(&format!("games.json: {err}"));
            Catalog::default()
        }
    };
    if let Some(missing) = catalog.repair_default_game() {
        cwarn(&format!(
            "default game {missing} has no panel, using {}",
            catalog.default_game
        ));
    }
    catalog
}

fn log_transition(state: &UiState, action: &UiAction) {
    match action {
        UiAction::SelectGame { game, button } => {
            clog(&format!("game: {} -> {} (button {})", state.active_game, game, button));
        }
        UiAction::SelectMarker { marker, event } => match marker {
            Some(m) => clog(&format!("marker: {m} {event:?}")),
            None => clog(&format!("marker: - {event:?}")),
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PageViewProps {
    pub catalog: Rc<Catalog>,
    pub state: UiState,
    pub onclick: Callback<MouseEvent>,
}

// Markup is a pure function of the catalog and the current UI state.
#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let catalog = &props.catalog;
    let ui = &props.state;
    html! {
        <div id="root" onclick={props.onclick.clone()} style="max-width:760px; margin:0 auto; padding:24px 16px;">
            { if catalog.title.is_empty() { html!{} } else { html!{ <h1 style="text-align:center; font-size:24px; color:#58a6ff;">{ catalog.title.clone() }</h1> } } }
            <GameSelector games={catalog.games.clone()} active_button={ui.active_button} />
            { for catalog.games.iter().map(|g| html! {
                <GamePanel
                    key={g.number}
                    game={g.clone()}
                    active={ui.is_panel_active(g.number)}
                    highlighted={ui.highlighted}
                />
            }) }
            <EventDisplay text={ui.event_text.clone()} />
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| load_catalog());
    let ui = {
        let catalog = catalog.clone();
        use_reducer(move || UiState::new(&catalog))
    };

    // Single delegated handler for every button and marker on the page.
    let onclick = {
        let ui = ui.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            let Some(action) = ClickTarget::from_element(&target).into_action() else {
                return;
            };
            log_transition(&*ui, &action);
            ui.dispatch(action);
        })
    };

    html! { <PageView {catalog} state={(*ui).clone()} {onclick} /> }
}
